//! League domain model.
//!
//! # Responsibility
//! - Define players, teams and matches as records of validated attributes.
//! - Give the store and commands a kind-agnostic view through [`Entity`].
//!
//! # Invariants
//! - Entities have no surrogate identifier; equality is attribute-wise,
//!   tag sets included.
//! - An entity can only be assembled from already-parsed attribute values.

pub mod field;
pub mod match_record;
pub mod player;
pub mod tag;
pub mod team;

use self::tag::Tags;
use std::fmt::Display;

/// The three record kinds kept by the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Team,
    Match,
}

impl EntityKind {
    /// Lowercase singular noun, e.g. `player`.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Team => "team",
            Self::Match => "match",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Player => "players",
            Self::Team => "teams",
            Self::Match => "matches",
        }
    }

    /// Capitalized singular noun for sentence starts.
    pub fn title(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Team => "Team",
            Self::Match => "Match",
        }
    }

    /// Noun matching `count`, e.g. `1 player` / `2 players`.
    pub fn count_noun(self, count: usize) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

/// Behavior shared by every storable record.
pub trait Entity: PartialEq + Display {
    const KIND: EntityKind;

    fn tags(&self) -> &Tags;

    /// Condensed rendering for `view`-style output. Defaults to the full one.
    fn summary(&self) -> String {
        self.to_string()
    }
}

/// Entities that `find` can match by whole name tokens.
pub trait Searchable: Entity {
    fn search_words(&self) -> Vec<&str>;

    /// Case-sensitive, whole-token match of any keyword against the name.
    fn matches_any(&self, keywords: &[String]) -> bool {
        self.search_words()
            .into_iter()
            .any(|word| keywords.iter().any(|keyword| keyword == word))
    }
}
