//! In-memory entity store.
//!
//! # Responsibility
//! - Hold players, teams and matches in insertion order.
//! - Own the "no two equal entities" invariant.
//!
//! # Invariants
//! - A store never contains two value-equal entities; duplicate adds fail.
//! - Removal targets the unique value-equal entity.
//! - The store never persists; callers save after mutations.

mod entity_store;

pub use entity_store::{EntityStore, StoreError, StoreResult};

use crate::model::match_record::Match;
use crate::model::player::Player;
use crate::model::team::Team;

/// The whole league: one store per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct League {
    pub players: EntityStore<Player>,
    pub teams: EntityStore<Team>,
    pub matches: EntityStore<Match>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no kind holds any entity.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.teams.is_empty() && self.matches.is_empty()
    }
}
