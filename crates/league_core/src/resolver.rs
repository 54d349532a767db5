//! Last-shown-list resolution for index-based commands.
//!
//! # Responsibility
//! - Remember, per entity kind, the ordered entities most recently displayed.
//! - Map 1-based displayed indices back to those entities.
//!
//! # Invariants
//! - Lists start empty and are replaced wholesale, never merged.
//! - A resolved entity may no longer be in the live store; callers re-check.

use crate::model::match_record::Match;
use crate::model::player::Player;
use crate::model::team::Team;
use crate::model::{Entity, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// 1-based position as typed by the user. May be out of range or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedIndex(pub i64);

/// Index outside `[1, len]` of the relevant shown list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDisplayedIndex(pub EntityKind);

impl Display for InvalidDisplayedIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "The {} index provided is invalid", self.0.singular())
    }
}

impl Error for InvalidDisplayedIndex {}

/// The entities one listing command displayed, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownList<T> {
    items: Vec<Rc<T>>,
}

impl<T> Default for ShownList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> ShownList<T> {
    pub fn new(items: Vec<Rc<T>>) -> Self {
        Self { items }
    }

    /// Returns the entity shown at `index`.
    ///
    /// # Errors
    /// - [`InvalidDisplayedIndex`] when `index < 1` or `index > len`.
    pub fn resolve(&self, index: DisplayedIndex) -> Result<&Rc<T>, InvalidDisplayedIndex> {
        usize::try_from(index.0)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|offset| self.items.get(offset))
            .ok_or(InvalidDisplayedIndex(T::KIND))
    }

    pub fn items(&self) -> &[Rc<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A freshly produced display list, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Players(Vec<Rc<Player>>),
    Teams(Vec<Rc<Team>>),
    Matches(Vec<Rc<Match>>),
}

impl Listing {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Players(_) => EntityKind::Player,
            Self::Teams(_) => EntityKind::Team,
            Self::Matches(_) => EntityKind::Match,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Players(items) => items.len(),
            Self::Teams(items) => items.len(),
            Self::Matches(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listing lines in display order. Players show their summary, which
    /// leaves out salary, statistics and health.
    pub fn render_items(&self) -> Vec<String> {
        match self {
            Self::Players(items) => items.iter().map(|item| item.summary()).collect(),
            Self::Teams(items) => items.iter().map(|item| item.summary()).collect(),
            Self::Matches(items) => items.iter().map(|item| item.summary()).collect(),
        }
    }
}

impl From<Vec<Rc<Player>>> for Listing {
    fn from(items: Vec<Rc<Player>>) -> Self {
        Self::Players(items)
    }
}

impl From<Vec<Rc<Team>>> for Listing {
    fn from(items: Vec<Rc<Team>>) -> Self {
        Self::Teams(items)
    }
}

impl From<Vec<Rc<Match>>> for Listing {
    fn from(items: Vec<Rc<Match>>) -> Self {
        Self::Matches(items)
    }
}

/// Per-kind last-shown lists owned by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastShown {
    pub players: ShownList<Player>,
    pub teams: ShownList<Team>,
    pub matches: ShownList<Match>,
}

impl LastShown {
    /// Replaces the list of the listing's kind; other kinds are untouched.
    pub fn replace(&mut self, listing: Listing) {
        match listing {
            Listing::Players(items) => self.players = ShownList::new(items),
            Listing::Teams(items) => self.teams = ShownList::new(items),
            Listing::Matches(items) => self.matches = ShownList::new(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayedIndex, InvalidDisplayedIndex, LastShown, Listing, ShownList};
    use crate::model::team::{RawTeam, Team};
    use crate::model::EntityKind;
    use std::rc::Rc;

    fn team(name: &str) -> Rc<Team> {
        Rc::new(
            RawTeam {
                name,
                country: "Spain",
                sponsor: "Spotify",
                tags: Vec::new(),
            }
            .parse()
            .unwrap(),
        )
    }

    #[test]
    fn resolves_one_based_indices_to_shared_entities() {
        let first = team("Alpha");
        let list = ShownList::new(vec![Rc::clone(&first), team("Beta")]);

        let resolved = list.resolve(DisplayedIndex(1)).unwrap();
        assert!(Rc::ptr_eq(resolved, &first));
        assert_eq!(list.resolve(DisplayedIndex(2)).unwrap().name.as_str(), "Beta");
    }

    #[test]
    fn rejects_indices_outside_range() {
        let list = ShownList::new(vec![team("Alpha"), team("Beta")]);
        for index in [-1, 0, 3, i64::MIN, i64::MAX] {
            assert_eq!(
                list.resolve(DisplayedIndex(index)).unwrap_err(),
                InvalidDisplayedIndex(EntityKind::Team)
            );
        }

        let empty: ShownList<Team> = ShownList::default();
        assert!(empty.resolve(DisplayedIndex(1)).is_err());
    }

    #[test]
    fn replace_only_touches_listing_kind() {
        let mut shown = LastShown::default();
        shown.replace(Listing::Teams(vec![team("Alpha")]));
        shown.replace(Listing::Players(Vec::new()));

        assert_eq!(shown.teams.len(), 1);
        assert!(shown.players.is_empty());

        shown.replace(Listing::Teams(Vec::new()));
        assert!(shown.teams.is_empty());
    }
}
