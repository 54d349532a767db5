//! Parsed commands and their execution against the league.
//!
//! # Responsibility
//! - Represent each verb with its already-validated operands.
//! - Apply a command to the store and report what happened.
//!
//! # Invariants
//! - Building a command never touches the store; a malformed line fails
//!   before execution.
//! - A failed execution leaves the store exactly as it was.
//! - Index operands are resolved only against the list of their own kind.

mod parser;
mod verb;

pub use parser::parse_command;
pub use verb::{all_usages, Verb};

use crate::model::field::ConstraintViolation;
use crate::model::match_record::Match;
use crate::model::player::Player;
use crate::model::team::Team;
use crate::model::{Entity, Searchable};
use crate::resolver::{DisplayedIndex, InvalidDisplayedIndex, LastShown, Listing, ShownList};
use crate::store::{EntityStore, League, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting League Tracker as requested ...";

/// One command line, parsed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPlayer(Player),
    AddFast(Player),
    DeletePlayer(DisplayedIndex),
    ViewPlayer(DisplayedIndex),
    ViewAllPlayer(DisplayedIndex),
    FindPlayer(Vec<String>),
    ListPlayers,
    ClearPlayers,
    AddTeam(Team),
    DeleteTeam(DisplayedIndex),
    ViewTeam(DisplayedIndex),
    FindTeam(Vec<String>),
    ListTeams,
    ClearTeams,
    AddMatch(Match),
    DeleteMatch(DisplayedIndex),
    ListMatches,
    ClearMatches,
    Help,
    Exit,
}

/// Recoverable, per-command failure. Rendered as user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Arguments do not match the verb's grammar.
    InvalidFormat { usage: &'static str },
    Constraint(ConstraintViolation),
    /// Duplicate add, or target missing from the live store.
    Store(StoreError),
    InvalidDisplayedIndex(InvalidDisplayedIndex),
}

impl CommandError {
    pub fn invalid_format(verb: Verb) -> Self {
        Self::InvalidFormat {
            usage: verb.usage(),
        }
    }

    /// Stable label for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::Constraint(_) => "constraint_violation",
            Self::Store(StoreError::Duplicate(_)) => "duplicate_entity",
            Self::Store(StoreError::NotFound(_)) => "entity_not_in_store",
            Self::InvalidDisplayedIndex(_) => "invalid_displayed_index",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { usage } => write!(f, "Invalid command format! \n{usage}"),
            Self::Constraint(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidDisplayedIndex(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat { .. } => None,
            Self::Constraint(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidDisplayedIndex(err) => Some(err),
        }
    }
}

impl From<ConstraintViolation> for CommandError {
    fn from(value: ConstraintViolation) -> Self {
        Self::Constraint(value)
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<InvalidDisplayedIndex> for CommandError {
    fn from(value: InvalidDisplayedIndex) -> Self {
        Self::InvalidDisplayedIndex(value)
    }
}

/// What a successful execution produced, before the dispatcher saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub feedback: String,
    /// New display list for the command's kind, possibly empty.
    pub listing: Option<Listing>,
    /// The store changed and must be persisted.
    pub mutated: bool,
    pub exit: bool,
}

impl Outcome {
    fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            listing: None,
            mutated: false,
            exit: false,
        }
    }

    fn mutation(feedback: impl Into<String>) -> Self {
        Self {
            mutated: true,
            ..Self::message(feedback)
        }
    }

    fn listing(listing: Listing) -> Self {
        let feedback = format!(
            "{} {} listed!",
            listing.len(),
            listing.kind().count_noun(listing.len())
        );
        Self {
            listing: Some(listing),
            ..Self::message(feedback)
        }
    }
}

impl Command {
    pub fn verb(&self) -> Verb {
        match self {
            Self::AddPlayer(_) => Verb::AddPlayer,
            Self::AddFast(_) => Verb::AddFast,
            Self::DeletePlayer(_) => Verb::DeletePlayer,
            Self::ViewPlayer(_) => Verb::ViewPlayer,
            Self::ViewAllPlayer(_) => Verb::ViewAllPlayer,
            Self::FindPlayer(_) => Verb::FindPlayer,
            Self::ListPlayers => Verb::ListPlayers,
            Self::ClearPlayers => Verb::ClearPlayers,
            Self::AddTeam(_) => Verb::AddTeam,
            Self::DeleteTeam(_) => Verb::DeleteTeam,
            Self::ViewTeam(_) => Verb::ViewTeam,
            Self::FindTeam(_) => Verb::FindTeam,
            Self::ListTeams => Verb::ListTeams,
            Self::ClearTeams => Verb::ClearTeams,
            Self::AddMatch(_) => Verb::AddMatch,
            Self::DeleteMatch(_) => Verb::DeleteMatch,
            Self::ListMatches => Verb::ListMatches,
            Self::ClearMatches => Verb::ClearMatches,
            Self::Help => Verb::Help,
            Self::Exit => Verb::Exit,
        }
    }

    /// Applies the command to `league`, resolving indices through `shown`.
    ///
    /// # Errors
    /// - Store and index failures; the league is unchanged when this returns
    ///   `Err`.
    pub fn execute(self, league: &mut League, shown: &LastShown) -> Result<Outcome, CommandError> {
        match self {
            Self::AddPlayer(player) | Self::AddFast(player) => add(&mut league.players, player),
            Self::DeletePlayer(index) => delete(&mut league.players, &shown.players, index),
            Self::ViewPlayer(index) => view(&league.players, &shown.players, index, false),
            Self::ViewAllPlayer(index) => view(&league.players, &shown.players, index, true),
            Self::FindPlayer(keywords) => Ok(find(&league.players, &keywords)),
            Self::ListPlayers => Ok(list(&league.players)),
            Self::ClearPlayers => Ok(clear(&mut league.players)),
            Self::AddTeam(team) => add(&mut league.teams, team),
            Self::DeleteTeam(index) => delete(&mut league.teams, &shown.teams, index),
            Self::ViewTeam(index) => view(&league.teams, &shown.teams, index, true),
            Self::FindTeam(keywords) => Ok(find(&league.teams, &keywords)),
            Self::ListTeams => Ok(list(&league.teams)),
            Self::ClearTeams => Ok(clear(&mut league.teams)),
            Self::AddMatch(fixture) => add(&mut league.matches, fixture),
            Self::DeleteMatch(index) => delete(&mut league.matches, &shown.matches, index),
            Self::ListMatches => Ok(list(&league.matches)),
            Self::ClearMatches => Ok(clear(&mut league.matches)),
            Self::Help => Ok(Outcome::message(all_usages())),
            Self::Exit => Ok(Outcome {
                exit: true,
                ..Outcome::message(MESSAGE_EXIT_ACKNOWLEDGEMENT)
            }),
        }
    }
}

fn add<T: Entity>(store: &mut EntityStore<T>, entity: T) -> Result<Outcome, CommandError> {
    let added = store.add(entity)?;
    Ok(Outcome::mutation(format!(
        "New {} added: {added}",
        T::KIND.singular()
    )))
}

fn delete<T: Entity>(
    store: &mut EntityStore<T>,
    shown: &ShownList<T>,
    index: DisplayedIndex,
) -> Result<Outcome, CommandError> {
    let target = shown.resolve(index)?;
    let removed = store.remove(target)?;
    Ok(Outcome::mutation(format!(
        "Deleted {}: {removed}",
        T::KIND.title()
    )))
}

fn view<T: Entity>(
    store: &EntityStore<T>,
    shown: &ShownList<T>,
    index: DisplayedIndex,
    full: bool,
) -> Result<Outcome, CommandError> {
    let target = shown.resolve(index)?;
    if !store.contains(target) {
        return Err(StoreError::NotFound(T::KIND).into());
    }
    let rendered = if full {
        target.to_string()
    } else {
        target.summary()
    };
    Ok(Outcome::message(format!(
        "Viewing {}: {rendered}",
        T::KIND.singular()
    )))
}

fn find<T>(store: &EntityStore<T>, keywords: &[String]) -> Outcome
where
    T: Searchable,
    Listing: From<Vec<Rc<T>>>,
{
    let hits = store
        .all()
        .iter()
        .filter(|entity| entity.matches_any(keywords))
        .cloned()
        .collect::<Vec<_>>();
    Outcome::listing(hits.into())
}

fn list<T>(store: &EntityStore<T>) -> Outcome
where
    T: Entity,
    Listing: From<Vec<Rc<T>>>,
{
    Outcome::listing(store.all().to_vec().into())
}

fn clear<T: Entity>(store: &mut EntityStore<T>) -> Outcome {
    store.clear();
    Outcome::mutation(format!(
        "All {} have been cleared from the league!",
        T::KIND.plural()
    ))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use crate::resolver::{DisplayedIndex, LastShown, Listing};
    use crate::store::League;

    fn run(line: &str, league: &mut League, shown: &mut LastShown) -> Result<String, CommandError> {
        let outcome = parse_command(line)?.execute(league, shown)?;
        if let Some(listing) = outcome.listing {
            shown.replace(listing);
        }
        Ok(outcome.feedback)
    }

    #[test]
    fn add_then_list_then_view_summary() {
        let mut league = League::new();
        let mut shown = LastShown::default();

        run(
            "addFast Kylian Mbappe p/Striker a/25 sal/1500000 tm/Real Madrid ctry/France jn/9",
            &mut league,
            &mut shown,
        )
        .unwrap();
        assert_eq!(run("list", &mut league, &mut shown).unwrap(), "1 player listed!");

        let feedback = run("view 1", &mut league, &mut shown).unwrap();
        assert_eq!(
            feedback,
            "Viewing player: Kylian Mbappe Position: Striker Team: Real Madrid Jersey Number: 9 Tags: "
        );
    }

    #[test]
    fn failed_add_does_not_mutate() {
        let mut league = League::new();
        let shown = LastShown::default();
        let line = "addTeam FC Barcelona c/Spain s/Spotify";

        let outcome = parse_command(line).unwrap().execute(&mut league, &shown).unwrap();
        assert!(outcome.mutated);

        let err = parse_command(line).unwrap().execute(&mut league, &shown).unwrap_err();
        assert_eq!(err.to_string(), "This team already exists in the league");
        assert_eq!(league.teams.len(), 1);
    }

    #[test]
    fn team_indices_ignore_player_listing() {
        let mut league = League::new();
        let mut shown = LastShown::default();
        run("addTeam FC Barcelona c/Spain s/Spotify", &mut league, &mut shown).unwrap();
        run("listTeam", &mut league, &mut shown).unwrap();
        run("list", &mut league, &mut shown).unwrap();

        assert_eq!(shown.teams.len(), 1);
        let err = run("delete 1", &mut league, &mut shown).unwrap_err();
        assert_eq!(err.to_string(), "The player index provided is invalid");

        let feedback = run("deleteTeam 1", &mut league, &mut shown).unwrap();
        assert!(feedback.starts_with("Deleted Team: FC Barcelona"));
        assert!(league.teams.is_empty());
    }

    #[test]
    fn empty_listing_still_replaces_shown_list() {
        let mut league = League::new();
        let shown = LastShown::default();
        let outcome = Command::ListMatches.execute(&mut league, &shown).unwrap();
        assert_eq!(outcome.feedback, "0 matches listed!");
        assert_eq!(outcome.listing, Some(Listing::Matches(Vec::new())));
        assert!(!outcome.mutated);
    }

    #[test]
    fn view_of_missing_entity_reports_not_found() {
        let mut league = League::new();
        let mut shown = LastShown::default();
        run(
            "addMatch 2024-05-01 h/FC Barcelona a/Real Madrid st/Camp Nou",
            &mut league,
            &mut shown,
        )
        .unwrap();
        run("listMatch", &mut league, &mut shown).unwrap();
        run("clearMatch", &mut league, &mut shown).unwrap();

        let err = Command::DeleteMatch(DisplayedIndex(1))
            .execute(&mut league, &shown)
            .unwrap_err();
        assert_eq!(err.to_string(), "Match could not be found in the league");
    }
}
