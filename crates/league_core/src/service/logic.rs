//! Command dispatcher.
//!
//! # Responsibility
//! - Turn one raw input line into a parsed, executed command.
//! - Persist the league after every successful mutation.
//! - Keep the per-kind last-shown lists in step with listing commands.
//!
//! # Invariants
//! - Recoverable command failures become feedback; they never escape
//!   `execute` as errors.
//! - A save failure is returned as `Err` and is never reported as success.
//! - Last-shown lists change only when a command produced a listing.

use crate::command::{parse_command, Command, CommandError, Outcome};
use crate::model::player::Player;
use crate::repo::league_repo::{LeagueRepository, RepoResult};
use crate::resolver::{LastShown, Listing};
use crate::store::League;
use log::{error, info, warn};
use std::rc::Rc;
use std::time::Instant;

/// Caller-facing outcome of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    relevant: Option<Listing>,
    exit: bool,
}

impl CommandResult {
    fn feedback(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            relevant: None,
            exit: false,
        }
    }

    /// Entities to display. `None` unless a listing command found at least one.
    pub fn relevant(&self) -> Option<&Listing> {
        self.relevant.as_ref()
    }

    pub fn relevant_players(&self) -> Option<&[Rc<Player>]> {
        match &self.relevant {
            Some(Listing::Players(players)) => Some(players),
            _ => None,
        }
    }

    /// Set by `exit`; the caller should stop reading input.
    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// Owns the league, its last-shown lists and the repository behind them.
pub struct Logic<R: LeagueRepository> {
    repo: R,
    league: League,
    last_shown: LastShown,
}

impl<R: LeagueRepository> Logic<R> {
    /// Loads the league from `repo`. Last-shown lists start empty.
    pub fn new(repo: R) -> RepoResult<Self> {
        let league = repo.load()?;
        Ok(Self {
            repo,
            league,
            last_shown: LastShown::default(),
        })
    }

    /// Parses and runs one line.
    ///
    /// # Errors
    /// - Returns the repository error when a mutation could not be saved.
    ///   The in-memory league already holds the mutation at that point, so
    ///   callers must stop processing input.
    pub fn execute(&mut self, line: &str) -> RepoResult<CommandResult> {
        let started_at = Instant::now();

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                log_rejected("parse", "none", &err);
                return Ok(CommandResult::feedback(err.to_string()));
            }
        };
        let verb = command.verb().word();

        let outcome = match self.run(command) {
            Ok(outcome) => outcome,
            Err(err) => {
                log_rejected("execute", verb, &err);
                return Ok(CommandResult::feedback(err.to_string()));
            }
        };

        if outcome.mutated {
            if let Err(err) = self.repo.save(&self.league) {
                error!(
                    "event=command_execute module=logic status=error verb={verb} error_code=save_failed"
                );
                return Err(err);
            }
        }

        let relevant = outcome.listing.and_then(|listing| {
            self.last_shown.replace(listing.clone());
            (!listing.is_empty()).then_some(listing)
        });

        info!(
            "event=command_execute module=logic status=ok verb={verb} saved={} listed={} duration_ms={}",
            outcome.mutated,
            relevant.as_ref().map_or(0, Listing::len),
            started_at.elapsed().as_millis()
        );

        Ok(CommandResult {
            feedback_to_user: outcome.feedback,
            relevant,
            exit: outcome.exit,
        })
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn last_shown(&self) -> &LastShown {
        &self.last_shown
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn run(&mut self, command: Command) -> Result<Outcome, CommandError> {
        command.execute(&mut self.league, &self.last_shown)
    }
}

fn log_rejected(stage: &str, verb: &str, err: &CommandError) {
    warn!(
        "event=command_execute module=logic status=rejected stage={stage} verb={verb} error_kind={}",
        err.kind()
    );
}
