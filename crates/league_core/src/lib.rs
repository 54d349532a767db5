//! Core domain logic for the league tracker.
//! This crate is the single source of truth for league invariants.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod resolver;
pub mod service;
pub mod store;

pub use command::{Command, CommandError, MESSAGE_EXIT_ACKNOWLEDGEMENT};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::match_record::Match;
pub use model::player::Player;
pub use model::team::Team;
pub use model::EntityKind;
pub use repo::league_repo::{LeagueRepository, RepoError, RepoResult, SqliteLeagueRepository};
pub use resolver::{LastShown, Listing};
pub use service::logic::{CommandResult, Logic};
pub use store::League;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
