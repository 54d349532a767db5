//! Persistence boundary for the league.
//!
//! # Responsibility
//! - Define the load/save contract the dispatcher depends on.
//! - Isolate SQLite details from command execution.
//!
//! # Invariants
//! - Repositories return semantic errors (`InvalidRow`, `DuplicateRow`) in addition to
//!   database transport errors.

pub mod league_repo;
