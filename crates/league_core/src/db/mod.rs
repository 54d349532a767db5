//! SQLite storage bootstrap for the league file.
//!
//! # Responsibility
//! - Open the league database (file or in-memory) with required pragmas.
//! - Create the schema on a fresh file before any league data is touched.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A file with any other schema version is refused, never rewritten.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file's schema is not the one this binary writes.
    UnsupportedSchemaVersion { db_version: u32, supported: u32 },
    /// A connection was handed over before the schema was created.
    SchemaNotReady { db_version: u32, expected: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                supported,
            } => write!(
                f,
                "league file schema version {db_version} is not supported (expected {supported})"
            ),
            Self::SchemaNotReady {
                db_version,
                expected,
            } => write!(
                f,
                "league file schema version {db_version} is not initialized to {expected}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::SchemaNotReady { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
