//! League file schema.
//!
//! # Invariants
//! - A fresh file gets the whole schema and `user_version = SCHEMA_VERSION`
//!   in one transaction.
//! - Any other version is refused; files are never rewritten in place.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Schema version this binary reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("0001_league.sql");

/// Creates the tables on an empty file, or checks an existing file's version.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    match current_user_version(conn)? {
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(SCHEMA_SQL)?;
            tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
            tx.commit()?;
            info!("event=db_schema module=db status=created version={SCHEMA_VERSION}");
            Ok(())
        }
        SCHEMA_VERSION => Ok(()),
        db_version => Err(DbError::UnsupportedSchemaVersion {
            db_version,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Reads `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
