use league_core::db::schema::SCHEMA_VERSION;
use league_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

const LEAGUE_TABLES: [&str; 6] = [
    "players",
    "player_tags",
    "teams",
    "team_tags",
    "matches",
    "match_tags",
];

#[test]
fn fresh_database_gets_league_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    for table in LEAGUE_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn reopening_league_file_keeps_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO teams (position, name, country, sponsor)
             VALUES (0, 'FC Barcelona', 'Spain', 'Spotify');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), SCHEMA_VERSION);
    let teams: i64 = second
        .query_row("SELECT COUNT(*) FROM teams;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(teams, 1);
}

#[test]
fn league_file_with_other_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
