//! League persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the whole league from, and save it to, the league file.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces every stored row in one transaction; a failed save
//!   leaves the previous snapshot readable.
//! - `load` returns exactly what the last successful `save` wrote, in store
//!   order.
//! - Read paths re-validate every attribute and reject invalid persisted
//!   state instead of masking it.

use crate::db::{open_db, open_db_in_memory, schema, DbError};
use crate::model::field::ConstraintViolation;
use crate::model::match_record::{Match, RawMatch};
use crate::model::player::{Player, RawPlayer};
use crate::model::team::{RawTeam, Team};
use crate::model::Entity;
use crate::store::{EntityStore, League};
use log::{error, info};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

const CLEAR_ALL_SQL: &str = "DELETE FROM player_tags;
DELETE FROM players;
DELETE FROM team_tags;
DELETE FROM teams;
DELETE FROM match_tags;
DELETE FROM matches;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure. Fatal to the command that triggered it.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored attribute failed re-validation.
    InvalidRow {
        table: &'static str,
        position: i64,
        field: &'static str,
        value: String,
    },
    /// Two stored rows hold equal entities.
    DuplicateRow { table: &'static str, position: i64 },
    InvalidData(String),
}

impl RepoError {
    /// Stable label for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "db_error",
            Self::InvalidRow { .. } | Self::DuplicateRow { .. } | Self::InvalidData(_) => {
                "invalid_persisted_data"
            }
        }
    }

    /// Metadata-only `key=value` description; never includes stored values.
    pub fn log_fields(&self) -> String {
        match self {
            Self::InvalidRow {
                table,
                position,
                field,
                ..
            } => format!(
                "error_code={} table={table} position={position} field={}",
                self.code(),
                field.replace(' ', "_")
            ),
            Self::DuplicateRow { table, position } => format!(
                "error_code={} table={table} position={position} field=none",
                self.code()
            ),
            Self::Db(_) | Self::InvalidData(_) => format!("error_code={}", self.code()),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidRow {
                table,
                position,
                field,
                value,
            } => write!(
                f,
                "invalid persisted league data: invalid {field} `{value}` in {table} at position {position}"
            ),
            Self::DuplicateRow { table, position } => write!(
                f,
                "invalid persisted league data: duplicate row in {table} at position {position}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted league data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save capability consumed by the dispatcher.
pub trait LeagueRepository {
    fn load(&self) -> RepoResult<League>;
    /// All-or-nothing snapshot write.
    fn save(&mut self, league: &League) -> RepoResult<()>;
}

/// SQLite-backed league file.
pub struct SqliteLeagueRepository {
    conn: Connection,
}

impl SqliteLeagueRepository {
    /// Wraps a connection whose schema is already in place.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        let db_version = schema::current_user_version(&conn)?;
        let expected = schema::SCHEMA_VERSION;
        if db_version != expected {
            return Err(DbError::SchemaNotReady {
                db_version,
                expected,
            }
            .into());
        }
        Ok(Self { conn })
    }

    /// Opens (creating if needed) the league file at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::try_new(open_db(path)?)
    }

    pub fn open_in_memory() -> RepoResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }
}

impl LeagueRepository for SqliteLeagueRepository {
    fn load(&self) -> RepoResult<League> {
        let started_at = Instant::now();
        let result = read_league(&self.conn);
        match &result {
            Ok(league) => info!(
                "event=league_load module=repo status=ok players={} teams={} matches={} duration_ms={}",
                league.players.len(),
                league.teams.len(),
                league.matches.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=league_load module=repo status=error duration_ms={} {}",
                started_at.elapsed().as_millis(),
                err.log_fields()
            ),
        }
        result
    }

    fn save(&mut self, league: &League) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = write_league(&mut self.conn, league);
        match &result {
            Ok(()) => info!(
                "event=league_save module=repo status=ok players={} teams={} matches={} duration_ms={}",
                league.players.len(),
                league.teams.len(),
                league.matches.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=league_save module=repo status=error duration_ms={} {}",
                started_at.elapsed().as_millis(),
                err.log_fields()
            ),
        }
        result
    }
}

fn write_league(conn: &mut Connection, league: &League) -> RepoResult<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute_batch(CLEAR_ALL_SQL)?;
    insert_players(&tx, league.players.all())?;
    insert_teams(&tx, league.teams.all())?;
    insert_matches(&tx, league.matches.all())?;
    tx.commit()?;
    Ok(())
}

fn insert_players(tx: &Transaction<'_>, players: &[Rc<Player>]) -> RepoResult<()> {
    let mut row_stmt = tx.prepare(
        "INSERT INTO players (
            position,
            name,
            position_played,
            age,
            salary,
            goals_scored,
            goals_assisted,
            team,
            nationality,
            jersey_number,
            appearance,
            health_status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);",
    )?;
    let mut tag_stmt =
        tx.prepare("INSERT INTO player_tags (player_position, tag) VALUES (?1, ?2);")?;

    for (index, player) in players.iter().enumerate() {
        let position = row_position(index)?;
        row_stmt.execute(params![
            position,
            player.name.as_str(),
            player.position.as_str(),
            player.age.to_string(),
            player.salary.to_string(),
            player.goals_scored.to_string(),
            player.goals_assisted.to_string(),
            player.team.as_str(),
            player.nationality.as_str(),
            player.jersey_number.to_string(),
            player.appearance.to_string(),
            player.health_status.as_str(),
        ])?;
        for tag in player.tags() {
            tag_stmt.execute(params![position, tag.as_str()])?;
        }
    }
    Ok(())
}

fn insert_teams(tx: &Transaction<'_>, teams: &[Rc<Team>]) -> RepoResult<()> {
    let mut row_stmt = tx.prepare(
        "INSERT INTO teams (position, name, country, sponsor) VALUES (?1, ?2, ?3, ?4);",
    )?;
    let mut tag_stmt = tx.prepare("INSERT INTO team_tags (team_position, tag) VALUES (?1, ?2);")?;

    for (index, team) in teams.iter().enumerate() {
        let position = row_position(index)?;
        row_stmt.execute(params![
            position,
            team.name.as_str(),
            team.country.as_str(),
            team.sponsor.as_str(),
        ])?;
        for tag in team.tags() {
            tag_stmt.execute(params![position, tag.as_str()])?;
        }
    }
    Ok(())
}

fn insert_matches(tx: &Transaction<'_>, matches: &[Rc<Match>]) -> RepoResult<()> {
    let mut row_stmt = tx.prepare(
        "INSERT INTO matches (position, match_date, home, away, stadium)
         VALUES (?1, ?2, ?3, ?4, ?5);",
    )?;
    let mut tag_stmt =
        tx.prepare("INSERT INTO match_tags (match_position, tag) VALUES (?1, ?2);")?;

    for (index, fixture) in matches.iter().enumerate() {
        let position = row_position(index)?;
        row_stmt.execute(params![
            position,
            fixture.date.to_string(),
            fixture.home.as_str(),
            fixture.away.as_str(),
            fixture.stadium.as_str(),
        ])?;
        for tag in fixture.tags() {
            tag_stmt.execute(params![position, tag.as_str()])?;
        }
    }
    Ok(())
}

fn read_league(conn: &Connection) -> RepoResult<League> {
    Ok(League {
        players: read_players(conn)?,
        teams: read_teams(conn)?,
        matches: read_matches(conn)?,
    })
}

fn read_players(conn: &Connection) -> RepoResult<EntityStore<Player>> {
    let mut tags = read_tags(conn, "SELECT player_position, tag FROM player_tags;")?;
    let mut stmt = conn.prepare(
        "SELECT
            position,
            name,
            position_played,
            age,
            salary,
            goals_scored,
            goals_assisted,
            team,
            nationality,
            jersey_number,
            appearance,
            health_status
         FROM players
         ORDER BY position ASC;",
    )?;

    let mut store = EntityStore::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let position: i64 = row.get("position")?;
        let name: String = row.get("name")?;
        let position_played: String = row.get("position_played")?;
        let age: String = row.get("age")?;
        let salary: String = row.get("salary")?;
        let goals_scored: String = row.get("goals_scored")?;
        let goals_assisted: String = row.get("goals_assisted")?;
        let team: String = row.get("team")?;
        let nationality: String = row.get("nationality")?;
        let jersey_number: String = row.get("jersey_number")?;
        let appearance: String = row.get("appearance")?;
        let health_status: String = row.get("health_status")?;
        let row_tags = tags.remove(&position).unwrap_or_default();

        let player = RawPlayer {
            name: &name,
            position: &position_played,
            age: &age,
            salary: &salary,
            goals_scored: Some(goals_scored.as_str()),
            goals_assisted: Some(goals_assisted.as_str()),
            team: &team,
            nationality: &nationality,
            jersey_number: &jersey_number,
            appearance: Some(appearance.as_str()),
            health_status: Some(health_status.as_str()),
            tags: row_tags.iter().map(String::as_str).collect(),
        }
        .parse()
        .map_err(|err| invalid_row("players", position, &err))?;
        add_loaded(&mut store, player, "players", position)?;
    }
    Ok(store)
}

fn read_teams(conn: &Connection) -> RepoResult<EntityStore<Team>> {
    let mut tags = read_tags(conn, "SELECT team_position, tag FROM team_tags;")?;
    let mut stmt =
        conn.prepare("SELECT position, name, country, sponsor FROM teams ORDER BY position ASC;")?;

    let mut store = EntityStore::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let position: i64 = row.get("position")?;
        let name: String = row.get("name")?;
        let country: String = row.get("country")?;
        let sponsor: String = row.get("sponsor")?;
        let row_tags = tags.remove(&position).unwrap_or_default();

        let team = RawTeam {
            name: &name,
            country: &country,
            sponsor: &sponsor,
            tags: row_tags.iter().map(String::as_str).collect(),
        }
        .parse()
        .map_err(|err| invalid_row("teams", position, &err))?;
        add_loaded(&mut store, team, "teams", position)?;
    }
    Ok(store)
}

fn read_matches(conn: &Connection) -> RepoResult<EntityStore<Match>> {
    let mut tags = read_tags(conn, "SELECT match_position, tag FROM match_tags;")?;
    let mut stmt = conn.prepare(
        "SELECT position, match_date, home, away, stadium
         FROM matches
         ORDER BY position ASC;",
    )?;

    let mut store = EntityStore::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let position: i64 = row.get("position")?;
        let date: String = row.get("match_date")?;
        let home: String = row.get("home")?;
        let away: String = row.get("away")?;
        let stadium: String = row.get("stadium")?;
        let row_tags = tags.remove(&position).unwrap_or_default();

        let fixture = RawMatch {
            date: &date,
            home: &home,
            away: &away,
            stadium: &stadium,
            tags: row_tags.iter().map(String::as_str).collect(),
        }
        .parse()
        .map_err(|err| invalid_row("matches", position, &err))?;
        add_loaded(&mut store, fixture, "matches", position)?;
    }
    Ok(store)
}

/// Groups `(position, tag)` rows by owning position.
fn read_tags(conn: &Connection, sql: &str) -> RepoResult<HashMap<i64, Vec<String>>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
    while let Some(row) = rows.next()? {
        tags.entry(row.get(0)?).or_default().push(row.get(1)?);
    }
    Ok(tags)
}

fn add_loaded<T: Entity>(
    store: &mut EntityStore<T>,
    entity: T,
    table: &'static str,
    position: i64,
) -> RepoResult<()> {
    store
        .add(entity)
        .map(|_| ())
        .map_err(|_| RepoError::DuplicateRow { table, position })
}

fn invalid_row(table: &'static str, position: i64, err: &ConstraintViolation) -> RepoError {
    RepoError::InvalidRow {
        table,
        position,
        field: err.field(),
        value: err.value().to_string(),
    }
}

fn row_position(index: usize) -> RepoResult<i64> {
    i64::try_from(index)
        .map_err(|_| RepoError::InvalidData(format!("row index {index} exceeds i64 range")))
}
