use league_core::model::match_record::RawMatch;
use league_core::model::player::RawPlayer;
use league_core::model::team::RawTeam;
use league_core::{League, LeagueRepository, RepoError, SqliteLeagueRepository};

fn player(name: &str, jersey: &str, tags: Vec<&str>) -> league_core::Player {
    RawPlayer {
        name,
        position: "Striker",
        age: "27",
        salary: "20000",
        goals_scored: Some("12"),
        goals_assisted: Some("4"),
        team: "FC Barcelona",
        nationality: "Spain",
        jersey_number: jersey,
        appearance: Some("30"),
        health_status: Some("Injured"),
        tags,
    }
    .parse()
    .unwrap()
}

fn sample_league() -> League {
    let mut league = League::new();
    league
        .players
        .add(player("Lionel Messi", "10", vec!["captain", "veteran"]))
        .unwrap();
    league.players.add(player("Pedri", "8", Vec::new())).unwrap();
    league
        .teams
        .add(
            RawTeam {
                name: "FC Barcelona",
                country: "Spain",
                sponsor: "Spotify",
                tags: vec!["champions"],
            }
            .parse()
            .unwrap(),
        )
        .unwrap();
    league
        .matches
        .add(
            RawMatch {
                date: "2024-02-29",
                home: "FC Barcelona",
                away: "Real Madrid",
                stadium: "Camp Nou",
                tags: vec!["derby"],
            }
            .parse()
            .unwrap(),
        )
        .unwrap();
    league
}

#[test]
fn fresh_file_loads_empty_league() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteLeagueRepository::open(dir.path().join("league.db")).unwrap();

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn saved_league_survives_reopen_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");
    let league = sample_league();

    let mut repo = SqliteLeagueRepository::open(&path).unwrap();
    repo.save(&league).unwrap();
    drop(repo);

    let reopened = SqliteLeagueRepository::open(&path).unwrap();
    let loaded = reopened.load().unwrap();
    assert_eq!(loaded, league);
    let names = loaded
        .players
        .all()
        .iter()
        .map(|p| p.name.as_str().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Lionel Messi", "Pedri"]);
}

#[test]
fn save_replaces_previous_snapshot() {
    let mut repo = SqliteLeagueRepository::open_in_memory().unwrap();
    repo.save(&sample_league()).unwrap();

    let mut smaller = League::new();
    smaller.players.add(player("Gavi", "6", Vec::new())).unwrap();
    repo.save(&smaller).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded, smaller);
    assert!(loaded.teams.is_empty());
    assert!(loaded.matches.is_empty());
}

#[test]
fn invalid_persisted_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");
    let mut repo = SqliteLeagueRepository::open(&path).unwrap();
    repo.save(&sample_league()).unwrap();
    drop(repo);

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute("UPDATE players SET jersey_number = '99' WHERE position = 0;", [])
        .unwrap();
    drop(conn);

    let repo = SqliteLeagueRepository::open(&path).unwrap();
    match repo.load().unwrap_err() {
        RepoError::InvalidRow {
            table,
            position,
            field,
            value,
        } => {
            assert_eq!((table, position, field), ("players", 0, "jersey number"));
            assert_eq!(value, "99");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_persisted_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");
    let mut repo = SqliteLeagueRepository::open(&path).unwrap();
    repo.save(&sample_league()).unwrap();
    drop(repo);

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO teams (position, name, country, sponsor)
         VALUES (7, 'FC Barcelona', 'Spain', 'Spotify');",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO team_tags (team_position, tag) VALUES (7, 'champions');",
        [],
    )
    .unwrap();
    drop(conn);

    let repo = SqliteLeagueRepository::open(&path).unwrap();
    assert!(matches!(
        repo.load(),
        Err(RepoError::DuplicateRow {
            table: "teams",
            position: 7
        })
    ));
}

#[test]
fn load_error_log_fields_omit_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.db");
    drop(SqliteLeagueRepository::open(&path).unwrap());

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO teams (position, name, country, sponsor)
         VALUES (0, 'Secret Club!!', 'Spain', 'Spotify');",
        [],
    )
    .unwrap();
    drop(conn);

    let repo = SqliteLeagueRepository::open(&path).unwrap();
    let err = repo.load().unwrap_err();

    assert!(err.to_string().contains("Secret Club!!"));
    let logged = err.log_fields();
    assert_eq!(
        logged,
        "error_code=invalid_persisted_data table=teams position=0 field=team"
    );
    assert!(!logged.contains("Secret"));
}
