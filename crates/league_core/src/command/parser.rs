//! Raw line to [`Command`] parsing.
//!
//! # Invariants
//! - Blank input is a format error against `help`.
//! - An unknown command word yields [`Command::Help`], not a format error.
//! - Grammar failures report the verb's usage; attribute failures report the
//!   broken field rule.

use super::{Command, CommandError, Verb};
use crate::model::match_record::{Match, RawMatch};
use crate::model::player::{Player, RawPlayer};
use crate::model::team::{RawTeam, Team};
use crate::resolver::DisplayedIndex;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ADD_PLAYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+) p/(?P<position>[^/]+) a/(?P<age>[^/]+) sal/(?P<salary>[^/]+) gs/(?P<goals_scored>[^/]+) ga/(?P<goals_assisted>[^/]+) tm/(?P<team>[^/]+) ctry/(?P<nationality>[^/]+) jn/(?P<jersey_number>[^/]+) app/(?P<appearance>[^/]+) hs/(?P<health_status>[^/]+)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid addPlayer regex")
});
static ADD_FAST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+) p/(?P<position>[^/]+) a/(?P<age>[^/]+) sal/(?P<salary>[^/]+) tm/(?P<team>[^/]+) ctry/(?P<nationality>[^/]+) jn/(?P<jersey_number>[^/]+)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid addFast regex")
});
static ADD_TEAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+) c/(?P<country>[^/]+) s/(?P<sponsor>[^/]+)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid addTeam regex")
});
static ADD_MATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<date>[^/\s]+) h/(?P<home>[^/]+) a/(?P<away>[^/]+) st/(?P<stadium>[^/]+)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid addMatch regex")
});
static TAG_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+t/").expect("valid tag prefix regex"));

/// Parses one input line into a validated command.
///
/// # Errors
/// - [`CommandError::InvalidFormat`] when the line is blank or the arguments
///   do not fit the verb's grammar.
/// - [`CommandError::Constraint`] when an attribute value is rejected.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CommandError::invalid_format(Verb::Help));
    }

    let (word, arguments) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

    let Some(verb) = Verb::from_word(word) else {
        return Ok(Command::Help);
    };

    match verb {
        Verb::AddPlayer => parse_add_player(verb, arguments).map(Command::AddPlayer),
        Verb::AddFast => parse_add_player(verb, arguments).map(Command::AddFast),
        Verb::DeletePlayer => parse_index(verb, arguments).map(Command::DeletePlayer),
        Verb::ViewPlayer => parse_index(verb, arguments).map(Command::ViewPlayer),
        Verb::ViewAllPlayer => parse_index(verb, arguments).map(Command::ViewAllPlayer),
        Verb::FindPlayer => parse_keywords(verb, arguments).map(Command::FindPlayer),
        Verb::ListPlayers => Ok(Command::ListPlayers),
        Verb::ClearPlayers => Ok(Command::ClearPlayers),
        Verb::AddTeam => parse_add_team(arguments).map(Command::AddTeam),
        Verb::DeleteTeam => parse_index(verb, arguments).map(Command::DeleteTeam),
        Verb::ViewTeam => parse_index(verb, arguments).map(Command::ViewTeam),
        Verb::FindTeam => parse_keywords(verb, arguments).map(Command::FindTeam),
        Verb::ListTeams => Ok(Command::ListTeams),
        Verb::ClearTeams => Ok(Command::ClearTeams),
        Verb::AddMatch => parse_add_match(arguments).map(Command::AddMatch),
        Verb::DeleteMatch => parse_index(verb, arguments).map(Command::DeleteMatch),
        Verb::ListMatches => Ok(Command::ListMatches),
        Verb::ClearMatches => Ok(Command::ClearMatches),
        Verb::Help => Ok(Command::Help),
        Verb::Exit => Ok(Command::Exit),
    }
}

fn parse_add_player(verb: Verb, arguments: &str) -> Result<Player, CommandError> {
    let pattern = if verb == Verb::AddFast {
        &ADD_FAST_RE
    } else {
        &ADD_PLAYER_RE
    };
    let caps = pattern
        .captures(arguments)
        .ok_or_else(|| CommandError::invalid_format(verb))?;

    let optional = |group: &str| caps.name(group).map(|m| m.as_str());
    let raw = RawPlayer {
        name: &caps["name"],
        position: &caps["position"],
        age: &caps["age"],
        salary: &caps["salary"],
        goals_scored: optional("goals_scored"),
        goals_assisted: optional("goals_assisted"),
        team: &caps["team"],
        nationality: &caps["nationality"],
        jersey_number: &caps["jersey_number"],
        appearance: optional("appearance"),
        health_status: optional("health_status"),
        tags: split_tags(&caps),
    };
    Ok(raw.parse()?)
}

fn parse_add_team(arguments: &str) -> Result<Team, CommandError> {
    let caps = ADD_TEAM_RE
        .captures(arguments)
        .ok_or_else(|| CommandError::invalid_format(Verb::AddTeam))?;
    let raw = RawTeam {
        name: &caps["name"],
        country: &caps["country"],
        sponsor: &caps["sponsor"],
        tags: split_tags(&caps),
    };
    Ok(raw.parse()?)
}

fn parse_add_match(arguments: &str) -> Result<Match, CommandError> {
    let caps = ADD_MATCH_RE
        .captures(arguments)
        .ok_or_else(|| CommandError::invalid_format(Verb::AddMatch))?;
    let raw = RawMatch {
        date: &caps["date"],
        home: &caps["home"],
        away: &caps["away"],
        stadium: &caps["stadium"],
        tags: split_tags(&caps),
    };
    Ok(raw.parse()?)
}

/// Splits the trailing ` t/a t/b` group into raw tag values.
fn split_tags<'h>(caps: &Captures<'h>) -> Vec<&'h str> {
    caps.name("tags")
        .map(|m| m.as_str())
        .filter(|group| !group.is_empty())
        .map(|group| {
            TAG_PREFIX_RE
                .split(group)
                .filter(|value| !value.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Any integer is accepted here; range checks happen at resolution.
fn parse_index(verb: Verb, arguments: &str) -> Result<DisplayedIndex, CommandError> {
    arguments
        .parse::<i64>()
        .map(DisplayedIndex)
        .map_err(|_| CommandError::invalid_format(verb))
}

fn parse_keywords(verb: Verb, arguments: &str) -> Result<Vec<String>, CommandError> {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(CommandError::invalid_format(verb));
    }
    Ok(keywords)
}
