//! Match record.
//!
//! # Invariants
//! - Home and away teams are different.

use super::field::{ConstraintViolation, MatchDate, Stadium, TeamName};
use super::tag::{parse_tags, render_tags, Tags};
use super::{Entity, EntityKind};
use std::fmt::{Display, Formatter};

const OPPONENT_FIELD: &str = "away team";
const OPPONENT_RULE: &str = "A match must be played between two different teams";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub date: MatchDate,
    pub home: TeamName,
    pub away: TeamName,
    pub stadium: Stadium,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub date: &'a str,
    pub home: &'a str,
    pub away: &'a str,
    pub stadium: &'a str,
    pub tags: Vec<&'a str>,
}

impl RawMatch<'_> {
    /// Parses attributes, then checks the two sides differ.
    pub fn parse(&self) -> Result<Match, ConstraintViolation> {
        let date = self.date.parse()?;
        let home: TeamName = self.home.parse()?;
        let away: TeamName = self.away.parse()?;
        if home == away {
            return Err(ConstraintViolation::new(
                OPPONENT_FIELD,
                OPPONENT_RULE,
                self.away,
            ));
        }

        Ok(Match {
            date,
            home,
            away,
            stadium: self.stadium.parse()?,
            tags: parse_tags(self.tags.iter().copied())?,
        })
    }
}

impl Entity for Match {
    const KIND: EntityKind = EntityKind::Match;

    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} Date: {} Stadium: {} Tags: {}",
            self.home,
            self.away,
            self.date,
            self.stadium,
            render_tags(&self.tags)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RawMatch;

    #[test]
    fn same_team_on_both_sides_is_rejected() {
        let raw = RawMatch {
            date: "2024-05-01",
            home: "FC Barcelona",
            away: " FC Barcelona ",
            stadium: "Camp Nou",
            tags: Vec::new(),
        };
        let err = raw.parse().unwrap_err();
        assert_eq!(err.field(), "away team");
    }

    #[test]
    fn renders_fixture_line() {
        let raw = RawMatch {
            date: "2024-05-01",
            home: "FC Barcelona",
            away: "Real Madrid",
            stadium: "Camp Nou",
            tags: vec!["derby"],
        };
        assert_eq!(
            raw.parse().unwrap().to_string(),
            "FC Barcelona vs Real Madrid Date: 2024-05-01 Stadium: Camp Nou Tags: [derby]"
        );
    }
}
