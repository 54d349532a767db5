//! Player record.
//!
//! # Invariants
//! - Every attribute is a validated field value; a half-valid player cannot
//!   be built.
//! - Two players are equal iff all attributes and tag sets are equal.

use super::field::{
    Age, Appearance, ConstraintViolation, GoalsAssisted, GoalsScored, HealthStatus, JerseyNumber,
    Name, Nationality, PositionPlayed, Salary, TeamName,
};
use super::tag::{parse_tags, render_tags, Tags};
use super::{Entity, EntityKind, Searchable};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: Name,
    pub position: PositionPlayed,
    pub age: Age,
    pub salary: Salary,
    pub goals_scored: GoalsScored,
    pub goals_assisted: GoalsAssisted,
    pub team: TeamName,
    pub nationality: Nationality,
    pub jersey_number: JerseyNumber,
    pub appearance: Appearance,
    pub health_status: HealthStatus,
    pub tags: Tags,
}

/// Unparsed player attributes as they arrive from a command line or a
/// storage row.
///
/// `None` for an optional statistic means "use the default", which is how
/// `addFast` creates players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlayer<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub age: &'a str,
    pub salary: &'a str,
    pub goals_scored: Option<&'a str>,
    pub goals_assisted: Option<&'a str>,
    pub team: &'a str,
    pub nationality: &'a str,
    pub jersey_number: &'a str,
    pub appearance: Option<&'a str>,
    pub health_status: Option<&'a str>,
    pub tags: Vec<&'a str>,
}

impl RawPlayer<'_> {
    /// Parses every attribute in declaration order.
    ///
    /// # Errors
    /// - Returns the first [`ConstraintViolation`] encountered.
    pub fn parse(&self) -> Result<Player, ConstraintViolation> {
        Ok(Player {
            name: self.name.parse()?,
            position: self.position.parse()?,
            age: self.age.parse()?,
            salary: self.salary.parse()?,
            goals_scored: self.goals_scored.map(str::parse).transpose()?.unwrap_or_default(),
            goals_assisted: self
                .goals_assisted
                .map(str::parse)
                .transpose()?
                .unwrap_or_default(),
            team: self.team.parse()?,
            nationality: self.nationality.parse()?,
            jersey_number: self.jersey_number.parse()?,
            appearance: self.appearance.map(str::parse).transpose()?.unwrap_or_default(),
            health_status: self
                .health_status
                .map(str::parse)
                .transpose()?
                .unwrap_or_else(HealthStatus::healthy),
            tags: parse_tags(self.tags.iter().copied())?,
        })
    }
}

impl Entity for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn summary(&self) -> String {
        format!(
            "{} Position: {} Team: {} Jersey Number: {} Tags: {}",
            self.name,
            self.position,
            self.team,
            self.jersey_number,
            render_tags(&self.tags)
        )
    }
}

impl Searchable for Player {
    fn search_words(&self) -> Vec<&str> {
        self.name.words().collect()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Position: {} Age: {} Salary: {} Goals Scored: {} Goals Assisted: {} Team: {} \
             Nationality: {} Jersey Number: {} Appearance: {} Health Status: {} Tags: {}",
            self.name,
            self.position,
            self.age,
            self.salary,
            self.goals_scored,
            self.goals_assisted,
            self.team,
            self.nationality,
            self.jersey_number,
            self.appearance,
            self.health_status,
            render_tags(&self.tags)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RawPlayer;
    use crate::model::Searchable;

    fn raw(name: &str) -> RawPlayer<'_> {
        RawPlayer {
            name,
            position: "RW",
            age: "30",
            salary: "2000000",
            team: "FC Barcelona",
            nationality: "Argentina",
            jersey_number: "10",
            tags: vec!["tag1", "tag2"],
            ..RawPlayer::default()
        }
    }

    #[test]
    fn missing_statistics_take_defaults() {
        let player = raw("Lionel Messi").parse().unwrap();
        assert_eq!(player.goals_scored.value(), 0);
        assert_eq!(player.goals_assisted.value(), 0);
        assert_eq!(player.appearance.value(), 0);
        assert_eq!(player.health_status.as_str(), "Healthy");
    }

    #[test]
    fn first_invalid_attribute_is_reported() {
        let mut input = raw("Lionel Messi");
        input.age = "thirty";
        input.jersey_number = "50";
        let err = input.parse().unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn equality_covers_tags() {
        let first = raw("Lionel Messi").parse().unwrap();
        let mut other = raw("Lionel Messi");
        other.tags = vec!["tag2", "tag1", "tag1"];
        assert_eq!(first, other.parse().unwrap());

        other.tags = vec!["tag1"];
        assert_ne!(first, other.parse().unwrap());
    }

    #[test]
    fn find_matches_whole_case_sensitive_tokens() {
        let player = raw("bla bla KEY bla").parse().unwrap();
        assert!(player.matches_any(&["KEY".to_string()]));
        assert!(!player.matches_any(&["key".to_string(), "KE".to_string()]));
    }

    #[test]
    fn full_profile_contains_every_attribute() {
        let player = raw("Lionel Messi").parse().unwrap();
        let text = player.to_string();
        assert!(text.starts_with("Lionel Messi Position: RW Age: 30"));
        assert!(text.ends_with("Health Status: Healthy Tags: [tag1][tag2]"));
    }
}
