//! Team record.

use super::field::{ConstraintViolation, Country, Sponsor, TeamName};
use super::tag::{parse_tags, render_tags, Tags};
use super::{Entity, EntityKind, Searchable};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: TeamName,
    pub country: Country,
    pub sponsor: Sponsor,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTeam<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub sponsor: &'a str,
    pub tags: Vec<&'a str>,
}

impl RawTeam<'_> {
    pub fn parse(&self) -> Result<Team, ConstraintViolation> {
        Ok(Team {
            name: self.name.parse()?,
            country: self.country.parse()?,
            sponsor: self.sponsor.parse()?,
            tags: parse_tags(self.tags.iter().copied())?,
        })
    }
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Searchable for Team {
    fn search_words(&self) -> Vec<&str> {
        self.name.words().collect()
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Country: {} Sponsor: {} Tags: {}",
            self.name,
            self.country,
            self.sponsor,
            render_tags(&self.tags)
        )
    }
}
