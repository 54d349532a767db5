//! Free-form entity labels.
//!
//! # Invariants
//! - Tag names are non-empty and alphanumeric.
//! - A tag set never holds two equal tags; inserting a duplicate is a no-op.

use super::field::ConstraintViolation;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordered, duplicate-free tag collection attached to every entity.
pub type Tags = BTreeSet<Tag>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const FIELD: &'static str = "tag";
    pub const RULE: &'static str = "Tags names should be alphanumeric";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ConstraintViolation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(char::is_alphanumeric) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ConstraintViolation::new(Self::FIELD, Self::RULE, raw))
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses every raw tag, failing on the first invalid one.
pub fn parse_tags<'a>(
    raw_tags: impl IntoIterator<Item = &'a str>,
) -> Result<Tags, ConstraintViolation> {
    raw_tags.into_iter().map(str::parse::<Tag>).collect()
}

/// Renders tags as `[a][b]`, the form used in entity profiles.
pub fn render_tags(tags: &Tags) -> String {
    tags.iter().map(|tag| format!("[{tag}]")).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_tags, render_tags, Tag};

    #[test]
    fn duplicate_tags_collapse() {
        let tags = parse_tags(["friend", "captain", "friend"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(render_tags(&tags), "[captain][friend]");
    }

    #[test]
    fn invalid_tag_fails_whole_set() {
        let err = parse_tags(["ok", "invalid_-[.tag"]).unwrap_err();
        assert_eq!(err.field(), "tag");
        assert_eq!(err.value(), "invalid_-[.tag");
    }

    #[test]
    fn blank_tag_is_rejected() {
        assert!(" ".parse::<Tag>().is_err());
    }
}
