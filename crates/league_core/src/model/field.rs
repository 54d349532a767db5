//! Validated scalar attributes shared by players, teams and matches.
//!
//! # Responsibility
//! - Parse raw command or storage text into immutable typed values.
//! - Report the broken rule as a [`ConstraintViolation`].
//!
//! # Invariants
//! - A value exists only if its raw text passed the type's rule.
//! - No type coerces or truncates invalid input; surrounding whitespace is
//!   the only thing dropped.
//! - `Display` renders the canonical form, and parsing that form yields an
//!   equal value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static WORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N} ]+$").expect("valid words regex"));
static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]+$").expect("valid letters regex"));
static TEAM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N} _.'&-]+$").expect("valid team name regex"));
static SPONSOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N} &.-]+$").expect("valid sponsor regex"));
static MATCH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})$").expect("valid date regex")
});

const MAX_JERSEY_NUMBER: u8 = 35;
const HEALTHY: &str = "Healthy";

/// A raw attribute value rejected by its field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    field: &'static str,
    rule: &'static str,
    value: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, rule: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            value: value.into(),
        }
    }

    /// Stable attribute identifier, e.g. `age`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// User-facing rule text. Always names the attribute.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// The raw input that was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule)
    }
}

impl Error for ConstraintViolation {}

macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, field = $field:literal, pattern = $re:ident, rule = $rule:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const RULE: &'static str = $rule;

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                if $re.is_match(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(ConstraintViolation::new(Self::FIELD, Self::RULE, raw))
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

macro_rules! count_field {
    ($(#[$meta:meta])* $name:ident($int:ty), field = $field:literal, rule = $rule:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($int);

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const RULE: &'static str = $rule;

            pub fn value(self) -> $int {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_digits::<$int>(raw)
                    .map(Self)
                    .ok_or_else(|| ConstraintViolation::new(Self::FIELD, Self::RULE, raw))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

text_field!(
    /// Person name. Also the token source for keyword search.
    Name,
    field = "name",
    pattern = WORDS_RE,
    rule = "Player names should only contain spaces or alphanumeric characters"
);

text_field!(
    PositionPlayed,
    field = "position",
    pattern = WORDS_RE,
    rule = "Player positions should only contain spaces or alphanumeric characters"
);

text_field!(
    /// Club name, used by players, teams and both sides of a match.
    TeamName,
    field = "team",
    pattern = TEAM_NAME_RE,
    rule = "Team names should only contain spaces, alphanumeric characters or _ . ' & -"
);

text_field!(
    Nationality,
    field = "nationality",
    pattern = WORDS_RE,
    rule = "Player nationality should only contain spaces or alphanumeric characters"
);

text_field!(
    /// Free-text fitness label; `addFast` defaults it to `Healthy`.
    HealthStatus,
    field = "health status",
    pattern = LETTERS_RE,
    rule = "Player health status should only contain spaces or letters"
);

text_field!(
    Country,
    field = "country",
    pattern = LETTERS_RE,
    rule = "Team country should only contain spaces or letters"
);

text_field!(
    Sponsor,
    field = "sponsor",
    pattern = SPONSOR_RE,
    rule = "Team sponsor should only contain spaces, alphanumeric characters or & . -"
);

text_field!(
    Stadium,
    field = "stadium",
    pattern = WORDS_RE,
    rule = "Match stadium should only contain spaces or alphanumeric characters"
);

count_field!(
    Age(u8),
    field = "age",
    rule = "Player age should be a non-negative whole number"
);

count_field!(
    Salary(u64),
    field = "salary",
    rule = "Player salary should be a non-negative whole number"
);

count_field!(
    GoalsScored(u32),
    field = "goals scored",
    rule = "Goals scored should be a non-negative whole number"
);

count_field!(
    GoalsAssisted(u32),
    field = "goals assisted",
    rule = "Goals assisted should be a non-negative whole number"
);

count_field!(
    Appearance(u32),
    field = "appearances",
    rule = "Player appearances should be a non-negative whole number"
);

impl HealthStatus {
    /// Default status for players created without one.
    pub fn healthy() -> Self {
        Self(HEALTHY.to_string())
    }
}

impl Name {
    /// Whitespace-separated tokens, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl TeamName {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Shirt number, restricted to `0..=35`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JerseyNumber(u8);

impl JerseyNumber {
    pub const FIELD: &'static str = "jersey number";
    pub const RULE: &'static str = "Jersey number should be a whole number from 0 to 35";

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for JerseyNumber {
    type Err = ConstraintViolation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_digits::<u8>(raw)
            .filter(|number| *number <= MAX_JERSEY_NUMBER)
            .map(Self)
            .ok_or_else(|| ConstraintViolation::new(Self::FIELD, Self::RULE, raw))
    }
}

impl Display for JerseyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date of a match, `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchDate {
    year: u16,
    month: u8,
    day: u8,
}

impl MatchDate {
    pub const FIELD: &'static str = "date";
    pub const RULE: &'static str =
        "Match date should be a real calendar date in the format YYYY-MM-DD";

    pub fn year(self) -> u16 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }
}

impl FromStr for MatchDate {
    type Err = ConstraintViolation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let violation = || ConstraintViolation::new(Self::FIELD, Self::RULE, raw);
        let caps = MATCH_DATE_RE.captures(raw.trim()).ok_or_else(violation)?;

        let year = caps["year"].parse::<u16>().map_err(|_| violation())?;
        let month = caps["month"].parse::<u8>().map_err(|_| violation())?;
        let day = caps["day"].parse::<u8>().map_err(|_| violation())?;

        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(violation());
        }

        Ok(Self { year, month, day })
    }
}

impl Display for MatchDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parses ASCII digits only; signs, blanks and overflow are rejected.
fn parse_digits<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        Age, Appearance, ConstraintViolation, Country, GoalsScored, HealthStatus, JerseyNumber,
        MatchDate, Name, PositionPlayed, Salary, Sponsor, TeamName,
    };

    #[test]
    fn name_trims_and_renders_canonical_form() {
        let name: Name = "  Lionel Messi ".parse().expect("valid name");
        assert_eq!(name.to_string(), "Lionel Messi");
        assert_eq!(name.to_string().parse::<Name>().unwrap(), name);
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Lionel", "Messi"]);
    }

    #[test]
    fn name_rejects_symbols_and_blank_input() {
        let err = "[]\\[;]".parse::<Name>().expect_err("symbols must be rejected");
        assert_eq!(err.field(), "name");
        assert_eq!(err.rule(), Name::RULE);
        assert_eq!(err.value(), "[]\\[;]");

        assert!("   ".parse::<Name>().is_err());
        assert!("".parse::<PositionPlayed>().is_err());
    }

    #[test]
    fn counts_drop_leading_zeros_and_reject_non_digits() {
        let age: Age = "030".parse().unwrap();
        assert_eq!(age.to_string(), "30");
        assert_eq!(age.value(), 30);

        assert!("thirty".parse::<Age>().is_err());
        assert!("-1".parse::<Salary>().is_err());
        assert!("+5".parse::<GoalsScored>().is_err());
        assert!("1.5".parse::<Appearance>().is_err());
    }

    #[test]
    fn counts_reject_overflow_instead_of_truncating() {
        let err: ConstraintViolation = "256".parse::<Age>().unwrap_err();
        assert_eq!(err.field(), "age");
        assert_eq!("18446744073709551615".parse::<Salary>().unwrap().value(), u64::MAX);
        assert!("18446744073709551616".parse::<Salary>().is_err());
    }

    #[test]
    fn jersey_number_is_bounded() {
        assert_eq!("35".parse::<JerseyNumber>().unwrap().value(), 35);
        assert_eq!("0".parse::<JerseyNumber>().unwrap().value(), 0);
        assert!("36".parse::<JerseyNumber>().is_err());
        assert!("50".parse::<JerseyNumber>().is_err());
        assert!("nine".parse::<JerseyNumber>().is_err());
    }

    #[test]
    fn team_and_sponsor_accept_punctuation_from_their_rules() {
        assert!("FC_NUS.Reserves".parse::<TeamName>().is_ok());
        assert!("Brighton & Hove Albion".parse::<TeamName>().is_ok());
        assert!("Fly Emirates".parse::<Sponsor>().is_ok());
        assert!("Spain1".parse::<Country>().is_err());
        assert!("Injured2".parse::<HealthStatus>().is_err());
    }

    #[test]
    fn match_date_validates_calendar() {
        let date: MatchDate = "2024-02-29".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
        assert_eq!(date.to_string(), "2024-02-29");

        assert!("2023-02-29".parse::<MatchDate>().is_err());
        assert!("1900-02-29".parse::<MatchDate>().is_err());
        assert!("2000-02-29".parse::<MatchDate>().is_ok());
        assert!("2024-13-01".parse::<MatchDate>().is_err());
        assert!("2024-04-31".parse::<MatchDate>().is_err());
        assert!("24-04-01".parse::<MatchDate>().is_err());
    }

    #[test]
    fn healthy_default_round_trips() {
        let status = HealthStatus::healthy();
        assert_eq!(status.to_string().parse::<HealthStatus>().unwrap(), status);
    }
}
