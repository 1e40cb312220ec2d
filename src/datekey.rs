use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical `(month, day)` key.
///
/// Renders as the fixed-width four-digit string `"MMDD"` (`Display`) and
/// decodes back from it (`FromStr`). The derived `Ord` sorts keys
/// chronologically within a year. Every day-set table and every resolved
/// holiday map is keyed by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    month: u32,
    day: u32,
}

impl DateKey {
    pub const fn new(month: u32, day: u32) -> DateKey {
        DateKey { month, day }
    }

    pub fn of(date: NaiveDate) -> DateKey {
        DateKey::new(date.month(), date.day())
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The date this key names in `year`, if it exists there.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

#[derive(Debug)]
pub enum ParseDateKeyError {
    BadLength(usize),
    Parse(ParseIntError),
}

impl fmt::Display for ParseDateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateKeyError::BadLength(len) => {
                write!(f, "expected 4 characters 'MMDD', got {} characters", len)
            }
            ParseDateKeyError::Parse(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ParseDateKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseDateKeyError::Parse(e) => Some(e),
            ParseDateKeyError::BadLength(_) => None,
        }
    }
}

impl FromStr for DateKey {
    type Err = ParseDateKeyError;

    fn from_str(s: &str) -> Result<DateKey, ParseDateKeyError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseDateKeyError::BadLength(s.chars().count()));
        }
        let month = s[..2].parse().map_err(ParseDateKeyError::Parse)?;
        let day = s[2..].parse().map_err(ParseDateKeyError::Parse)?;
        Ok(DateKey::new(month, day))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DateKey, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
