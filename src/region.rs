use std::fmt;

use crate::calendarerror::CalendarError;

/// A normalized federal subject code, or the whole federation.
///
/// Codes follow the ISO 3166-2:RU shape: two or three word characters,
/// stored uppercase. The empty code stands for the nationwide calendar.
/// A well-formed code that names no region with its own holiday rules is
/// accepted and simply contributes no regional rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    code: String,
}

impl Region {
    /// The whole federation, no regional rules.
    pub fn nationwide() -> Region {
        Region {
            code: String::new(),
        }
    }

    /// Normalizes a caller-supplied region string.
    ///
    /// Empty input means nationwide. An optional `RU-` prefix is stripped
    /// case-insensitively, the rest is uppercased and must be 2-3 word
    /// characters.
    pub fn parse(input: &str) -> Result<Region, CalendarError> {
        if input.is_empty() {
            return Ok(Region::nationwide());
        }
        let bare = match input.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("RU-") => &input[3..],
            _ => input,
        };
        let well_formed = (2..=3).contains(&bare.len())
            && bare
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !well_formed {
            return Err(CalendarError::InvalidRegion(input.to_owned()));
        }
        Ok(Region {
            code: bare.to_ascii_uppercase(),
        })
    }

    /// Normalizes an optional region string; `None` means nationwide.
    pub fn parse_opt(input: Option<&str>) -> Result<Region, CalendarError> {
        input.map_or_else(|| Ok(Region::nationwide()), Region::parse)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_nationwide(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nationwide() {
            write!(f, "RU")
        } else {
            write!(f, "RU-{}", self.code)
        }
    }
}
