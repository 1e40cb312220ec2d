use thiserror::Error;

/// Errors surfaced by the query functions.
///
/// Corrupt static tables (a rule resolving to days but no name) are not an
/// error variant: that is an internal invariant violation and aborts via
/// panic instead of handing the caller a wrong answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Month or day is zero or does not name an existing calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The calendar is undefined before the Russian Federation epoch.
    #[error("year {0} predates the calendar epoch (1991)")]
    YearBeforeEpoch(i32),

    /// The region string does not look like a federal subject code.
    #[error("invalid region code {0:?}: expected 2-3 word characters, optionally prefixed \"RU-\"")]
    InvalidRegion(String),
}
