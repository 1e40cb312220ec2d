use chrono::{Days, NaiveDate};

use crate::datekey::DateKey;

/// Orthodox Easter expressed on the civil (Gregorian) calendar.
///
/// Meeus computus, Orthodox variant. Valid for 1583..=4099; `None` outside
/// that range.
pub fn orthodox_easter(year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;
    let i = (19 * g + 15) % 30;
    let j = (year + year / 4 + i) % 7;
    let e = if year <= 1600 {
        10
    } else {
        10 + year / 100 - 16 - (year / 100 - 16) / 4
    };
    let p = (i - j + e) as u32;

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// The day key a fixed number of days after Orthodox Easter.
///
/// Easter falls in April or early May, so small offsets never leave `year`.
pub fn easter_offset(year: i32, days_after: u64) -> Option<DateKey> {
    orthodox_easter(year).map(|easter| DateKey::of(easter + Days::new(days_after)))
}
