use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendarerror::CalendarError;
use crate::datekey::DateKey;
use crate::region::Region;
use crate::resolver::{self, HolidayMap};
use crate::ruletable::special;

fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// The holiday label of a date, or `None` when the date is no holiday.
///
/// `region` takes a federal subject code (`"TA"`, `"ru-ba"`, ...); `None`
/// or an empty string queries the nationwide calendar.
pub fn is_holiday(
    year: i32,
    month: u32,
    day: u32,
    region: Option<&str>,
) -> Result<Option<&'static str>, CalendarError> {
    checked_date(year, month, day)?;
    let region = Region::parse_opt(region)?;
    let map = resolver::resolve(year, &region)?;
    Ok(map.get(&DateKey::new(month, day)).copied())
}

/// All holidays of `year` as a day-key -> label map.
pub fn holidays(year: i32, region: Option<&str>) -> Result<Arc<HolidayMap>, CalendarError> {
    let region = Region::parse_opt(region)?;
    resolver::resolve(year, &region)
}

/// Whether a date is a working day.
///
/// Holidays are never working days. Saturdays and Sundays are working days
/// only when a transfer decree reclassified them for that year.
pub fn is_business_day(
    year: i32,
    month: u32,
    day: u32,
    region: Option<&str>,
) -> Result<bool, CalendarError> {
    let date = checked_date(year, month, day)?;
    if is_holiday(year, month, day, region)?.is_some() {
        return Ok(false);
    }
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Ok(special::weekend_workdays(year).contains(&DateKey::new(month, day)));
    }
    Ok(true)
}

/// Whether a date is a working day with officially reduced hours.
///
/// A pure table lookup: no region parameter, no interaction with the
/// holiday or weekend status of the date.
pub fn is_short_business_day(year: i32, month: u32, day: u32) -> Result<bool, CalendarError> {
    checked_date(year, month, day)?;
    Ok(special::short_days(year).contains(&DateKey::new(month, day)))
}
