use hijri_date::HijriDate;

use crate::datekey::DateKey;

/// Civil-calendar days on which a Hijri `(month, day)` falls within a
/// Gregorian year.
///
/// Converts January 1 of `year` to Hijri, then tries the feast in that
/// Hijri year and the next two; conversions landing inside `year` are kept.
/// The lunar year is ~11 days shorter than the solar one, so a feast
/// usually lands once, and twice for dates near the calendar boundary.
///
/// The mapping is an approximation: the true start of an Islamic lunar
/// month depends on local moon sighting and may differ by a day. Rules
/// backed by this calculator keep per-year override tables of the observed
/// dates; this is the fallback for years outside them. `None` when `year`
/// is outside the converter's tabulated range.
pub fn feast_days(year: i32, hijri_month: u32, hijri_day: u32) -> Option<Vec<DateKey>> {
    if year < 1 {
        return None;
    }
    let jan1 = HijriDate::from_gr(year as usize, 1, 1).ok()?;
    let hijri_year = jan1.year;

    let mut days = Vec::new();
    for offset in 0..=2 {
        let Ok(feast) = HijriDate::from_hijri(
            hijri_year + offset,
            hijri_month as usize,
            hijri_day as usize,
        ) else {
            continue;
        };
        if feast.year_gr == year as usize {
            days.push(DateKey::new(feast.month_gr as u32, feast.day_gr as u32));
        }
    }
    Some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shawwal 1 (Ураза-байрам) and Dhu al-Hijjah 10 (Курбан-байрам).
    const SHAWWAL_1: (u32, u32) = (10, 1);
    const DHU_AL_HIJJAH_10: (u32, u32) = (12, 10);

    #[test]
    fn single_match_in_an_ordinary_year() {
        let days = feast_days(2015, SHAWWAL_1.0, SHAWWAL_1.1).unwrap();
        assert_eq!(days.len(), 1);
        // 1 Shawwal 1436 fell in mid-July 2015.
        assert_eq!(days[0].month(), 7);
    }

    #[test]
    fn boundary_year_can_match_twice() {
        // Shawwal 1 fell in both January and December of 2000
        // (Hijri years 1420 and 1421).
        let days = feast_days(2000, SHAWWAL_1.0, SHAWWAL_1.1).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].month(), 1);
        assert_eq!(days[1].month(), 12);
    }

    #[test]
    fn kurban_follows_uraza_by_about_seventy_days() {
        let uraza = feast_days(2014, SHAWWAL_1.0, SHAWWAL_1.1).unwrap();
        let kurban = feast_days(2014, DHU_AL_HIJJAH_10.0, DHU_AL_HIJJAH_10.1).unwrap();
        assert_eq!(uraza.len(), 1);
        assert_eq!(kurban.len(), 1);
        assert!(uraza[0] < kurban[0]);
    }

    #[test]
    fn beyond_converter_range_is_none() {
        assert_eq!(feast_days(2100, SHAWWAL_1.0, SHAWWAL_1.1), None);
    }
}
