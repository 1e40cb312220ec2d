//! Per-year override tables from government transfer decrees.
//!
//! Three independent tables, covering 2004-2016:
//! - weekday days off created by moving a holiday off a weekend, all
//!   carrying the fixed label [`TRANSFERRED_HOLIDAY`];
//! - Saturdays/Sundays reclassified as working days in exchange;
//! - working days with officially reduced hours.
//!
//! A year with no entry simply has no overrides of that kind.

use crate::datekey::DateKey;
use crate::floatingdate::tabulated::{self, YearTable};

/// Label every moved-holiday day carries in the resolved map.
pub const TRANSFERRED_HOLIDAY: &str = "Перенос праздничного дня";

const fn d(month: u32, day: u32) -> DateKey {
    DateKey::new(month, day)
}

static MOVED_HOLIDAYS: YearTable = &[
    (2004, &[d(5, 3), d(5, 4), d(5, 10), d(6, 14), d(11, 8), d(12, 13)]),
    (2005, &[d(1, 6), d(1, 10), d(3, 7), d(5, 2), d(6, 13)]),
    (2006, &[d(1, 6), d(1, 9), d(2, 24), d(5, 8), d(11, 6)]),
    (2007, &[d(1, 8), d(4, 30), d(6, 11), d(11, 5), d(12, 31)]),
    (2008, &[d(1, 8), d(2, 25), d(3, 10), d(5, 2), d(6, 13), d(11, 3)]),
    (2009, &[d(1, 6), d(1, 8), d(1, 9), d(3, 9), d(5, 11)]),
    (2010, &[d(1, 6), d(1, 8), d(2, 22), d(5, 3), d(5, 10), d(6, 14), d(11, 5)]),
    (2011, &[d(1, 6), d(1, 10), d(3, 7), d(5, 2), d(6, 13)]),
    (
        2012,
        &[
            d(1, 6),
            d(1, 9),
            d(3, 9),
            d(4, 30),
            d(5, 7),
            d(5, 8),
            d(6, 11),
            d(11, 5),
            d(12, 31),
        ],
    ),
    (2013, &[d(5, 2), d(5, 3), d(5, 10)]),
    (2014, &[d(3, 10), d(5, 2), d(6, 13), d(11, 3)]),
    (2015, &[d(1, 9), d(3, 9), d(5, 4), d(5, 11)]),
    (2016, &[d(2, 22), d(3, 7), d(5, 2), d(5, 3), d(6, 13)]),
];

static WEEKEND_WORKDAYS: YearTable = &[
    (2005, &[d(3, 5)]),
    (2006, &[d(2, 26), d(5, 6)]),
    (2007, &[d(4, 28), d(6, 9), d(12, 29)]),
    (2008, &[d(5, 4), d(6, 7), d(11, 1)]),
    (2009, &[d(1, 11)]),
    (2010, &[d(2, 27), d(11, 13)]),
    (2011, &[d(3, 5)]),
    (2012, &[d(3, 11), d(4, 28), d(5, 5), d(5, 12), d(6, 9), d(12, 29)]),
    (2016, &[d(2, 20)]),
];

static SHORT_DAYS: YearTable = &[
    (2004, &[d(1, 6), d(4, 30), d(6, 11), d(12, 31)]),
    (2005, &[d(2, 22), d(3, 5), d(11, 3)]),
    (2006, &[d(2, 22), d(3, 7), d(5, 6), d(11, 3)]),
    (2007, &[d(2, 22), d(3, 7), d(4, 28), d(5, 8), d(6, 9), d(12, 29)]),
    (2008, &[d(2, 22), d(3, 7), d(4, 30), d(5, 8), d(6, 11), d(11, 1), d(12, 31)]),
    (2009, &[d(4, 30), d(5, 8), d(6, 11), d(11, 3), d(12, 31)]),
    (2010, &[d(4, 30), d(6, 11), d(11, 3), d(12, 31)]),
    (2011, &[d(2, 22), d(3, 5), d(11, 3)]),
    (2012, &[d(2, 22), d(3, 7), d(4, 28), d(5, 5), d(6, 9), d(12, 29)]),
    (2013, &[d(2, 22), d(3, 7), d(4, 30), d(5, 8), d(6, 11), d(12, 31)]),
    (2014, &[d(3, 7), d(4, 30), d(5, 8), d(6, 11), d(12, 31)]),
    (2015, &[d(4, 30), d(5, 8), d(6, 11), d(11, 3), d(12, 31)]),
    (2016, &[d(2, 20), d(11, 3)]),
];

pub fn moved_holidays(year: i32) -> &'static [DateKey] {
    tabulated::lookup(MOVED_HOLIDAYS, year).unwrap_or(&[])
}

pub fn weekend_workdays(year: i32) -> &'static [DateKey] {
    tabulated::lookup(WEEKEND_WORKDAYS, year).unwrap_or(&[])
}

pub fn short_days(year: i32) -> &'static [DateKey] {
    tabulated::lookup(SHORT_DAYS, year).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_holidays_per_year() {
        assert!(moved_holidays(2014).contains(&d(3, 10)));
        assert!(moved_holidays(2005).contains(&d(1, 10)));
        assert!(moved_holidays(2003).is_empty());
        assert!(moved_holidays(2017).is_empty());
    }

    #[test]
    fn weekend_workdays_per_year() {
        assert!(weekend_workdays(2012).contains(&d(3, 11)));
        assert!(weekend_workdays(2016).contains(&d(2, 20)));
        assert!(weekend_workdays(2013).is_empty());
    }

    #[test]
    fn short_days_per_year() {
        assert!(short_days(2014).contains(&d(12, 31)));
        assert!(short_days(2016).contains(&d(11, 3)));
        assert!(!short_days(2014).contains(&d(2, 22)));
        assert!(short_days(1999).is_empty());
    }
}
