//! Nationwide holiday rules, 1991 to present.
//!
//! Each rule carries the full history of its label and day-set revisions;
//! years before 1991 appear as version keys where the Soviet-era value was
//! still in force at the epoch.

use crate::datekey::DateKey;
use crate::ruletable::holidayrule::{DaySpec, HolidayRule};
use crate::yearversioned::YearVersioned;

const fn d(month: u32, day: u32) -> DateKey {
    DateKey::new(month, day)
}

const fn fixed(days: &'static [DateKey]) -> Option<DaySpec> {
    Some(DaySpec::Fixed(days))
}

pub static FEDERAL_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "new_year",
        name: YearVersioned::new(&[
            (1991, Some("Новый год")),
            (2005, Some("Новогодние каникулы")),
        ]),
        days: YearVersioned::new(&[
            (1991, fixed(&[d(1, 1)])),
            (1993, fixed(&[d(1, 1), d(1, 2)])),
            (2005, fixed(&[d(1, 1), d(1, 2), d(1, 3), d(1, 4), d(1, 5)])),
            (
                2013,
                fixed(&[d(1, 1), d(1, 2), d(1, 3), d(1, 4), d(1, 5), d(1, 6), d(1, 8)]),
            ),
        ]),
    },
    HolidayRule {
        key: "christmas",
        name: YearVersioned::new(&[(1991, Some("Рождество Христово"))]),
        days: YearVersioned::new(&[(1991, fixed(&[d(1, 7)]))]),
    },
    HolidayRule {
        key: "defenders_day",
        name: YearVersioned::new(&[(2002, Some("День защитника Отечества"))]),
        days: YearVersioned::new(&[(2002, fixed(&[d(2, 23)]))]),
    },
    HolidayRule {
        key: "womens_day",
        name: YearVersioned::new(&[(1966, Some("Международный женский день"))]),
        days: YearVersioned::new(&[(1966, fixed(&[d(3, 8)]))]),
    },
    HolidayRule {
        key: "labour_day",
        name: YearVersioned::new(&[
            (1928, Some("День международной солидарности трудящихся")),
            (1992, Some("Праздник Весны и Труда")),
        ]),
        days: YearVersioned::new(&[
            (1928, fixed(&[d(5, 1), d(5, 2)])),
            (2005, fixed(&[d(5, 1)])),
        ]),
    },
    HolidayRule {
        key: "victory_day",
        name: YearVersioned::new(&[(1965, Some("День Победы"))]),
        days: YearVersioned::new(&[(1965, fixed(&[d(5, 9)]))]),
    },
    HolidayRule {
        key: "russia_day",
        name: YearVersioned::new(&[
            (
                1992,
                Some("День принятия Декларации о государственном суверенитете Российской Федерации"),
            ),
            (2002, Some("День России")),
        ]),
        days: YearVersioned::new(&[(1992, fixed(&[d(6, 12)]))]),
    },
    HolidayRule {
        key: "unity_day",
        name: YearVersioned::new(&[(2005, Some("День народного единства"))]),
        days: YearVersioned::new(&[(2005, fixed(&[d(11, 4)]))]),
    },
    HolidayRule {
        key: "revolution_day",
        name: YearVersioned::new(&[
            (1928, Some("Годовщина Великой Октябрьской социалистической революции")),
            (1996, Some("День согласия и примирения")),
        ]),
        days: YearVersioned::new(&[
            (1928, fixed(&[d(11, 7), d(11, 8)])),
            (1992, fixed(&[d(11, 7)])),
            (2005, None),
        ]),
    },
    HolidayRule {
        key: "constitution_day",
        name: YearVersioned::new(&[(1994, Some("День Конституции Российской Федерации"))]),
        days: YearVersioned::new(&[(1994, fixed(&[d(12, 12)])), (2005, None)]),
    },
];
