//! Holiday rules of federal subjects with statutory non-working holidays.
//!
//! Region codes follow ISO 3166-2:RU. A code absent from this table has no
//! regional rules; querying it yields the nationwide calendar only.
//!
//! Islamic feasts (Ураза-байрам, Курбан-байрам) float on the Hijri
//! calendar. Their observed dates, as published year by year by the
//! republics, are tabulated below; outside the tabulated span the dates
//! fall back to the civil Hijri approximation. The lunisolar new-year
//! feasts of Altai and Tuva (Чага-Байрам, Шагаа) have no usable
//! arithmetic fallback and are tabulated only.

use crate::datekey::DateKey;
use crate::floatingdate::hijrifeast;
use crate::floatingdate::orthodoxeaster;
use crate::floatingdate::tabulated::{self, YearTable};
use crate::ruletable::holidayrule::{DaySpec, HolidayRule};
use crate::yearversioned::YearVersioned;

const fn d(month: u32, day: u32) -> DateKey {
    DateKey::new(month, day)
}

const fn fixed(days: &'static [DateKey]) -> Option<DaySpec> {
    Some(DaySpec::Fixed(days))
}

const fn computed(calc: fn(i32) -> Option<Vec<DateKey>>) -> Option<DaySpec> {
    Some(DaySpec::Computed(calc))
}

// Observed feast dates compiled from the republics' published calendars.
static URAZA_BAYRAM_DATES: YearTable = &[
    (2011, &[d(8, 30)]),
    (2012, &[d(8, 19)]),
    (2013, &[d(8, 8)]),
    (2014, &[d(7, 28)]),
    (2015, &[d(7, 17)]),
    (2016, &[d(7, 5)]),
    (2017, &[d(6, 25)]),
    (2018, &[d(6, 15)]),
    (2019, &[d(6, 4)]),
    (2020, &[d(5, 24)]),
];

static KURBAN_BAYRAM_DATES: YearTable = &[
    (2011, &[d(11, 6)]),
    (2012, &[d(10, 25)]),
    (2013, &[d(10, 15)]),
    (2014, &[d(10, 4)]),
    (2015, &[d(9, 24)]),
    (2016, &[d(9, 12)]),
    (2017, &[d(9, 1)]),
    (2018, &[d(8, 21)]),
    (2019, &[d(8, 11)]),
    (2020, &[d(7, 31)]),
];

static CHAGA_BAYRAM_DATES: YearTable = &[
    (2013, &[d(2, 13)]),
    (2014, &[d(1, 31)]),
    (2015, &[d(2, 22)]),
    (2016, &[d(2, 9)]),
    (2017, &[d(2, 27)]),
    (2018, &[d(2, 16)]),
    (2019, &[d(2, 5)]),
    (2020, &[d(2, 24)]),
];

static SHAGAA_DATES: YearTable = &[
    (2012, &[d(2, 22)]),
    (2013, &[d(2, 11)]),
    (2014, &[d(1, 31)]),
    (2015, &[d(2, 19)]),
    (2016, &[d(2, 9)]),
    (2017, &[d(2, 27)]),
    (2018, &[d(2, 16)]),
    (2019, &[d(2, 5)]),
    (2020, &[d(2, 24)]),
];

fn uraza_bayram(year: i32) -> Option<Vec<DateKey>> {
    tabulated::lookup(URAZA_BAYRAM_DATES, year)
        .map(|days| days.to_vec())
        .or_else(|| hijrifeast::feast_days(year, 10, 1))
}

fn kurban_bayram(year: i32) -> Option<Vec<DateKey>> {
    tabulated::lookup(KURBAN_BAYRAM_DATES, year)
        .map(|days| days.to_vec())
        .or_else(|| hijrifeast::feast_days(year, 12, 10))
}

fn chaga_bayram(year: i32) -> Option<Vec<DateKey>> {
    tabulated::lookup(CHAGA_BAYRAM_DATES, year).map(|days| days.to_vec())
}

fn shagaa(year: i32) -> Option<Vec<DateKey>> {
    tabulated::lookup(SHAGAA_DATES, year).map(|days| days.to_vec())
}

// Ninth day after Orthodox Easter.
fn radonitsa(year: i32) -> Option<Vec<DateKey>> {
    orthodoxeaster::easter_offset(year, 9).map(|day| vec![day])
}

static AD_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "republic_day",
        name: YearVersioned::new(&[(1991, Some("День образования Республики Адыгея"))]),
        days: YearVersioned::new(&[(1991, fixed(&[d(10, 5)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1992, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1992, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(kurban_bayram))]),
    },
];

static AL_RULES: &[HolidayRule] = &[HolidayRule {
    key: "chaga_bayram",
    name: YearVersioned::new(&[(2013, Some("Чага-Байрам"))]),
    days: YearVersioned::new(&[(2013, computed(chaga_bayram))]),
}];

static BA_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "republic_day",
        name: YearVersioned::new(&[(1992, Some("День Республики Башкортостан"))]),
        days: YearVersioned::new(&[(1992, fixed(&[d(10, 11)]))]),
    },
    HolidayRule {
        key: "constitution_day",
        name: YearVersioned::new(&[(1994, Some("День Конституции Республики Башкортостан"))]),
        days: YearVersioned::new(&[(1994, fixed(&[d(12, 24)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1992, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1992, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(kurban_bayram))]),
    },
];

static CE_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "peace_day",
        name: YearVersioned::new(&[(2010, Some("День мира в Чеченской Республике"))]),
        days: YearVersioned::new(&[(2010, fixed(&[d(4, 16)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(2000, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(2000, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(2000, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(2000, computed(kurban_bayram))]),
    },
];

static CU_RULES: &[HolidayRule] = &[HolidayRule {
    key: "republic_day",
    name: YearVersioned::new(&[(1995, Some("День Чувашской Республики"))]),
    days: YearVersioned::new(&[(1995, fixed(&[d(6, 24)]))]),
}];

static DA_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "constitution_day",
        name: YearVersioned::new(&[(1994, Some("День Конституции Республики Дагестан"))]),
        days: YearVersioned::new(&[(1994, fixed(&[d(7, 26)]))]),
    },
    HolidayRule {
        key: "unity_day",
        name: YearVersioned::new(&[(2011, Some("День единства народов Дагестана"))]),
        days: YearVersioned::new(&[(2011, fixed(&[d(9, 15)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1991, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1991, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1991, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1991, computed(kurban_bayram))]),
    },
];

static IN_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "statehood_day",
        name: YearVersioned::new(&[(1993, Some("День образования Республики Ингушетия"))]),
        days: YearVersioned::new(&[(1993, fixed(&[d(6, 4)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1993, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1993, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1993, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1993, computed(kurban_bayram))]),
    },
];

static KB_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "revival_day",
        name: YearVersioned::new(&[(1994, Some("День возрождения балкарского народа"))]),
        days: YearVersioned::new(&[(1994, fixed(&[d(3, 28)]))]),
    },
    HolidayRule {
        key: "statehood_day",
        name: YearVersioned::new(&[
            (1997, Some("День государственности Кабардино-Балкарской Республики")),
        ]),
        days: YearVersioned::new(&[(1997, fixed(&[d(9, 1)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1992, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1992, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(kurban_bayram))]),
    },
];

static KC_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "revival_day",
        name: YearVersioned::new(&[(1996, Some("День возрождения карачаевского народа"))]),
        days: YearVersioned::new(&[(1996, fixed(&[d(5, 3)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1992, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1992, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(kurban_bayram))]),
    },
];

static KDA_RULES: &[HolidayRule] = &[HolidayRule {
    key: "radonitsa",
    name: YearVersioned::new(&[(2011, Some("Радоница"))]),
    days: YearVersioned::new(&[(2011, computed(radonitsa))]),
}];

static SA_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "republic_day",
        name: YearVersioned::new(&[(1992, Some("День Республики Саха (Якутия)"))]),
        days: YearVersioned::new(&[(1992, fixed(&[d(4, 27)]))]),
    },
    HolidayRule {
        key: "ysyakh",
        name: YearVersioned::new(&[(1992, Some("Ысыах"))]),
        days: YearVersioned::new(&[(1992, fixed(&[d(6, 21)]))]),
    },
];

static TA_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "republic_day",
        name: YearVersioned::new(&[(1992, Some("День Республики Татарстан"))]),
        days: YearVersioned::new(&[(1992, fixed(&[d(8, 30)]))]),
    },
    HolidayRule {
        key: "constitution_day",
        name: YearVersioned::new(&[(1993, Some("День Конституции Республики Татарстан"))]),
        days: YearVersioned::new(&[(1993, fixed(&[d(11, 6)]))]),
    },
    HolidayRule {
        key: "uraza_bayram",
        name: YearVersioned::new(&[(1992, Some("Ураза-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(uraza_bayram))]),
    },
    HolidayRule {
        key: "kurban_bayram",
        name: YearVersioned::new(&[(1992, Some("Курбан-байрам"))]),
        days: YearVersioned::new(&[(1992, computed(kurban_bayram))]),
    },
];

static TY_RULES: &[HolidayRule] = &[
    HolidayRule {
        key: "republic_day",
        name: YearVersioned::new(&[(1999, Some("День Республики Тыва"))]),
        days: YearVersioned::new(&[(1999, fixed(&[d(8, 15)]))]),
    },
    HolidayRule {
        key: "shagaa",
        name: YearVersioned::new(&[(2012, Some("Шагаа"))]),
        days: YearVersioned::new(&[(2012, computed(shagaa))]),
    },
];

pub static REGION_RULES: &[(&str, &[HolidayRule])] = &[
    ("AD", AD_RULES),
    ("AL", AL_RULES),
    ("BA", BA_RULES),
    ("CE", CE_RULES),
    ("CU", CU_RULES),
    ("DA", DA_RULES),
    ("IN", IN_RULES),
    ("KB", KB_RULES),
    ("KC", KC_RULES),
    ("KDA", KDA_RULES),
    ("SA", SA_RULES),
    ("TA", TA_RULES),
    ("TY", TY_RULES),
];

/// Rules of a normalized region code; empty for unknown codes.
pub fn rules_for(code: &str) -> &'static [HolidayRule] {
    REGION_RULES
        .iter()
        .find(|(region, _)| *region == code)
        .map_or(&[], |(_, rules)| rules)
}
