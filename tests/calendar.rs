use chrono::{Datelike, NaiveDate};

use ruscalendar::{holidays, is_business_day, is_holiday, DateKey};

const REGIONS: &[Option<&str>] = &[None, Some("AD"), Some("AL"), Some("DA"), Some("KDA")];

#[test]
fn map_keys_are_valid_four_digit_day_keys() {
    for year in [1991, 1995, 2000, 2005, 2010, 2014, 2015, 2016] {
        for region in REGIONS {
            let map = holidays(year, *region).unwrap();
            for day in map.keys() {
                let rendered = day.to_string();
                assert_eq!(rendered.len(), 4, "{} {:?}: {}", year, region, rendered);
                assert_eq!(rendered.parse::<DateKey>().unwrap(), *day);
                assert!(
                    NaiveDate::from_ymd_opt(year, day.month(), day.day()).is_some(),
                    "{} {:?}: {} is not a date of that year",
                    year,
                    region,
                    rendered
                );
            }
        }
    }
}

#[test]
fn is_holiday_agrees_with_the_year_map() {
    for year in [2001, 2012, 2015] {
        let map = holidays(year, None).unwrap();
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while date.year() == year {
            let key = DateKey::of(date);
            let from_query = is_holiday(year, key.month(), key.day(), None).unwrap();
            assert_eq!(
                from_query,
                map.get(&key).copied(),
                "{}: disagreement on {}",
                year,
                key
            );
            date = date.succ_opt().unwrap();
        }
    }
}

#[test]
fn holiday_and_business_day_are_mutually_exclusive() {
    for year in [2005, 2012, 2014] {
        for region in REGIONS {
            let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            while date.year() == year {
                let key = DateKey::of(date);
                let holiday = is_holiday(year, key.month(), key.day(), *region)
                    .unwrap()
                    .is_some();
                let business = is_business_day(year, key.month(), key.day(), *region).unwrap();
                assert!(
                    !(holiday && business),
                    "{} {:?}: {} is both holiday and business day",
                    year,
                    region,
                    key
                );
                date = date.succ_opt().unwrap();
            }
        }
    }
}

#[test]
fn repeated_queries_are_idempotent() {
    let first = holidays(2015, Some("TA")).unwrap();
    let second = holidays(2015, Some("ru-ta")).unwrap();
    assert_eq!(*first, *second);
    assert_eq!(
        is_holiday(2015, 7, 17, Some("TA")).unwrap(),
        is_holiday(2015, 7, 17, Some("TA")).unwrap()
    );
}

#[test]
fn year_past_the_floating_tables_resolves_without_the_feasts() {
    // Far beyond every compiled floating-date table: the affected rules
    // drop out, fixed-date content is still served.
    let map = holidays(2100, Some("AL")).unwrap();
    assert!(is_holiday(2100, 2, 22, Some("AL")).unwrap().is_none());
    assert!(map.contains_key(&DateKey::new(5, 9)));
}

#[test]
fn year_map_serializes_as_mmdd_string_object() {
    let map = holidays(2015, None).unwrap();
    let json = serde_json::to_value(&*map).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), map.len());
    assert_eq!(
        object.get("0101").and_then(|v| v.as_str()),
        Some("Новогодние каникулы")
    );
    assert!(object.keys().all(|k| k.len() == 4));
}

#[test]
fn twelve_june_changes_name_not_date() {
    assert_eq!(
        is_holiday(1995, 6, 12, None).unwrap(),
        Some("День принятия Декларации о государственном суверенитете Российской Федерации")
    );
    assert_eq!(is_holiday(2010, 6, 12, None).unwrap(), Some("День России"));
}

#[test]
fn radonitsa_follows_easter_in_krasnodar() {
    assert_eq!(is_holiday(2015, 4, 21, Some("KDA")).unwrap(), Some("Радоница"));
    assert_eq!(is_holiday(2016, 5, 10, Some("KDA")).unwrap(), Some("Радоница"));
    assert_eq!(is_holiday(2015, 4, 21, None).unwrap(), None);
    // Not yet in force before the regional law.
    assert_eq!(is_holiday(2005, 5, 10, Some("KDA")).unwrap(), None);
}
