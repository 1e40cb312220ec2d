//! Static-table well-formedness checks: version years strictly ascending,
//! every fixed day a real calendar date, region codes normalized.

use chrono::NaiveDate;

use ruscalendar::ruletable::federal::FEDERAL_RULES;
use ruscalendar::ruletable::holidayrule::{DaySpec, HolidayRule};
use ruscalendar::ruletable::regional::REGION_RULES;

fn assert_strictly_ascending(scope: &str, key: &str, years: &[i32]) {
    for pair in years.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{}/{}: version years not strictly ascending: {} then {}",
            scope,
            key,
            pair[0],
            pair[1]
        );
    }
}

fn assert_rule_well_formed(scope: &str, rule: &HolidayRule) {
    let name_years: Vec<i32> = rule.name.entries().iter().map(|(year, _)| *year).collect();
    let day_years: Vec<i32> = rule.days.entries().iter().map(|(year, _)| *year).collect();
    assert_strictly_ascending(scope, rule.key, &name_years);
    assert_strictly_ascending(scope, rule.key, &day_years);

    for (since, spec) in rule.days.entries() {
        let Some(DaySpec::Fixed(days)) = spec else {
            continue;
        };
        for day in *days {
            // 2000 is a leap year, so every legitimate (month, day) passes.
            assert!(
                NaiveDate::from_ymd_opt(2000, day.month(), day.day()).is_some(),
                "{}/{} (since {}): impossible day {}",
                scope,
                rule.key,
                since,
                day
            );
        }
    }
}

#[test]
fn federal_rules_are_well_formed() {
    for rule in FEDERAL_RULES {
        assert_rule_well_formed("federal", rule);
    }
}

#[test]
fn regional_rules_are_well_formed() {
    for (code, rules) in REGION_RULES {
        assert!(
            (2..=3).contains(&code.len())
                && code.chars().all(|c| c.is_ascii_uppercase()),
            "region code {:?} is not a normalized 2-3 letter code",
            code
        );
        for rule in *rules {
            assert_rule_well_formed(code, rule);
        }
    }
}

#[test]
fn region_codes_are_unique() {
    let mut codes: Vec<&str> = REGION_RULES.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), REGION_RULES.len());
}

#[test]
fn every_rule_with_days_has_a_name_for_all_years() {
    // Names must be resolvable wherever days are; otherwise resolution
    // would abort on corrupt data. Sweep the whole supported span.
    for year in 1991..=2030 {
        for rule in FEDERAL_RULES {
            if rule.days_in(year).is_some() {
                let _ = rule.name_in(year);
            }
        }
        for (_, rules) in REGION_RULES {
            for rule in *rules {
                if rule.days_in(year).is_some() {
                    let _ = rule.name_in(year);
                }
            }
        }
    }
}
