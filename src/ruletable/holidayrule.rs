use crate::datekey::DateKey;
use crate::yearversioned::YearVersioned;

/// How a rule's day-set for a year is obtained.
pub enum DaySpec {
    /// The same calendar days every year the entry is in force.
    Fixed(&'static [DateKey]),
    /// Days computed per year (computus, Hijri conversion, lookup table).
    /// `None` means the date is not determined for that year.
    Computed(fn(i32) -> Option<Vec<DateKey>>),
}

/// One holiday with its year-versioned label and day-set.
///
/// `key` is a stable symbolic identifier; nationwide and regional tables
/// are separate namespaces, so the same key may appear in both.
pub struct HolidayRule {
    pub key: &'static str,
    pub name: YearVersioned<&'static str>,
    pub days: YearVersioned<DaySpec>,
}

impl HolidayRule {
    /// The rule's days in `year`.
    ///
    /// `None` when the rule does not apply: not yet introduced, abolished,
    /// or its floating date is not determined for that year. The last case
    /// is advisory-logged so maintainers notice an outgrown table.
    pub fn days_in(&self, year: i32) -> Option<Vec<DateKey>> {
        match self.days.resolve(year)? {
            DaySpec::Fixed(days) => Some(days.to_vec()),
            DaySpec::Computed(calc) => match calc(year) {
                Some(days) => Some(days),
                None => {
                    log::warn!(
                        "holiday rule '{}' has no determinable date for {}",
                        self.key,
                        year
                    );
                    None
                }
            },
        }
    }

    /// The rule's label in `year`.
    ///
    /// Only meaningful for a year where [`Self::days_in`] yields days;
    /// a rule with days but no label is a corrupt table and aborts.
    pub fn name_in(&self, year: i32) -> &'static str {
        match self.name.resolve(year) {
            Some(name) => name,
            None => panic!(
                "corrupt holiday table: rule '{}' yields days but no name for {}",
                self.key, year
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leap_scout(year: i32) -> Option<Vec<DateKey>> {
        if year % 4 == 0 {
            Some(vec![DateKey::new(2, 29)])
        } else {
            None
        }
    }

    static COMPUTED: HolidayRule = HolidayRule {
        key: "leap_scout",
        name: YearVersioned::new(&[(2000, Some("Scout day"))]),
        days: YearVersioned::new(&[(2000, Some(DaySpec::Computed(leap_scout)))]),
    };

    static NAMELESS: HolidayRule = HolidayRule {
        key: "nameless",
        name: YearVersioned::new(&[(2010, Some("Late name"))]),
        days: YearVersioned::new(&[(2000, Some(DaySpec::Fixed(&[DateKey::new(6, 1)])))]),
    };

    #[test]
    fn computed_days_dispatch_per_year() {
        assert_eq!(COMPUTED.days_in(2004), Some(vec![DateKey::new(2, 29)]));
        assert_eq!(COMPUTED.days_in(2005), None);
        assert_eq!(COMPUTED.days_in(1999), None);
    }

    #[test]
    #[should_panic(expected = "corrupt holiday table")]
    fn days_without_name_abort() {
        NAMELESS.name_in(2005);
    }
}
