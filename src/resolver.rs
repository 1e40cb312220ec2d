use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock, RwLock};

use crate::calendarerror::CalendarError;
use crate::datekey::DateKey;
use crate::region::Region;
use crate::ruletable::federal::FEDERAL_RULES;
use crate::ruletable::regional;
use crate::ruletable::special;

/// First year the post-Soviet holiday tables describe.
pub const FIRST_YEAR: i32 = 1991;

/// Holidays of one `(year, region)` pair: day key -> holiday label.
pub type HolidayMap = BTreeMap<DateKey, &'static str>;

static RESOLVED: LazyLock<RwLock<HashMap<(i32, Region), Arc<HolidayMap>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Resolves the holiday map for `year` under `region`'s rules.
///
/// Maps are computed once per `(year, region)` pair and shared for the
/// process lifetime; the rule tables are immutable constants, so the cache
/// is never invalidated. The map is built outside the write lock and
/// inserted if still absent: losing that race recomputes an identical map,
/// which is wasteful but not wrong.
pub fn resolve(year: i32, region: &Region) -> Result<Arc<HolidayMap>, CalendarError> {
    if year < FIRST_YEAR {
        return Err(CalendarError::YearBeforeEpoch(year));
    }

    let cache_key = (year, region.clone());
    if let Some(map) = RESOLVED.read().unwrap().get(&cache_key) {
        return Ok(Arc::clone(map));
    }

    let map = Arc::new(build(year, region));
    let mut resolved = RESOLVED.write().unwrap();
    Ok(Arc::clone(resolved.entry(cache_key).or_insert(map)))
}

/// Merges nationwide rules, the region's rules and the year's moved-holiday
/// overrides into one map.
///
/// Rules are processed nationwide first, so on a same-day collision the
/// regional label wins; moved-holiday days overwrite either with the fixed
/// transfer label. The tables are authored to avoid genuine collisions.
fn build(year: i32, region: &Region) -> HolidayMap {
    let mut map = HolidayMap::new();

    let rules = FEDERAL_RULES
        .iter()
        .chain(regional::rules_for(region.code()));
    for rule in rules {
        let Some(days) = rule.days_in(year) else {
            continue;
        };
        if days.is_empty() {
            continue;
        }
        let name = rule.name_in(year);
        for day in days {
            map.insert(day, name);
        }
    }

    for day in special::moved_holidays(year) {
        map.insert(*day, special::TRANSFERRED_HOLIDAY);
    }

    map
}
