use crate::datekey::DateKey;

/// Explicit year-indexed day-set table, sorted ascending by year.
///
/// Used for observances whose dates are compiled from published records
/// case by case (lunisolar regional feasts, per-year transfer decrees)
/// rather than computed. Unlike [`crate::yearversioned::YearVersioned`],
/// a year matches only its own entry; there is no nearest-prior fallback.
pub type YearTable = &'static [(i32, &'static [DateKey])];

/// Looks `year` up in `table`; `None` when the year is not tabulated.
///
/// A default for untabulated years is expressed at the call site with
/// `or_else`, so the fallback may itself be a computation.
pub fn lookup(table: YearTable, year: i32) -> Option<&'static [DateKey]> {
    table
        .binary_search_by_key(&year, |(tabulated, _)| *tabulated)
        .ok()
        .map(|idx| table[idx].1)
}
