//! Grid date computation.
//!
//! A month grid is a fixed-size matrix of `weekday_stacks x 7` cells whose
//! first column always falls on the configured first weekday. The grid may
//! open with trailing days of the previous month and close with leading days
//! of the next month. Cells are computed on demand from an index; no grid is
//! ever materialized as a whole.

use calgrid_calendar::{Month, WEEKDAY_COUNT};
use chrono::{Datelike, Days, NaiveDate};

/// Returns the date of the first grid cell for `month`: the 1st of the
/// month, moved back to the nearest `first_weekday` (possibly into the
/// preceding month).
///
/// `None` when the month is not representable by the calendar provider.
/// A `first_weekday` outside 1..=7 is wrapped into that range, matching
/// `weekday_range`.
pub fn first_grid_date(month: Month, first_weekday: u32) -> Option<NaiveDate> {
    let first = month.first_date()?;
    let first_day_weekday = first.weekday().number_from_sunday();

    let offset =
        (i64::from(first_day_weekday) - i64::from(first_weekday)).rem_euclid(7) as u64;

    first.checked_sub_days(Days::new(offset))
}

/// Returns the grid date `offset` cells after the first grid cell.
pub fn date_with_offset(month: Month, first_weekday: u32, offset: usize) -> Option<NaiveDate> {
    first_grid_date(month, first_weekday)?.checked_add_days(Days::new(offset as u64))
}

/// Returns the full ordered list of `weekday_stacks x 7` grid dates for a
/// month. Dates outside the representable calendar range are skipped.
pub fn date_range(month: Month, first_weekday: u32, weekday_stacks: usize) -> Vec<NaiveDate> {
    (0..weekday_stacks * WEEKDAY_COUNT)
        .filter_map(|index| date_with_offset(month, first_weekday, index))
        .collect()
}
