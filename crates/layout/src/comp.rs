//! Month component: a month bound to a grid configuration.

use calgrid_calendar::{Month, WEEKDAY_COUNT};
use chrono::NaiveDate;

use crate::layout::{date_with_offset, first_grid_date};

/// A [`Month`] plus a grid configuration: the cell count (conventionally
/// `weekday_stacks x 7`, e.g. 42) and the first weekday of the grid.
///
/// Day values inside a component are computed on demand from an index and
/// never materialized as a collection, so memory stays bounded when large
/// month ranges are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthComp {
    month: Month,
    day_count: usize,
    first_weekday: u32,
}

impl MonthComp {
    /// Creates a new month component.
    pub fn new(month: Month, day_count: usize, first_weekday: u32) -> Self {
        Self {
            month,
            day_count,
            first_weekday,
        }
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the grid cell count.
    pub fn day_count(self) -> usize {
        self.day_count
    }

    /// Returns the first weekday of the grid (1 = Sunday).
    pub fn first_weekday(self) -> u32 {
        self.first_weekday
    }

    /// Returns a copy with the same grid configuration but a different month.
    pub fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    /// Checks whether a date falls inside this component's grid.
    ///
    /// The grid holds filler days from the adjacent months, so the result is
    /// not the same as [`Month::contains`].
    pub fn contains(self, date: NaiveDate) -> bool {
        match first_grid_date(self.month, self.first_weekday) {
            Some(first) => {
                let day_diff = date.signed_duration_since(first).num_days();
                day_diff >= 0 && day_diff < self.day_count as i64
            }
            None => false,
        }
    }

    /// Returns the grid date at a cell index.
    pub fn date_at_index(self, index: usize) -> Option<NaiveDate> {
        date_with_offset(self.month, self.first_weekday, index)
    }

    /// Returns all grid dates with the given weekday, stepping by 7 from the
    /// weekday's first column and bounded by the cell count.
    pub fn dates_with_weekday(self, weekday: u32) -> Vec<NaiveDate> {
        let offset = (i64::from(weekday) - i64::from(self.first_weekday)).rem_euclid(7);

        let mut dates = Vec::new();
        let mut index = offset as usize;
        while index < self.day_count {
            if let Some(date) = self.date_at_index(index) {
                dates.push(date);
            }
            index += WEEKDAY_COUNT;
        }
        dates
    }
}
