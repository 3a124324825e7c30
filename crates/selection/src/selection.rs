//! The selection sum type and its variants.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use calgrid_layout::{first_grid_date, GridPosition, MonthComp};
use chrono::{Datelike, NaiveDate};

/// A value describing which dates are considered selected.
///
/// Selections are immutable and compared by content; the set of currently
/// active selections is owned by an external store, and this crate only
/// interprets the snapshots handed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// The null-object baseline: matches no date and occupies no cell.
    #[default]
    None,
    /// Selects exactly one date.
    Date(DateSelection),
    /// Selects every grid date with a fixed weekday.
    RepeatWeekday(RepeatWeekdaySelection),
}

impl Selection {
    /// Checks whether this selection covers a date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::None => false,
            Self::Date(selection) => selection.contains(date),
            Self::RepeatWeekday(selection) => selection.contains(date),
        }
    }

    /// Returns the grid positions this selection occupies, given an ordered
    /// sequence of month components anchored at `current_month_index`.
    pub fn grid_positions(
        &self,
        month_comps: &[MonthComp],
        current_month_index: usize,
    ) -> HashSet<GridPosition> {
        match self {
            Self::None => HashSet::new(),
            Self::Date(selection) => selection.grid_positions(month_comps, current_month_index),
            Self::RepeatWeekday(selection) => {
                selection.grid_positions(month_comps, current_month_index)
            }
        }
    }
}

impl From<DateSelection> for Selection {
    fn from(selection: DateSelection) -> Self {
        Self::Date(selection)
    }
}

impl From<RepeatWeekdaySelection> for Selection {
    fn from(selection: RepeatWeekdaySelection) -> Self {
        Self::RepeatWeekday(selection)
    }
}

/// Selects exactly one date.
///
/// Equality and hashing are by the stored date only; the first weekday is
/// grid context for position computation, not selection identity.
#[derive(Debug, Clone, Copy)]
pub struct DateSelection {
    date: NaiveDate,
    first_weekday: u32,
}

impl PartialEq for DateSelection {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DateSelection {}

impl Hash for DateSelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl DateSelection {
    /// Creates a selection covering exactly `date`, positioned in grids
    /// whose first weekday is `first_weekday`.
    pub fn new(date: NaiveDate, first_weekday: u32) -> Self {
        Self {
            date,
            first_weekday,
        }
    }

    /// Returns the selected date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Positions are only computed when the anchored component grid-contains
    /// the date. The same date can also appear as a filler day in either
    /// neighboring month's grid, so both in-range neighbors are probed and
    /// their matches unioned; those cells must be refreshed too.
    fn grid_positions(
        &self,
        month_comps: &[MonthComp],
        month_index: usize,
    ) -> HashSet<GridPosition> {
        let mut positions = HashSet::new();

        match month_comps.get(month_index) {
            Some(comp) if comp.contains(self.date) => {}
            _ => return positions,
        }

        let mut probe = |index: usize| {
            let Some(comp) = month_comps.get(index) else {
                return;
            };
            let Some(first) = first_grid_date(comp.month(), self.first_weekday) else {
                return;
            };
            let day_diff = self.date.signed_duration_since(first).num_days();
            if day_diff >= 0 && day_diff < comp.day_count() as i64 {
                positions.insert(GridPosition::new(index, day_diff as i32));
            }
        };

        probe(month_index);
        if month_index > 0 {
            probe(month_index - 1);
        }
        probe(month_index + 1);

        positions
    }
}

/// Selects every date whose weekday matches a stored weekday (1 = Sunday).
///
/// Equality and hashing are by the stored weekday only.
#[derive(Debug, Clone, Copy)]
pub struct RepeatWeekdaySelection {
    weekday: u32,
    first_weekday: u32,
}

impl PartialEq for RepeatWeekdaySelection {
    fn eq(&self, other: &Self) -> bool {
        self.weekday == other.weekday
    }
}

impl Eq for RepeatWeekdaySelection {}

impl Hash for RepeatWeekdaySelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weekday.hash(state);
    }
}

impl RepeatWeekdaySelection {
    /// Creates a selection covering every date with the given weekday.
    pub fn new(weekday: u32, first_weekday: u32) -> Self {
        Self {
            weekday,
            first_weekday,
        }
    }

    /// Returns the selected weekday (1 = Sunday).
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    fn contains(&self, date: NaiveDate) -> bool {
        date.weekday().number_from_sunday() == self.weekday
    }

    /// Positions are computed only for the anchored component: this selection
    /// recomputes for the whole visible grid whenever the month changes, so
    /// neighbor refresh is unnecessary. Weekdays before the grid's first
    /// weekday yield nothing.
    fn grid_positions(
        &self,
        month_comps: &[MonthComp],
        month_index: usize,
    ) -> HashSet<GridPosition> {
        let mut positions = HashSet::new();

        let Some(comp) = month_comps.get(month_index) else {
            return positions;
        };
        if self.weekday < self.first_weekday {
            return positions;
        }

        let mut day_index = (self.weekday - self.first_weekday) as usize;
        while day_index < comp.day_count() {
            positions.insert(GridPosition::new(month_index, day_index as i32));
            day_index += 7;
        }
        positions
    }
}
