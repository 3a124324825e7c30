//! Grid selection calculator traits.

use std::collections::HashSet;

use calgrid_calendar::Month;
use calgrid_layout::{GridPosition, MonthComp};
use calgrid_selection::Selection;

/// Computes changed grid cells when the selection spans an ordered list of
/// month grids.
///
/// Calculators are pure and retain no history: callers supply both the
/// previous and the current snapshot on every call, and the two must be
/// coherent points on the same timeline.
pub trait MultiMonthGridCalculator {
    /// Returns the grid positions whose visual state changed between `prev`
    /// and `current`, relevant to `current_month`. An absent month or an
    /// out-of-range index means nothing to redraw: the result is empty, not
    /// an error.
    fn grid_selection_changes(
        &self,
        month_comps: &[MonthComp],
        current_month: Month,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition>;
}

/// Computes changed grid cells for a single month grid plus its virtual
/// neighbors.
pub trait SingleMonthGridCalculator {
    /// Returns the grid positions whose visual state changed between `prev`
    /// and `current` within `month_comp`'s grid.
    fn grid_selection_changes_for_month(
        &self,
        month_comp: &MonthComp,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition>;
}
