//! Default grid selection calculator.

use std::collections::HashSet;

use calgrid_calendar::Month;
use calgrid_layout::{GridPosition, MonthComp};
use calgrid_selection::{extract_changes, Selection};
use tracing::debug;

use crate::calculator::{MultiMonthGridCalculator, SingleMonthGridCalculator};

/// The default grid selection calculator.
///
/// Both calculator variants are implemented here: the multi-month variant
/// locates the current month inside the supplied component list, and the
/// single-month variant synthesizes a window of virtual neighbor months
/// around the one component it is given.
#[derive(Debug, Clone, Copy)]
pub struct DefaultCalculator {
    weekday_stacks: usize,
    first_weekday: u32,
}

impl DefaultCalculator {
    /// Creates a calculator for grids with the given row count and first
    /// weekday.
    pub fn new(weekday_stacks: usize, first_weekday: u32) -> Self {
        Self {
            weekday_stacks,
            first_weekday,
        }
    }

    /// Returns the number of week rows in a grid.
    pub fn weekday_stacks(&self) -> usize {
        self.weekday_stacks
    }

    /// Returns the first weekday of a grid (1 = Sunday).
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }
}

/// Synthesizes the single-month calculation window: the previous month's
/// component (when derivable), the component itself, and the next month's
/// component (when derivable), sharing one grid configuration.
///
/// Returns the window and the anchor index of `month_comp` within it. The
/// anchor is the number of derivable predecessors: 1 when the previous month
/// derives, 0 at the representable-calendar edge where it does not.
pub fn single_month_window(month_comp: &MonthComp) -> (Vec<MonthComp>, usize) {
    let mut window = Vec::with_capacity(3);

    if let Some(prev_month) = month_comp.month().offset_by(-1) {
        window.push(month_comp.with_month(prev_month));
    }
    let anchor = window.len();
    window.push(*month_comp);
    if let Some(next_month) = month_comp.month().offset_by(1) {
        window.push(month_comp.with_month(next_month));
    }

    (window, anchor)
}

impl MultiMonthGridCalculator for DefaultCalculator {
    fn grid_selection_changes(
        &self,
        month_comps: &[MonthComp],
        current_month: Month,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        let Some(month_index) = month_comps
            .iter()
            .position(|comp| comp.month() == current_month)
        else {
            return HashSet::new();
        };

        let changed = extract_changes(prev, current);
        debug!(
            changed = changed.len(),
            month_index, "computing multi-month grid selection changes"
        );

        changed
            .iter()
            .flat_map(|selection| selection.grid_positions(month_comps, month_index))
            .collect()
    }
}

impl SingleMonthGridCalculator for DefaultCalculator {
    fn grid_selection_changes_for_month(
        &self,
        month_comp: &MonthComp,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        let (window, anchor) = single_month_window(month_comp);
        let changed = extract_changes(prev, current);
        debug!(
            changed = changed.len(),
            anchor, "computing single-month grid selection changes"
        );

        changed
            .iter()
            .flat_map(|selection| selection.grid_positions(&window, anchor))
            .collect()
    }
}
