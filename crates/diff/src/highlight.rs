//! Highlight-aware widening of grid selection changes.

use std::collections::HashSet;

use calgrid_calendar::{Month, WEEKDAY_COUNT};
use calgrid_layout::{GridPosition, MonthComp};
use calgrid_selection::Selection;
use tracing::trace;

use crate::calculator::{MultiMonthGridCalculator, SingleMonthGridCalculator};

/// A decorator that widens another calculator's change set by one cell on
/// each side.
///
/// Deselecting a date inside a contiguous run changes the highlight shape of
/// its still-selected neighbors (a `MID` cell becomes an `END` cell, say)
/// even though the neighbors' selection status is unchanged. A plain change
/// set would leave those cells stale, so every position is widened by ±1 day
/// index, clamped to the grid's valid range.
#[derive(Debug, Clone, Copy)]
pub struct HighlightPartCalculator<C> {
    inner: C,
    weekday_stacks: usize,
}

impl<C> HighlightPartCalculator<C> {
    /// Wraps a calculator, bounding widened day indices by
    /// `weekday_stacks x 7` in the multi-month variant.
    pub fn new(inner: C, weekday_stacks: usize) -> Self {
        Self {
            inner,
            weekday_stacks,
        }
    }

    /// Returns the number of week rows in a grid.
    pub fn weekday_stacks(&self) -> usize {
        self.weekday_stacks
    }

    fn widen(
        positions: HashSet<GridPosition>,
        total_day_count: usize,
    ) -> HashSet<GridPosition> {
        trace!(base = positions.len(), total_day_count, "widening change set");
        positions
            .into_iter()
            .flat_map(|position| {
                [
                    position.decrementing_day_index(),
                    position,
                    position.incrementing_day_index(),
                ]
            })
            .filter(|position| {
                position.day_index >= 0 && (position.day_index as usize) < total_day_count
            })
            .collect()
    }
}

impl<C: MultiMonthGridCalculator> MultiMonthGridCalculator for HighlightPartCalculator<C> {
    fn grid_selection_changes(
        &self,
        month_comps: &[MonthComp],
        current_month: Month,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        let base = self
            .inner
            .grid_selection_changes(month_comps, current_month, prev, current);
        Self::widen(base, self.weekday_stacks * WEEKDAY_COUNT)
    }
}

impl<C: SingleMonthGridCalculator> SingleMonthGridCalculator for HighlightPartCalculator<C> {
    fn grid_selection_changes_for_month(
        &self,
        month_comp: &MonthComp,
        prev: &HashSet<Selection>,
        current: &HashSet<Selection>,
    ) -> HashSet<GridPosition> {
        let base = self
            .inner
            .grid_selection_changes_for_month(month_comp, prev, current);
        Self::widen(base, month_comp.day_count())
    }
}
