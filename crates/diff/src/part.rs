//! Highlight-shape computation for a single date.

use std::collections::HashSet;

use calgrid_layout::HighlightPart;
use calgrid_selection::Selection;
use chrono::NaiveDate;

/// Computes the highlight shape of a date under a selection snapshot.
///
/// An unselected date has no shape. Otherwise the neighbors decide:
/// unselected next date adds `END`, unselected previous date adds `START`,
/// and both neighbors selected forces `MID`. An isolated selected date is
/// therefore `START_AND_END`, and the cells of a contiguous run read
/// `START`, `MID`..., `END`.
pub fn highlight_part(selections: &HashSet<Selection>, date: NaiveDate) -> HighlightPart {
    let selected = |date: NaiveDate| selections.iter().any(|s| s.contains(date));
    if !selected(date) {
        return HighlightPart::empty();
    }

    let prev = date.pred_opt();
    let next = date.succ_opt();
    let prev_selected = prev.is_some_and(selected);
    let next_selected = next.is_some_and(selected);

    let mut part = HighlightPart::empty();
    if next.is_some() && !next_selected {
        part |= HighlightPart::END;
    }
    if prev.is_some() && !prev_selected {
        part |= HighlightPart::START;
    }
    if prev_selected && next_selected {
        part = HighlightPart::MID;
    }
    part
}
