//! Selection-set change extraction.

use std::collections::HashSet;

use crate::selection::Selection;

/// Returns the selections that differ between two snapshots: the symmetric
/// difference `(prev - current) ∪ (current - prev)`.
///
/// A selection set is replaced wholesale on each update rather than patched
/// incrementally, so the symmetric difference is exactly the changed set.
pub fn extract_changes(
    prev: &HashSet<Selection>,
    current: &HashSet<Selection>,
) -> HashSet<Selection> {
    prev.symmetric_difference(current).copied().collect()
}
