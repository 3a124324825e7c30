//! Month range generation.

use crate::month::Month;

/// Returns all months from `min` to `max` inclusive, in ascending order.
///
/// Empty when `min > max`. Months whose offset is not representable by the
/// calendar provider are skipped rather than failing.
pub fn month_range(min: Month, max: Month) -> Vec<Month> {
    if min > max {
        return Vec::new();
    }
    let offset = max.month_offset(min);
    (0..=offset).filter_map(|o| min.offset_by(o)).collect()
}

/// Returns the number of months from `min` to `max` inclusive, or 0 when
/// `max < min`.
pub fn month_count(min: Month, max: Month) -> usize {
    (max.month_offset(min) + 1).max(0) as usize
}
