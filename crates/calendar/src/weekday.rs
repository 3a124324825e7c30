//! Weekday indexing helpers.
//!
//! Weekdays are numbered 1..=7 counted from Sunday, matching
//! `chrono::Weekday::number_from_sunday`. The first weekday of the grid is a
//! caller-defined value in the same convention.

use crate::error::CalendarError;

/// Number of days in a week.
pub const WEEKDAY_COUNT: usize = 7;

/// Default first weekday of a grid (1 = Sunday).
pub const DEFAULT_FIRST_WEEKDAY: u32 = 1;

/// Default number of week rows in a grid.
pub const DEFAULT_WEEKDAY_STACKS: usize = 6;

/// Validates a caller-supplied weekday number, returning it unchanged when
/// it lies in 1..=7.
pub fn validate_weekday(weekday: u32) -> Result<u32, CalendarError> {
    if (1..=7).contains(&weekday) {
        Ok(weekday)
    } else {
        Err(CalendarError::InvalidWeekday { weekday })
    }
}

/// Returns `count` consecutive weekday numbers starting at `first_weekday`,
/// each wrapped into 1..=7 (a raw value of 0 maps to 7).
pub fn weekday_range(first_weekday: u32, count: u32) -> Vec<u32> {
    (first_weekday..first_weekday + count)
        .map(|weekday| weekday % 7)
        .map(|weekday| if weekday == 0 { 7 } else { weekday })
        .collect()
}

/// Returns the weekday at `index` in a weekday range starting at
/// `first_weekday`.
pub fn weekday_with_index(index: u32, first_weekday: u32) -> u32 {
    let weekday = (index + first_weekday) % 7;
    if weekday == 0 {
        7
    } else {
        weekday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_full_week() {
        for weekday in 1..=7 {
            assert_eq!(validate_weekday(weekday), Ok(weekday));
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(
            validate_weekday(0),
            Err(CalendarError::InvalidWeekday { weekday: 0 })
        );
        assert_eq!(
            validate_weekday(9),
            Err(CalendarError::InvalidWeekday { weekday: 9 })
        );
    }

    #[test]
    fn range_starting_sunday() {
        assert_eq!(weekday_range(1, 7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn range_starting_monday() {
        assert_eq!(weekday_range(2, 7), vec![2, 3, 4, 5, 6, 7, 1]);
    }

    #[test]
    fn range_shorter_than_week() {
        assert_eq!(weekday_range(6, 3), vec![6, 7, 1]);
    }

    #[test]
    fn range_values_always_in_1_to_7() {
        for first_weekday in 0..=7 {
            let range = weekday_range(first_weekday, 7);
            assert_eq!(range.len(), 7);
            assert!(range.iter().all(|&w| (1..=7).contains(&w)));

            // All distinct.
            let mut sorted = range.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 7);
        }
    }

    #[test]
    fn index_agrees_with_range() {
        for first_weekday in 0..=7 {
            let range = weekday_range(first_weekday, 7);
            for index in 0..7u32 {
                assert_eq!(
                    weekday_with_index(index, first_weekday),
                    range[index as usize],
                    "mismatch at index {index}, first weekday {first_weekday}"
                );
            }
        }
    }
}
