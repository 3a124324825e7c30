//! Error types for the calgrid-calendar crate.

/// Error type for all fallible operations in the calgrid-calendar crate.
///
/// Date arithmetic that leaves the representable calendar range is not an
/// error in this crate; those operations return `Option` and callers skip
/// the absent elements. This enum only covers validation of caller-supplied
/// values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a weekday number is outside the valid range 1..=7.
    #[error("invalid weekday: {weekday} (must be 1..=7, counted from Sunday)")]
    InvalidWeekday {
        /// The invalid weekday number that was provided.
        weekday: u32,
    },
}
