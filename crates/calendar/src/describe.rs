//! Default locale-naive descriptions.
//!
//! Locale-aware formatting is the job of an external formatter collaborator;
//! these are the English fallbacks used when none is supplied.

use crate::month::Month;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Returns the default description for a month, e.g. `"May 2023"`.
pub fn default_month_description(month: Month) -> String {
    format!(
        "{} {}",
        MONTH_NAMES[usize::from(month.month()) - 1],
        month.year()
    )
}

/// Returns the default description for a weekday (1 = Sunday .. 7 =
/// Saturday), e.g. `"SUN"`. Out-of-range weekdays yield an empty string.
pub fn default_weekday_description(weekday: u32) -> String {
    match weekday {
        1..=7 => WEEKDAY_NAMES[(weekday - 1) as usize].to_string(),
        _ => String::new(),
    }
}
