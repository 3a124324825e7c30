//! # calgrid-calendar
//!
//! Month arithmetic and weekday indexing for calendar grids.
//!
//! The calendar provider is `chrono`'s proleptic-Gregorian `NaiveDate`;
//! weekdays are numbered 1..=7 counted from Sunday. Operations that can
//! leave the representable date range return `Option` instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use calgrid_calendar::{month_count, month_range, Month};
//!
//! let min = Month::new(1, 2018).unwrap();
//! let max = Month::new(4, 2018).unwrap();
//!
//! assert_eq!(min.offset_by(3), Some(max));
//! assert_eq!(max.month_offset(min), 3);
//! assert_eq!(month_count(min, max), 4);
//! assert_eq!(month_range(min, max).len(), 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month value type and month arithmetic |
//! | `weekday` | Weekday numbering and range helpers |
//! | `range` | Month range generation |
//! | `describe` | Default locale-naive descriptions |
//! | `error` | Error types |

mod describe;
mod error;
mod month;
mod range;
mod weekday;

pub use describe::{default_month_description, default_weekday_description};
pub use error::CalendarError;
pub use month::Month;
pub use range::{month_count, month_range};
pub use weekday::{
    validate_weekday, weekday_range, weekday_with_index, DEFAULT_FIRST_WEEKDAY,
    DEFAULT_WEEKDAY_STACKS, WEEKDAY_COUNT,
};
