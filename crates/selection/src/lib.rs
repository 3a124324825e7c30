//! # calgrid-selection
//!
//! Polymorphic date selections and selection-set utilities.
//!
//! A [`Selection`] answers two questions: does it cover a given date, and
//! which grid positions does it occupy given a month-grid context. Two
//! concrete variants ship here (an exact date and a repeating weekday) plus
//! a null-object baseline.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashSet;
//!
//! use calgrid_selection::{extract_changes, DateSelection, Selection};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2018, 4, 1).unwrap();
//! let selection = Selection::from(DateSelection::new(date, 1));
//! assert!(selection.contains(date));
//!
//! let prev = HashSet::new();
//! let current = HashSet::from([selection]);
//! assert_eq!(extract_changes(&prev, &current), current);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `selection` | The `Selection` sum type and its variants |
//! | `changes` | Symmetric difference between selection snapshots |
//! | `connect` | Filling gaps in discontinuous date selections |

mod changes;
mod connect;
mod selection;

pub use changes::extract_changes;
pub use connect::connect_selection;
pub use selection::{DateSelection, RepeatWeekdaySelection, Selection};
