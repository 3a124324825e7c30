//! # calgrid-diff
//!
//! Grid selection diff calculators: given previous and current selection
//! snapshots plus grid context, compute exactly the grid cells that must be
//! redrawn.
//!
//! ## Architecture
//!
//! ```text
//! grid_selection_changes()
//!   ├─ extract_changes()            (calgrid-selection)
//!   ├─ Selection::grid_positions()  (calgrid-selection)
//!   └─ HighlightPartCalculator      widens by ±1 day index
//! highlight_part()                  shape of one date under a snapshot
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashSet;
//!
//! use calgrid_calendar::Month;
//! use calgrid_diff::{
//!     DefaultCalculator, HighlightPartCalculator, SingleMonthGridCalculator,
//! };
//! use calgrid_layout::MonthComp;
//! use calgrid_selection::{DateSelection, Selection};
//! use chrono::NaiveDate;
//!
//! let comp = MonthComp::new(Month::new(5, 2023).unwrap(), 42, 1);
//! let calc = HighlightPartCalculator::new(DefaultCalculator::new(6, 1), 6);
//!
//! let date = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
//! let current = HashSet::from([Selection::from(DateSelection::new(date, 1))]);
//!
//! let changes = calc.grid_selection_changes_for_month(&comp, &HashSet::new(), &current);
//! assert!(!changes.is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calculator` | Multi-month and single-month calculator traits |
//! | `default` | Default calculator and the single-month window |
//! | `highlight` | Highlight-aware change-set widening |
//! | `part` | Highlight shape of one date |

mod calculator;
mod default;
mod highlight;
mod part;

pub use calculator::{MultiMonthGridCalculator, SingleMonthGridCalculator};
pub use default::{single_month_window, DefaultCalculator};
pub use highlight::HighlightPartCalculator;
pub use part::highlight_part;
