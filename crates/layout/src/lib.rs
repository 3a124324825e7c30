//! # calgrid-layout
//!
//! Lazy month-grid layout: maps a month plus a grid configuration (first
//! weekday, week-row count) to a fixed-size sequence of calendar cells,
//! computed per cell on demand.
//!
//! ## Quick Start
//!
//! ```
//! use calgrid_calendar::Month;
//! use calgrid_layout::{day_at, date_range, GridPosition, MonthComp};
//!
//! let month = Month::new(5, 2023).unwrap();
//! let comps = [MonthComp::new(month, 42, 1)];
//!
//! // The grid opens on Apr 30 (the nearest preceding Sunday).
//! let range = date_range(month, 1, 6);
//! assert_eq!(range.len(), 42);
//!
//! let day = day_at(&comps, GridPosition::new(0, 1)).unwrap();
//! assert_eq!(day.description(), "1");
//! assert!(day.is_current_month());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `layout` | First grid date, offset dates, full date ranges |
//! | `comp` | Month component (month + grid configuration) |
//! | `day` | Day cell values and lazy index-addressed lookup |
//! | `position` | Grid cell coordinates |
//! | `highlight` | Highlight-part flags |

mod comp;
mod day;
mod highlight;
mod layout;
mod position;

pub use comp::MonthComp;
pub use day::{day_at, Day};
pub use highlight::HighlightPart;
pub use layout::{date_range, date_with_offset, first_grid_date};
pub use position::GridPosition;
