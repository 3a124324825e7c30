//! Day cells and lazy day lookup.

use chrono::{Datelike, Local, NaiveDate};

use crate::comp::MonthComp;
use crate::highlight::HighlightPart;
use crate::position::GridPosition;

/// A single grid cell: a date plus the flags a renderer needs to draw it.
///
/// Immutable; the `with_*` methods return modified copies. Equality is
/// structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    description: String,
    is_current_month: bool,
    is_selected: bool,
    highlight_part: HighlightPart,
}

impl Day {
    /// Creates a day for a date with an empty description and all flags
    /// cleared.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            description: String::new(),
            is_current_month: false,
            is_selected: false,
            highlight_part: HighlightPart::empty(),
        }
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the human-readable day label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the date belongs to the visually-focused month, as opposed to
    /// being a leading or trailing filler day from an adjacent month.
    pub fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    /// Returns the selection flag.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Returns the highlight-shape flag.
    pub fn highlight_part(&self) -> HighlightPart {
        self.highlight_part
    }

    /// Whether this day is today. Evaluated against the local date at call
    /// time, not cached.
    pub fn is_today(&self) -> bool {
        self.date == Local::now().date_naive()
    }

    /// Returns a copy with a different description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns a copy with a different current-month flag.
    pub fn with_current_month(mut self, is_current_month: bool) -> Self {
        self.is_current_month = is_current_month;
        self
    }

    /// Returns a copy with a different selection flag.
    pub fn with_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    /// Returns a copy with a different highlight part.
    pub fn with_highlight_part(mut self, highlight_part: HighlightPart) -> Self {
        self.highlight_part = highlight_part;
        self
    }

    /// Returns a copy with the selection flag toggled.
    pub fn toggle_selection(self) -> Self {
        let is_selected = !self.is_selected;
        self.with_selected(is_selected)
    }
}

/// Computes the day at a grid position, addressing into an ordered sequence
/// of month components.
///
/// Pure and O(1) in memory: nothing is materialized beyond the returned
/// cell. The description is the day-of-month numeral; the current-month flag
/// is calendar-month membership in the addressed component's month.
/// Positions outside the sequence or the component's grid yield `None`.
pub fn day_at(month_comps: &[MonthComp], position: GridPosition) -> Option<Day> {
    let comp = month_comps.get(position.month_index)?;
    let index = usize::try_from(position.day_index).ok()?;
    if index >= comp.day_count() {
        return None;
    }
    let date = comp.date_at_index(index)?;

    Some(
        Day::new(date)
            .with_description(date.day().to_string())
            .with_current_month(comp.month().contains(date)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_calendar::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn may_2023() -> MonthComp {
        MonthComp::new(Month::new(5, 2023).unwrap(), 42, 1)
    }

    #[test]
    fn with_methods_return_modified_copies() {
        let day = Day::new(date(2018, 4, 1));
        let modified = day
            .clone()
            .with_description("1")
            .with_current_month(true)
            .with_selected(true)
            .with_highlight_part(HighlightPart::START);

        assert_eq!(day.description(), "");
        assert!(!day.is_selected());
        assert_eq!(modified.description(), "1");
        assert!(modified.is_current_month());
        assert!(modified.is_selected());
        assert_eq!(modified.highlight_part(), HighlightPart::START);
    }

    #[test]
    fn toggle_selection() {
        let day = Day::new(date(2018, 4, 1));
        assert!(day.clone().toggle_selection().is_selected());
        assert!(!day.toggle_selection().toggle_selection().is_selected());
    }

    #[test]
    fn equality_is_structural() {
        let day = Day::new(date(2018, 4, 1)).with_description("1");
        assert_eq!(day, Day::new(date(2018, 4, 1)).with_description("1"));
        assert_ne!(day, Day::new(date(2018, 4, 1)).with_description("01"));
        assert_ne!(day, day.clone().with_selected(true));
        assert_ne!(day, day.clone().with_current_month(true));
        assert_ne!(day, day.clone().with_highlight_part(HighlightPart::MID));
    }

    #[test]
    fn is_today_tracks_the_clock() {
        let today = Local::now().date_naive();
        assert!(Day::new(today).is_today());
        assert!(!Day::new(today.succ_opt().unwrap()).is_today());
    }

    #[test]
    fn day_at_labels_and_flags() {
        let comps = [may_2023()];

        // Index 0 is the Apr 30 filler day.
        let filler = day_at(&comps, GridPosition::new(0, 0)).unwrap();
        assert_eq!(filler.date(), date(2023, 4, 30));
        assert_eq!(filler.description(), "30");
        assert!(!filler.is_current_month());

        // Index 1 is May 1.
        let first = day_at(&comps, GridPosition::new(0, 1)).unwrap();
        assert_eq!(first.date(), date(2023, 5, 1));
        assert_eq!(first.description(), "1");
        assert!(first.is_current_month());
        assert!(!first.is_selected());
        assert_eq!(first.highlight_part(), HighlightPart::empty());
    }

    #[test]
    fn day_at_out_of_range_is_none() {
        let comps = [may_2023()];
        assert!(day_at(&comps, GridPosition::new(1, 0)).is_none());
        assert!(day_at(&comps, GridPosition::new(0, 42)).is_none());
        assert!(day_at(&comps, GridPosition::new(0, -1)).is_none());
    }
}
