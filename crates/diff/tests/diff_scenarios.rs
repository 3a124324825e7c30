use std::collections::HashSet;

use calgrid_calendar::Month;
use calgrid_diff::{
    highlight_part, single_month_window, DefaultCalculator, HighlightPartCalculator,
    MultiMonthGridCalculator, SingleMonthGridCalculator,
};
use calgrid_layout::{day_at, GridPosition, HighlightPart, MonthComp};
use calgrid_selection::{DateSelection, Selection};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn comp(m: u8, y: i32) -> MonthComp {
    MonthComp::new(Month::new(m, y).unwrap(), 42, 1)
}

fn select(dates: &[NaiveDate]) -> HashSet<Selection> {
    dates
        .iter()
        .map(|&d| Selection::from(DateSelection::new(d, 1)))
        .collect()
}

#[test]
fn deselecting_mid_run_repaints_the_new_run_ends() {
    // A three-day run loses its middle date. The changed cell is May 11,
    // but May 10 and May 12 change shape (START -> START_AND_END and
    // END -> START_AND_END), so the widened calculator must cover them.
    let comps = [comp(5, 2023)];
    let current_month = Month::new(5, 2023).unwrap();
    let prev = select(&[date(2023, 5, 10), date(2023, 5, 11), date(2023, 5, 12)]);
    let current = select(&[date(2023, 5, 10), date(2023, 5, 12)]);

    let calc = HighlightPartCalculator::new(DefaultCalculator::new(6, 1), 6);
    let changes = calc.grid_selection_changes(&comps, current_month, &prev, &current);

    // The whole run, by day index: May 10 = cell 10.
    for day_index in 10..=12 {
        assert!(
            changes.contains(&GridPosition::new(0, day_index)),
            "cell {day_index} must be repainted"
        );
    }

    // The repaint produces the right shapes.
    for position in &changes {
        let day = match day_at(&comps, *position) {
            Some(day) => day,
            None => continue,
        };
        let part = highlight_part(&current, day.date());
        match day.date() {
            d if d == date(2023, 5, 10) || d == date(2023, 5, 12) => {
                assert_eq!(part, HighlightPart::START_AND_END);
            }
            d if d == date(2023, 5, 11) => assert_eq!(part, HighlightPart::empty()),
            _ => {}
        }
    }
}

#[test]
fn snapshots_commute_and_identical_snapshots_are_quiet() {
    let comps = [comp(4, 2023), comp(5, 2023)];
    let current_month = Month::new(5, 2023).unwrap();
    let a = select(&[date(2023, 5, 3), date(2023, 5, 4)]);
    let b = select(&[date(2023, 5, 4), date(2023, 5, 5)]);

    let calc = DefaultCalculator::new(6, 1);
    assert_eq!(
        calc.grid_selection_changes(&comps, current_month, &a, &b),
        calc.grid_selection_changes(&comps, current_month, &b, &a)
    );
    assert!(calc
        .grid_selection_changes(&comps, current_month, &a, &a)
        .is_empty());
}

#[test]
fn single_and_multi_month_variants_agree_on_the_window() {
    // Running the multi-month variant over the synthesized window must
    // reproduce the single-month result.
    let month_comp = comp(5, 2023);
    let (window, anchor) = single_month_window(&month_comp);
    assert_eq!(anchor, 1);

    let prev = HashSet::new();
    let current = select(&[date(2023, 5, 20), date(2023, 6, 1)]);

    let calc = DefaultCalculator::new(6, 1);
    let single = calc.grid_selection_changes_for_month(&month_comp, &prev, &current);
    let multi =
        calc.grid_selection_changes(&window, month_comp.month(), &prev, &current);
    assert_eq!(single, multi);
}

#[test]
fn no_panic_at_the_calendar_edge() {
    // The window collapses when neighbors are underivable; the calculators
    // must degrade to empty results, never fail.
    let edge = MonthComp::new(Month::new(6, 300_000).unwrap(), 42, 1);
    let (window, anchor) = single_month_window(&edge);
    assert_eq!((window.len(), anchor), (1, 0));

    let calc = HighlightPartCalculator::new(DefaultCalculator::new(6, 1), 6);
    let changes = calc.grid_selection_changes_for_month(
        &edge,
        &HashSet::new(),
        &select(&[date(2023, 5, 1)]),
    );
    assert!(changes.is_empty());
}
