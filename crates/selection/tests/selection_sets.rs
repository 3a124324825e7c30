use std::collections::HashSet;

use calgrid_calendar::Month;
use calgrid_layout::MonthComp;
use calgrid_selection::{
    connect_selection, extract_changes, DateSelection, RepeatWeekdaySelection, Selection,
};
use chrono::{Days, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn changes_drive_position_lookups() {
    // Replacing one date selection with another flags both the old and the
    // new cell.
    let comps = [MonthComp::new(Month::new(5, 2023).unwrap(), 42, 1)];
    let prev = HashSet::from([Selection::from(DateSelection::new(date(2023, 5, 5), 1))]);
    let current = HashSet::from([Selection::from(DateSelection::new(date(2023, 5, 8), 1))]);

    let changed = extract_changes(&prev, &current);
    assert_eq!(changed.len(), 2);

    let positions: HashSet<_> = changed
        .iter()
        .flat_map(|s| s.grid_positions(&comps, 0))
        .collect();
    let day_indices: HashSet<i32> = positions.iter().map(|p| p.day_index).collect();
    assert_eq!(day_indices, HashSet::from([5, 8]));
}

#[test]
fn mixed_variant_sets_diff_cleanly() {
    let weekday = Selection::from(RepeatWeekdaySelection::new(3, 1));
    let single = Selection::from(DateSelection::new(date(2023, 5, 5), 1));

    let prev = HashSet::from([weekday]);
    let current = HashSet::from([weekday, single]);
    assert_eq!(extract_changes(&prev, &current), HashSet::from([single]));
}

#[test]
fn connected_run_covers_every_day_in_between() {
    let start = date(2018, 4, 25);
    let end = date(2018, 5, 3);
    let run = connect_selection([end, start]);

    let mut expected = Vec::new();
    let mut current = start;
    while current <= end {
        expected.push(current);
        current = current.checked_add_days(Days::new(1)).unwrap();
    }
    assert_eq!(run.into_iter().collect::<Vec<_>>(), expected);
}
