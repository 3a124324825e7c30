use std::collections::HashSet;

use anyhow::Result;
use calgrid_calendar::WEEKDAY_COUNT;
use calgrid_diff::{
    single_month_window, DefaultCalculator, HighlightPartCalculator, SingleMonthGridCalculator,
};
use calgrid_layout::{day_at, MonthComp};
use calgrid_selection::{DateSelection, Selection};
use tracing::info;

use crate::cli::DiffArgs;
use crate::config;

pub fn run(args: DiffArgs) -> Result<()> {
    let (month, first_weekday, weekday_stacks) = config::resolve_grid(&args.grid)?;
    let day_count = weekday_stacks * WEEKDAY_COUNT;
    let comp = MonthComp::new(month, day_count, first_weekday);

    let prev = selection_set(&args.prev, first_weekday);
    let current = selection_set(&args.current, first_weekday);
    info!(
        prev = prev.len(),
        current = current.len(),
        %month,
        "diffing selection snapshots"
    );

    let calculator = HighlightPartCalculator::new(
        DefaultCalculator::new(weekday_stacks, first_weekday),
        weekday_stacks,
    );
    let changes = calculator.grid_selection_changes_for_month(&comp, &prev, &current);

    let (window, anchor) = single_month_window(&comp);
    let mut positions: Vec<_> = changes.into_iter().collect();
    positions.sort();
    if positions.is_empty() {
        println!("no cells changed");
        return Ok(());
    }
    for position in positions {
        match day_at(&window, position) {
            Some(day) => {
                let origin = if position.month_index == anchor {
                    ""
                } else {
                    " (neighbor grid)"
                };
                println!(
                    "month {} index {:>2}: {}{}",
                    position.month_index, position.day_index, day.date(), origin
                );
            }
            None => println!(
                "month {} index {:>2}: outside grid",
                position.month_index, position.day_index
            ),
        }
    }

    Ok(())
}

fn selection_set(dates: &[chrono::NaiveDate], first_weekday: u32) -> HashSet<Selection> {
    dates
        .iter()
        .map(|&date| Selection::from(DateSelection::new(date, first_weekday)))
        .collect()
}
