use std::collections::HashSet;

use anyhow::Result;
use calgrid_calendar::{
    default_month_description, default_weekday_description, weekday_range, WEEKDAY_COUNT,
};
use calgrid_diff::highlight_part;
use calgrid_layout::{day_at, Day, GridPosition, HighlightPart, MonthComp};
use calgrid_selection::{connect_selection, DateSelection, RepeatWeekdaySelection, Selection};
use tracing::info;

use crate::cli::ShowArgs;
use crate::config;

pub fn run(args: ShowArgs) -> Result<()> {
    let (month, first_weekday, weekday_stacks) = config::resolve_grid(&args.grid)?;
    let day_count = weekday_stacks * WEEKDAY_COUNT;
    let comps = [MonthComp::new(month, day_count, first_weekday)];

    let mut selections: HashSet<Selection> = if args.connect {
        connect_selection(args.select.iter().copied())
            .into_iter()
            .map(|date| Selection::from(DateSelection::new(date, first_weekday)))
            .collect()
    } else {
        args.select
            .iter()
            .map(|&date| Selection::from(DateSelection::new(date, first_weekday)))
            .collect()
    };
    if let Some(weekday) = args.repeat_weekday {
        selections.insert(Selection::from(RepeatWeekdaySelection::new(
            weekday,
            first_weekday,
        )));
    }
    info!(selections = selections.len(), %month, "rendering month grid");

    println!("{}", default_month_description(month));
    let header: Vec<String> = weekday_range(first_weekday, WEEKDAY_COUNT as u32)
        .into_iter()
        .map(|weekday| format!("{:>4}", default_weekday_description(weekday)))
        .collect();
    println!("{}", header.join(" "));

    for row in 0..weekday_stacks {
        let mut line = String::new();
        for column in 0..WEEKDAY_COUNT {
            let index = (row * WEEKDAY_COUNT + column) as i32;
            let cell = match day_at(&comps, GridPosition::new(0, index)) {
                Some(day) => {
                    let selected = selections.iter().any(|s| s.contains(day.date()));
                    let part = highlight_part(&selections, day.date());
                    render_cell(&day.with_selected(selected).with_highlight_part(part))
                }
                None => "    ".to_string(),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
    println!("legend: [d] isolated  [d- start  -d- mid  -d] end  (d) adjacent month");

    Ok(())
}

/// Renders one 4-character cell. Selection-run markers win over the
/// adjacent-month parentheses.
fn render_cell(day: &Day) -> String {
    let label = format!("{:>2}", day.description());
    if day.is_selected() {
        let part = day.highlight_part();
        if part.contains(HighlightPart::START_AND_END) {
            format!("[{label}]")
        } else if part.contains(HighlightPart::START) {
            format!("[{label}-")
        } else if part.contains(HighlightPart::END) {
            format!("-{label}]")
        } else if part.contains(HighlightPart::MID) {
            format!("-{label}-")
        } else {
            format!("[{label}]")
        }
    } else if day.is_current_month() {
        format!(" {label} ")
    } else {
        format!("({label})")
    }
}
