//! Date-run connection.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Connects a possibly discontinuous collection of dates into one continuous
/// run: every calendar day between the minimum and maximum date, inclusive.
///
/// Empty input yields an empty set; a single date yields itself. The
/// earliest date anchors the run, so later selections only ever extend it.
pub fn connect_selection<I>(dates: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
    for date in dates {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(date), max.max(date)),
            None => (date, date),
        });
    }
    let Some((min, max)) = bounds else {
        return BTreeSet::new();
    };

    let mut run = BTreeSet::new();
    let mut current = Some(min);
    while let Some(date) = current {
        if date > max {
            break;
        }
        run.insert(date);
        current = date.succ_opt();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(connect_selection([]).is_empty());
    }

    #[test]
    fn single_date() {
        let run = connect_selection([date(2018, 4, 1)]);
        assert_eq!(run, BTreeSet::from([date(2018, 4, 1)]));
    }

    #[test]
    fn fills_the_gap() {
        let run = connect_selection([date(2018, 4, 1), date(2018, 4, 4)]);
        let expected = BTreeSet::from([
            date(2018, 4, 1),
            date(2018, 4, 2),
            date(2018, 4, 3),
            date(2018, 4, 4),
        ]);
        assert_eq!(run, expected);
    }

    #[test]
    fn crosses_month_boundaries() {
        let run = connect_selection([date(2018, 4, 29), date(2018, 5, 2)]);
        assert_eq!(run.len(), 4);
        assert!(run.contains(&date(2018, 4, 30)));
        assert!(run.contains(&date(2018, 5, 1)));
    }

    #[test]
    fn bounds_and_size_laws() {
        let input = [
            date(2018, 4, 10),
            date(2018, 4, 3),
            date(2018, 4, 21),
            date(2018, 4, 10),
        ];
        let run = connect_selection(input);
        let min = *run.first().unwrap();
        let max = *run.last().unwrap();
        assert_eq!(min, date(2018, 4, 3));
        assert_eq!(max, date(2018, 4, 21));

        let span = max.signed_duration_since(min).num_days() as usize + 1;
        assert_eq!(run.len(), span);
    }

    #[test]
    fn order_of_input_is_irrelevant() {
        let a = connect_selection([date(2018, 4, 4), date(2018, 4, 1)]);
        let b = connect_selection([date(2018, 4, 1), date(2018, 4, 4)]);
        assert_eq!(a, b);
    }
}
