//! Month value type with offset, containment, and ordering operations.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// An immutable (month, year) pair ordered chronologically.
///
/// A `Month` is never mutated; "changed" months are new values produced by
/// [`Month::offset_by`]. Equality and ordering are defined solely by the
/// (month, year) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    month: u8,
    year: i32,
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl Month {
    /// Creates a new `Month` from explicit month and year values.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(month: u8, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { month, year })
    }

    /// Creates the `Month` containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month() as u8,
            year: date.year(),
        }
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the first day of this month, or `None` when the month is not
    /// representable by the calendar provider.
    pub fn first_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), 1)
    }

    /// Returns the month `offset` calendar months away.
    ///
    /// Returns `None` when the result falls outside the representable
    /// calendar range; this never panics.
    pub fn offset_by(self, offset: i32) -> Option<Self> {
        let total =
            i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(offset);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = (total.rem_euclid(12) + 1) as u8;
        // The provider is the final authority on representability.
        NaiveDate::from_ymd_opt(year, u32::from(month), 1)?;
        Some(Self { month, year })
    }

    /// Returns the signed month distance from `other` to `self`:
    /// `(year - other.year) * 12 + (month - other.month)`.
    pub fn month_offset(self, other: Month) -> i32 {
        (self.year - other.year) * 12 + (i32::from(self.month) - i32::from(other.month))
    }

    /// Checks whether a date falls inside this calendar month.
    ///
    /// This is calendar-month membership, which is distinct from grid
    /// membership (a month grid also holds filler days from the adjacent
    /// months).
    pub fn contains(self, date: NaiveDate) -> bool {
        date.month() == u32::from(self.month) && date.year() == self.year
    }

    /// Returns all dates within this calendar month whose weekday equals
    /// `weekday` (1 = Sunday .. 7 = Saturday), in ascending order.
    ///
    /// Locates the first matching weekday on or after the 1st, then steps by
    /// 7 days while still inside the month. Unrepresentable months yield an
    /// empty result.
    pub fn dates_with_weekday(self, weekday: u32) -> Vec<NaiveDate> {
        let Some(first) = self.first_date() else {
            return Vec::new();
        };

        let first_weekday = first.weekday().number_from_sunday();
        let offset = if first_weekday > weekday {
            7 - (first_weekday - weekday)
        } else {
            weekday - first_weekday
        };

        let mut dates = Vec::new();
        let mut current = first.checked_add_days(Days::new(u64::from(offset)));
        while let Some(date) = current {
            if !self.contains(date) {
                break;
            }
            dates.push(date);
            current = date.checked_add_days(Days::new(7));
        }
        dates
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
