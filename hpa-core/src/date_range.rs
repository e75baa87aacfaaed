use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Build the range covering `days` consecutive days beginning at `start`.
    ///
    /// Returns `None` when `days` is zero or the end date overflows.
    pub fn from_start(start: NaiveDate, days: u32) -> Option<DateRange> {
        let span = days.checked_sub(1)?;
        let end = start.checked_add_signed(TimeDelta::try_days(i64::from(span))?)?;
        Some(DateRange(start, end))
    }

    /// Number of days the range still yields.
    pub fn num_days(&self) -> usize {
        let diff = (self.1 - self.0).num_days();
        if diff < 0 {
            0
        } else {
            diff as usize + 1
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
