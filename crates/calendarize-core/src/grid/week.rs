//! Week window arithmetic with configurable week boundaries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Days from `week_start` to `week_end`, wrapping when `week_end` comes
/// before `week_start` (Wed..Tue is 6). Equal bounds make a single-day week,
/// so a window never holds two days sharing a column.
pub fn week_span(week_start: Weekday, week_end: Weekday) -> u32 {
    weekday_offset(week_end, week_start)
}

/// Position of `weekday` counted from `week_start`, in `0..7`.
pub fn weekday_offset(weekday: Weekday, week_start: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}

/// The days shown by a weekly calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    first_day: NaiveDate,
    last_day: NaiveDate,
    week_start: Weekday,
    week_end: Weekday,
}

impl WeekWindow {
    /// Window containing `reference`: from the most recent `week_start`
    /// on or before it, through `week_span(week_start, week_end)` days later.
    pub fn containing(reference: NaiveDate, week_start: Weekday, week_end: Weekday) -> Self {
        let back = weekday_offset(reference.weekday(), week_start);
        let first_day = reference - Duration::days(i64::from(back));
        let last_day = first_day + Duration::days(i64::from(week_span(week_start, week_end)));
        Self {
            first_day,
            last_day,
            week_start,
            week_end,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn week_end(&self) -> Weekday {
        self.week_end
    }

    /// Number of days shown
    pub fn len(&self) -> usize {
        (self.last_day - self.first_day).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Days in order, first to last inclusive.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_day
            .iter_days()
            .take(self.len())
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// Column of `date`: its weekday counted from the configured week start.
    pub fn day_column_of(&self, date: NaiveDate) -> u32 {
        weekday_offset(date.weekday(), self.week_start)
    }
}
