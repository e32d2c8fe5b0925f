//! Moving between calendar pages, and the instant range a page covers.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::grid::WeekWindow;
use crate::layout::LayoutScope;

/// Reference days of the neighbouring pages of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub scope: LayoutScope,
    pub current: NaiveDate,
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

impl Navigation {
    /// One day, one week or one month either side of `reference`.
    ///
    /// Month steps keep the day of the month, clamped to the target month's
    /// last day (Mar 31 → Feb 29 in a leap year).
    pub fn for_scope(scope: LayoutScope, reference: NaiveDate) -> Self {
        let (previous, next) = match scope {
            LayoutScope::Daily => (reference - Duration::days(1), reference + Duration::days(1)),
            LayoutScope::Weekly => (reference - Duration::days(7), reference + Duration::days(7)),
            LayoutScope::Monthly => (
                reference
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(reference),
                reference
                    .checked_add_months(Months::new(1))
                    .unwrap_or(reference),
            ),
        };
        Self {
            scope,
            current: reference,
            previous,
            next,
        }
    }
}

/// Half-open instant range `[start, end)` of the events a page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl QueryRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Range of start instants a data store should be queried with for the
/// page of `scope` containing `reference`: the day, the seven days from the
/// most recent `week_start`, or the month.
pub fn query_range(scope: LayoutScope, reference: NaiveDate, week_start: Weekday) -> QueryRange {
    let (first, last) = match scope {
        LayoutScope::Daily => (reference, reference),
        LayoutScope::Weekly => {
            let window = WeekWindow::containing(reference, week_start, week_start.pred());
            (window.first_day(), window.last_day())
        }
        LayoutScope::Monthly => {
            let first = reference.with_day(1).unwrap_or(reference);
            let last = first
                .checked_add_months(Months::new(1))
                .map(|next| next - Duration::days(1))
                .unwrap_or(first);
            (first, last)
        }
    };
    QueryRange {
        start: first.and_time(NaiveTime::MIN),
        end: (last + Duration::days(1)).and_time(NaiveTime::MIN),
    }
}
