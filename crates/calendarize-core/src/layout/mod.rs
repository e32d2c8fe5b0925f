//! Layout pipelines for the daily, weekly and monthly views.
//!
//! Each view is an independent, pure function of a reference day, an event
//! slice and a [`LayoutConfig`]:
//! 1. validate the configuration
//! 2. build the grid geometry
//! 3. drop malformed and out-of-range events, recording each in [`Diagnostics`]
//! 4. sort and delegate to the column packer or the cell stacker
//! 5. derive the visible rows
//!
//! Results borrow the input events and are read-only snapshots.

mod daily;
mod diagnostics;
mod monthly;
mod weekly;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::event::Event;

pub use daily::{daily_layout, DailyLayout};
pub use diagnostics::{Diagnostics, ExcludedEvent, ExclusionReason};
pub use monthly::{monthly_layout, MonthlyLayout};
pub use weekly::{weekly_layout, WeeklyLayout};

/// Which calendar view to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutScope {
    Daily,
    Weekly,
    Monthly,
}

impl LayoutScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutScope::Daily => "daily",
            LayoutScope::Weekly => "weekly",
            LayoutScope::Monthly => "monthly",
        }
    }
}

impl fmt::Display for LayoutScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(LayoutScope::Daily),
            "weekly" | "week" => Ok(LayoutScope::Weekly),
            "monthly" | "month" => Ok(LayoutScope::Monthly),
            other => Err(format!("unknown calendar scope: {other}")),
        }
    }
}

/// Identifier of a rendered calendar: the supplied one, or
/// `<scope>_calendar_<random token>`.
pub fn calendar_id(scope: LayoutScope, supplied: Option<&str>) -> String {
    match supplied {
        Some(id) => id.to_string(),
        None => format!("{scope}_calendar_{}", uuid::Uuid::new_v4().simple()),
    }
}

/// A computed layout of any scope.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Layout<'a> {
    Daily(DailyLayout<'a>),
    Weekly(WeeklyLayout<'a>),
    Monthly(MonthlyLayout<'a>),
}

impl<'a> Layout<'a> {
    pub fn scope(&self) -> LayoutScope {
        match self {
            Layout::Daily(_) => LayoutScope::Daily,
            Layout::Weekly(_) => LayoutScope::Weekly,
            Layout::Monthly(_) => LayoutScope::Monthly,
        }
    }

    pub fn calendar_id(&self) -> &str {
        match self {
            Layout::Daily(l) => l.calendar_id(),
            Layout::Weekly(l) => l.calendar_id(),
            Layout::Monthly(l) => l.calendar_id(),
        }
    }

    pub fn visible_row_indexes(&self) -> &[usize] {
        match self {
            Layout::Daily(l) => l.visible_row_indexes(),
            Layout::Weekly(l) => l.visible_row_indexes(),
            Layout::Monthly(l) => l.visible_row_indexes(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Layout::Daily(l) => l.diagnostics(),
            Layout::Weekly(l) => l.diagnostics(),
            Layout::Monthly(l) => l.diagnostics(),
        }
    }
}

/// Compute the layout of `scope` around `reference`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn compute_layout<'a>(
    scope: LayoutScope,
    reference: NaiveDate,
    events: &'a [Event],
    config: &LayoutConfig,
) -> Result<Layout<'a>, ConfigError> {
    Ok(match scope {
        LayoutScope::Daily => Layout::Daily(daily_layout(reference, events, config)?),
        LayoutScope::Weekly => Layout::Weekly(weekly_layout(reference, events, config)?),
        LayoutScope::Monthly => Layout::Monthly(monthly_layout(reference, events, config)?),
    })
}

/// Events that pass validation, with their input positions.
fn well_formed<'a>(events: &'a [Event], diagnostics: &mut Diagnostics) -> Vec<(usize, &'a Event)> {
    events
        .iter()
        .enumerate()
        .filter(|(index, event)| match event.validate() {
            Ok(()) => true,
            Err(error) => {
                diagnostics.exclude(*index, ExclusionReason::Malformed { error });
                false
            }
        })
        .collect()
}

/// Every row position when verbose, otherwise the sorted, distinct
/// positions that hold at least one placement.
fn visible_rows(verbose: bool, row_count: usize, occupied: impl IntoIterator<Item = usize>) -> Vec<usize> {
    if verbose {
        return (0..row_count).collect();
    }
    let mut rows: Vec<usize> = occupied.into_iter().filter(|&r| r < row_count).collect();
    rows.sort_unstable();
    rows.dedup();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse_and_display() {
        assert_eq!("Weekly".parse::<LayoutScope>(), Ok(LayoutScope::Weekly));
        assert_eq!("month".parse::<LayoutScope>(), Ok(LayoutScope::Monthly));
        assert!("yearly".parse::<LayoutScope>().is_err());
        assert_eq!(LayoutScope::Daily.to_string(), "daily");
    }

    #[test]
    fn test_calendar_id() {
        assert_eq!(calendar_id(LayoutScope::Daily, Some("mine")), "mine");
        let a = calendar_id(LayoutScope::Monthly, None);
        let b = calendar_id(LayoutScope::Monthly, None);
        assert!(a.starts_with("monthly_calendar_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(true, 3, [1]), vec![0, 1, 2]);
        assert_eq!(visible_rows(false, 5, [3, 1, 3, 7]), vec![1, 3]);
        assert!(visible_rows(false, 5, Vec::new()).is_empty());
    }
}
