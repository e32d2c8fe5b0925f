pub mod config;
pub mod layout;
pub mod nav;

use std::path::Path;

use calendarize_core::{CoreError, LayoutConfig};
use chrono::{Local, NaiveDate};

/// Config from an explicit file, or the user's config file (created with
/// defaults when missing).
pub fn load_config(path: Option<&Path>) -> Result<LayoutConfig, CoreError> {
    match path {
        Some(path) => LayoutConfig::load_from(path),
        None => LayoutConfig::load(),
    }
}

/// The given day, or today in local time.
pub fn reference_day(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
