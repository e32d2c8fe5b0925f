//! Time-of-day row slots shared by the daily and weekly views.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::config::{validate_day_window, LayoutSettings};
use crate::error::ConfigError;

/// Half-open range of grid rows, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowSpan {
    pub start: u32,
    pub end: u32,
}

impl RowSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of rows covered
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, row: u32) -> bool {
        self.start <= row && row < self.end
    }

    /// Check if two spans share at least one row
    pub fn overlaps(&self, other: &RowSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn rows(&self) -> impl Iterator<Item = u32> {
        self.start..self.end
    }
}

/// One rendered grid row with its wall-clock time and `HH:MM` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub row: u32,
    pub time: NaiveDateTime,
    pub label: String,
}

/// Contiguous rows `[day_start / unit, day_end / unit)` of one reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeGrid {
    day: NaiveDate,
    unit: u32,
    starting_row: u32,
    ending_row: u32,
}

impl TimeGrid {
    /// Build a grid for `day`, validating the unit and the day window.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `unit` lies outside `1..=1440`, when
    /// `day_start >= day_end` or when a bound lies outside `0..=1440`.
    pub fn build(day: NaiveDate, unit: i64, day_start: i64, day_end: i64) -> Result<Self, ConfigError> {
        let window = validate_day_window(unit, day_start, day_end)?;
        Ok(Self {
            day,
            unit: window.unit,
            starting_row: window.day_start / window.unit,
            ending_row: window.day_end / window.unit,
        })
    }

    /// Build a grid from settings that already passed validation.
    pub fn from_settings(day: NaiveDate, settings: &LayoutSettings) -> Self {
        Self {
            day,
            unit: settings.unit,
            starting_row: settings.day_start / settings.unit,
            ending_row: settings.day_end / settings.unit,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn unit(&self) -> u32 {
        self.unit
    }

    pub fn starting_row(&self) -> u32 {
        self.starting_row
    }

    pub fn ending_row(&self) -> u32 {
        self.ending_row
    }

    pub fn len(&self) -> usize {
        self.ending_row.saturating_sub(self.starting_row) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row indices in order.
    pub fn rows(&self) -> Vec<u32> {
        (self.starting_row..self.ending_row).collect()
    }

    /// Wall-clock instant at which `row` begins on the reference day.
    pub fn row_time(&self, row: u32) -> NaiveDateTime {
        self.day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(row) * i64::from(self.unit))
    }

    /// Wall-clock instants of every row, parallel to [`TimeGrid::rows`].
    pub fn row_times(&self) -> Vec<NaiveDateTime> {
        self.rows().into_iter().map(|r| self.row_time(r)).collect()
    }

    /// Rows with their times and `HH:MM` labels.
    pub fn grid_rows(&self) -> Vec<GridRow> {
        self.rows()
            .into_iter()
            .map(|row| {
                let time = self.row_time(row);
                GridRow {
                    row,
                    time,
                    label: time.format("%H:%M").to_string(),
                }
            })
            .collect()
    }

    /// Row that an instant falls in, from its time of day (seconds ignored).
    pub fn row_of(&self, instant: NaiveDateTime) -> u32 {
        (instant.hour() * 60 + instant.minute()) / self.unit
    }

    /// Rows covered by an event, `[row_of(start), row_of(end - 1s) + 1)`.
    ///
    /// An event always covers at least its starting row.
    pub fn span_of(&self, start: NaiveDateTime, end: NaiveDateTime) -> RowSpan {
        let last = (end - Duration::seconds(1)).max(start);
        let start_row = self.row_of(start);
        let end_row = (self.row_of(last) + 1).max(start_row + 1);
        RowSpan::new(start_row, end_row)
    }

    pub fn contains_row(&self, row: u32) -> bool {
        self.starting_row <= row && row < self.ending_row
    }

    /// Position of `row` within [`TimeGrid::rows`], if it belongs to the grid.
    pub fn position_of(&self, row: u32) -> Option<usize> {
        self.contains_row(row)
            .then(|| (row - self.starting_row) as usize)
    }
}
