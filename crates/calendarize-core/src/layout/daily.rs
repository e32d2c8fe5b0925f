//! Daily view: timed events packed into columns, all-day events listed apart.

use chrono::NaiveDate;
use serde::Serialize;

use super::{calendar_id, visible_rows, well_formed, Diagnostics, ExclusionReason, LayoutScope};
use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::event::Event;
use crate::grid::{GridRow, TimeGrid};
use crate::packing::{column_count, pack_columns, ColumnPlacement};

/// Layout of a single day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyLayout<'a> {
    calendar_id: String,
    day: NaiveDate,
    grid: TimeGrid,
    rows: Vec<GridRow>,
    placements: Vec<ColumnPlacement<'a>>,
    all_day_events: Vec<&'a Event>,
    column_count: usize,
    visible_row_indexes: Vec<usize>,
    diagnostics: Diagnostics,
}

impl<'a> DailyLayout<'a> {
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Every grid row with its time label.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Timed events, ordered by starting row then `(start, end)`.
    pub fn placements(&self) -> &[ColumnPlacement<'a>] {
        &self.placements
    }

    /// Events ending after the reference day, in `(start, end)` order.
    pub fn all_day_events(&self) -> &[&'a Event] {
        &self.all_day_events
    }

    /// Number of columns the timed events need.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Positions in [`DailyLayout::rows`] to render.
    pub fn visible_row_indexes(&self) -> &[usize] {
        &self.visible_row_indexes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Lay out the events of `day`.
///
/// Events ending on a later date are all-day events. Timed events must start
/// on `day`, and both their starting row and their last occupied row must be
/// visible; events crossing the window edge are dropped rather than clipped.
/// The last occupied row is that of `end - 1s`, so an event ending exactly at
/// `day_end` is kept.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn daily_layout<'a>(
    day: NaiveDate,
    events: &'a [Event],
    config: &LayoutConfig,
) -> Result<DailyLayout<'a>, ConfigError> {
    let settings = config.validate()?;
    let grid = TimeGrid::from_settings(day, &settings);
    let mut diagnostics = Diagnostics::new();

    let mut all_day_events = Vec::new();
    let mut timed = Vec::new();
    for (index, event) in well_formed(events, &mut diagnostics) {
        let (start_date, end_date) = (event.start.date(), event.end.date());
        if start_date > day || end_date < day {
            diagnostics.exclude(index, ExclusionReason::OutsideDateRange);
        } else if end_date > day {
            all_day_events.push(event);
        } else if start_date < day {
            diagnostics.exclude(index, ExclusionReason::OutsideDateRange);
        } else {
            let span = grid.span_of(event.start, event.end);
            if grid.contains_row(span.start) && grid.contains_row(span.end - 1) {
                timed.push(event);
            } else {
                diagnostics.exclude(index, ExclusionReason::OutsideTimeWindow);
            }
        }
    }
    all_day_events.sort_by(|a, b| a.chronological_cmp(b));

    let placements = pack_columns(&timed, |e| grid.span_of(e.start, e.end));
    let occupied = placements
        .iter()
        .flat_map(|p| p.span.rows())
        .filter_map(|row| grid.position_of(row));
    let visible_row_indexes = visible_rows(settings.verbose, grid.len(), occupied);

    let layout = DailyLayout {
        calendar_id: calendar_id(LayoutScope::Daily, settings.id.as_deref()),
        day,
        rows: grid.grid_rows(),
        column_count: column_count(&placements),
        grid,
        placements,
        all_day_events,
        visible_row_indexes,
        diagnostics,
    };
    tracing::debug!(
        calendar_id = %layout.calendar_id,
        %day,
        placed = layout.placements.len(),
        all_day = layout.all_day_events.len(),
        excluded = layout.diagnostics.len(),
        columns = layout.column_count,
        "computed daily layout"
    );
    Ok(layout)
}
