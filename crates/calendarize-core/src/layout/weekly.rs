//! Weekly view: one time-of-day row per unit, one column per day.

use chrono::NaiveDate;
use serde::Serialize;

use super::{calendar_id, visible_rows, well_formed, Diagnostics, ExclusionReason, LayoutScope};
use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::event::Event;
use crate::grid::{GridRow, TimeGrid, WeekWindow};
use crate::packing::{max_stack_per_row, stack_cells, CellCoord, CellPlacement};

/// Layout of the week containing a reference day.
///
/// Placement rows are grid row indices (as in [`TimeGrid::rows`]); columns
/// are day columns counted from the configured week start.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyLayout<'a> {
    calendar_id: String,
    window: WeekWindow,
    days: Vec<NaiveDate>,
    grid: TimeGrid,
    rows: Vec<GridRow>,
    placements: Vec<CellPlacement<'a>>,
    row_event_counts: Vec<usize>,
    visible_row_indexes: Vec<usize>,
    diagnostics: Diagnostics,
}

impl<'a> WeeklyLayout<'a> {
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    pub fn window(&self) -> &WeekWindow {
        &self.window
    }

    /// Days shown, one per column.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Placements ordered by `(row, column, index)`.
    pub fn placements(&self) -> &[CellPlacement<'a>] {
        &self.placements
    }

    /// Deepest stack of any cell in each row, parallel to [`WeeklyLayout::rows`].
    pub fn row_event_counts(&self) -> &[usize] {
        &self.row_event_counts
    }

    pub fn visible_row_indexes(&self) -> &[usize] {
        &self.visible_row_indexes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Lay out the events of the week containing `reference`.
///
/// An event belongs to the cell of its start: the row its start time falls
/// in and the column of its start date. Events starting outside the week or
/// outside the visible rows are excluded.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn weekly_layout<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    config: &LayoutConfig,
) -> Result<WeeklyLayout<'a>, ConfigError> {
    let settings = config.validate()?;
    let window = WeekWindow::containing(reference, settings.week_start, settings.week_end);
    let grid = TimeGrid::from_settings(window.first_day(), &settings);
    let mut diagnostics = Diagnostics::new();

    let mut in_range = Vec::new();
    for (index, event) in well_formed(events, &mut diagnostics) {
        if !window.contains(event.start.date()) {
            diagnostics.exclude(index, ExclusionReason::OutsideDateRange);
        } else if !grid.contains_row(grid.row_of(event.start)) {
            diagnostics.exclude(index, ExclusionReason::OutsideTimeWindow);
        } else {
            in_range.push(event);
        }
    }

    let placements = stack_cells(&in_range, |e| {
        CellCoord::new(grid.row_of(e.start), window.day_column_of(e.start.date()))
    });

    let mut row_event_counts = vec![0; grid.len()];
    let depths = max_stack_per_row(&placements, grid.ending_row() as usize);
    for (row, depth) in depths.into_iter().enumerate() {
        if let Some(position) = grid.position_of(row as u32) {
            row_event_counts[position] = depth;
        }
    }

    let occupied = placements.iter().filter_map(|p| grid.position_of(p.row));
    let visible_row_indexes = visible_rows(settings.verbose, grid.len(), occupied);

    let layout = WeeklyLayout {
        calendar_id: calendar_id(LayoutScope::Weekly, settings.id.as_deref()),
        days: window.days(),
        window,
        rows: grid.grid_rows(),
        grid,
        placements,
        row_event_counts,
        visible_row_indexes,
        diagnostics,
    };
    tracing::debug!(
        calendar_id = %layout.calendar_id,
        first_day = %layout.window.first_day(),
        last_day = %layout.window.last_day(),
        placed = layout.placements.len(),
        excluded = layout.diagnostics.len(),
        "computed weekly layout"
    );
    Ok(layout)
}
