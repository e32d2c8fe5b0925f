//! Monthly view: one cell per day of the month.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::{calendar_id, visible_rows, well_formed, Diagnostics, ExclusionReason, LayoutScope};
use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::event::Event;
use crate::grid::MonthGrid;
use crate::packing::{stack_keyed, CellPlacement};

/// Layout of the month containing a reference day.
///
/// Rows are weeks of the month grid; visible row indexes refer to those
/// weeks.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyLayout<'a> {
    calendar_id: String,
    grid: MonthGrid,
    weekdays: Vec<Weekday>,
    placements: Vec<CellPlacement<'a>>,
    visible_row_indexes: Vec<usize>,
    diagnostics: Diagnostics,
}

impl<'a> MonthlyLayout<'a> {
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Weekday heading each column.
    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    /// Placements ordered by `(row, column, index)`.
    pub fn placements(&self) -> &[CellPlacement<'a>] {
        &self.placements
    }

    pub fn visible_row_indexes(&self) -> &[usize] {
        &self.visible_row_indexes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Events in the cell of a day of the month, in stacking order.
    pub fn events_on(&self, day: u32) -> Vec<&'a Event> {
        match self.grid.day_to_cell(day) {
            Some(cell) => self
                .placements
                .iter()
                .filter(|p| p.cell() == cell)
                .map(|p| p.event)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Lay out the events of the month containing `reference`.
///
/// An event belongs to the cell of its start date. Events starting in another
/// month, or on a weekday outside the configured week, are excluded.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn monthly_layout<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    config: &LayoutConfig,
) -> Result<MonthlyLayout<'a>, ConfigError> {
    let settings = config.validate()?;
    let grid = MonthGrid::containing(reference, settings.week_start, settings.week_end);
    let mut diagnostics = Diagnostics::new();

    let mut cells = Vec::new();
    for (index, event) in well_formed(events, &mut diagnostics) {
        let date = event.start.date();
        if !grid.contains(date) {
            diagnostics.exclude(index, ExclusionReason::OutsideDateRange);
            continue;
        }
        if !grid.includes_weekday(date.weekday()) {
            diagnostics.exclude(index, ExclusionReason::ExcludedWeekday);
            continue;
        }
        match grid.day_to_cell(date.day()) {
            Some(cell) => cells.push((cell, event)),
            None => diagnostics.exclude(index, ExclusionReason::OutsideDateRange),
        }
    }

    let placements = stack_keyed(cells);

    let occupied = placements.iter().map(|p| p.row as usize);
    let visible_row_indexes = visible_rows(settings.verbose, grid.row_count() as usize, occupied);

    let layout = MonthlyLayout {
        calendar_id: calendar_id(LayoutScope::Monthly, settings.id.as_deref()),
        weekdays: grid.weekdays(),
        grid,
        placements,
        visible_row_indexes,
        diagnostics,
    };
    tracing::debug!(
        calendar_id = %layout.calendar_id,
        year = layout.grid.year(),
        month = layout.grid.month(),
        placed = layout.placements.len(),
        excluded = layout.diagnostics.len(),
        "computed monthly layout"
    );
    Ok(layout)
}
