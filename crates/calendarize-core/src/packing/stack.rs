//! Per-cell stacking for the weekly and monthly views.
//!
//! A cell is already the finest granularity of those grids, so events in the
//! same cell are simply stacked in chronological order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::event::Event;

/// Grid cell, ordered by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellCoord {
    pub row: u32,
    pub column: u32,
}

impl CellCoord {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// An event stacked at `index` within a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellPlacement<'a> {
    pub row: u32,
    pub column: u32,
    pub index: usize,
    pub event: &'a Event,
}

impl CellPlacement<'_> {
    pub fn cell(&self) -> CellCoord {
        CellCoord::new(self.row, self.column)
    }
}

/// Group events by cell and number them `0, 1, …` in `(start, end)` order.
///
/// Placements come out ordered by `(row, column, index)`.
pub fn stack_cells<'a, F>(events: &[&'a Event], cell_of: F) -> Vec<CellPlacement<'a>>
where
    F: Fn(&Event) -> CellCoord,
{
    stack_keyed(events.iter().map(|&event| (cell_of(event), event)))
}

/// [`stack_cells`] for events whose cells are already known.
pub fn stack_keyed<'a, I>(keyed: I) -> Vec<CellPlacement<'a>>
where
    I: IntoIterator<Item = (CellCoord, &'a Event)>,
{
    let mut cells: BTreeMap<CellCoord, Vec<&'a Event>> = BTreeMap::new();
    for (cell, event) in keyed {
        cells.entry(cell).or_default().push(event);
    }

    let mut placements = Vec::new();
    for (cell, mut stack) in cells {
        stack.sort_by(|a, b| a.chronological_cmp(b));
        placements.extend(stack.into_iter().enumerate().map(|(index, event)| CellPlacement {
            row: cell.row,
            column: cell.column,
            index,
            event,
        }));
    }
    placements
}

/// Deepest stack per row, for rows `0..row_count`.
pub fn max_stack_per_row(placements: &[CellPlacement<'_>], row_count: usize) -> Vec<usize> {
    let mut depths = vec![0; row_count];
    for p in placements {
        if let Some(depth) = depths.get_mut(p.row as usize) {
            *depth = (*depth).max(p.index + 1);
        }
    }
    depths
}
