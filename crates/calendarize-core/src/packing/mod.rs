//! Coordinate assignment for events sharing a row or a cell.

mod interval;
mod stack;

pub use interval::{column_count, pack_columns, ColumnPlacement};
pub use stack::{max_stack_per_row, stack_cells, stack_keyed, CellCoord, CellPlacement};
