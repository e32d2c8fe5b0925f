//! Calendar geometry: time-of-day rows, week windows and month grids.

mod month;
mod time_grid;
mod week;

pub use month::{days_in_month, MonthGrid};
pub use time_grid::{GridRow, RowSpan, TimeGrid};
pub use week::{week_span, weekday_offset, WeekWindow};
