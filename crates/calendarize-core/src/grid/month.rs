//! Month grid geometry: day-of-month ↔ (row, column) cells.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::Serialize;

use super::week::{week_span, weekday_offset};
use crate::packing::CellCoord;

/// Number of days in a month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = first.and_then(|d| d.checked_add_months(Months::new(1)));
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Rows of a month grid always advance by a full week.
const DAYS_PER_WEEK: u32 = 7;

/// Calendar cells of one month laid out in weeks.
///
/// Rows are weeks beginning on the configured week start, columns are
/// positions within the week. When the configured week is partial
/// (say Mon..Fri) the remaining weekdays have no column and their days no
/// cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days_in_month: u32,
    starting_offset: u32,
    days_per_week: u32,
    row_count: u32,
    week_start: Weekday,
    week_end: Weekday,
}

impl MonthGrid {
    /// Grid of the month containing `reference`.
    pub fn containing(reference: NaiveDate, week_start: Weekday, week_end: Weekday) -> Self {
        let year = reference.year();
        let month = reference.month();
        let days = days_in_month(year, month);
        let first_weekday = reference.with_day(1).unwrap_or(reference).weekday();
        let starting_offset = weekday_offset(first_weekday, week_start);
        let days_per_week = (week_span(week_start, week_end) + 1).min(7);
        let row_count = (days + starting_offset).div_ceil(DAYS_PER_WEEK);
        Self {
            year,
            month,
            days_in_month: days,
            starting_offset,
            days_per_week,
            row_count,
            week_start,
            week_end,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Position of day 1 within the configured week.
    pub fn starting_offset(&self) -> u32 {
        self.starting_offset
    }

    pub fn days_per_week(&self) -> u32 {
        self.days_per_week
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Cell of a day of the month; `None` outside `1..=days_in_month` and
    /// for days on weekdays without a column.
    pub fn day_to_cell(&self, day: u32) -> Option<CellCoord> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let base = day + self.starting_offset - 1;
        let cell = CellCoord::new(base / DAYS_PER_WEEK, base % DAYS_PER_WEEK);
        (cell.column < self.days_per_week).then_some(cell)
    }

    /// Day of the month shown in a cell; `None` for leading and trailing
    /// cells and for coordinates outside the grid.
    pub fn cell_to_day(&self, row: u32, column: u32) -> Option<u32> {
        if column >= self.days_per_week || row >= self.row_count {
            return None;
        }
        let base = row * DAYS_PER_WEEK + column;
        if base < self.starting_offset {
            return None;
        }
        let day = base - self.starting_offset + 1;
        (day <= self.days_in_month).then_some(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Weekdays heading each column.
    pub fn weekdays(&self) -> Vec<Weekday> {
        std::iter::successors(Some(self.week_start), |d| Some(d.succ()))
            .take(self.days_per_week as usize)
            .collect()
    }

    /// Whether events on `weekday` are shown.
    pub fn includes_weekday(&self, weekday: Weekday) -> bool {
        weekday_offset(weekday, self.week_start) < self.days_per_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_thirty_day_month_starting_thursday() {
        // June 2023 starts on a Thursday
        let grid = MonthGrid::containing(date(2023, 6, 15), Weekday::Mon, Weekday::Sun);
        assert_eq!(grid.days_in_month(), 30);
        assert_eq!(grid.starting_offset(), 3);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.cell_to_day(0, 0), None);
        assert_eq!(grid.cell_to_day(0, 2), None);
        assert_eq!(grid.cell_to_day(0, 3), Some(1));
        assert_eq!(grid.cell_to_day(4, 4), Some(30));
        assert_eq!(grid.cell_to_day(4, 5), None);
        assert_eq!(grid.day_to_cell(1), Some(CellCoord::new(0, 3)));
        assert_eq!(grid.day_to_cell(30), Some(CellCoord::new(4, 4)));
    }

    #[test]
    fn test_sunday_start_shifts_offset() {
        let grid = MonthGrid::containing(date(2023, 6, 1), Weekday::Sun, Weekday::Sat);
        assert_eq!(grid.starting_offset(), 4);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.weekdays()[0], Weekday::Sun);
        assert_eq!(grid.weekdays()[6], Weekday::Sat);
    }

    #[test]
    fn test_february_fitting_four_rows() {
        // February 2021 starts on a Monday and has 28 days
        let grid = MonthGrid::containing(date(2021, 2, 10), Weekday::Mon, Weekday::Sun);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.cell_to_day(0, 0), Some(1));
        assert_eq!(grid.cell_to_day(3, 6), Some(28));
    }

    #[test]
    fn test_six_row_month() {
        // September 2024 starts on a Sunday
        let grid = MonthGrid::containing(date(2024, 9, 1), Weekday::Mon, Weekday::Sun);
        assert_eq!(grid.row_count(), 6);
        assert_eq!(grid.day_to_cell(1), Some(CellCoord::new(0, 6)));
        assert_eq!(grid.day_to_cell(30), Some(CellCoord::new(5, 0)));
    }

    #[test]
    fn test_day_to_cell_out_of_range() {
        let grid = MonthGrid::containing(date(2024, 2, 1), Weekday::Mon, Weekday::Sun);
        assert_eq!(grid.day_to_cell(0), None);
        assert_eq!(grid.day_to_cell(30), None);
        assert!(grid.day_to_cell(29).is_some());
    }

    #[test]
    fn test_partial_week_weekdays() {
        let grid = MonthGrid::containing(date(2024, 3, 1), Weekday::Mon, Weekday::Fri);
        assert_eq!(grid.days_per_week(), 5);
        assert_eq!(
            grid.weekdays(),
            vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        );
        assert!(grid.includes_weekday(Weekday::Fri));
        assert!(!grid.includes_weekday(Weekday::Sat));
        assert!(!grid.includes_weekday(Weekday::Sun));
        assert_eq!(grid.row_count(), 5);
        // Friday the 1st, then Monday the 4th opens the second row
        assert_eq!(grid.day_to_cell(1), Some(CellCoord::new(0, 4)));
        assert_eq!(grid.day_to_cell(2), None);
        assert_eq!(grid.day_to_cell(4), Some(CellCoord::new(1, 0)));
        assert_eq!(grid.cell_to_day(1, 0), Some(4));
        assert_eq!(grid.cell_to_day(0, 5), None);
    }

    #[test]
    fn test_round_trip_over_all_cells() {
        for (ws, we) in [
            (Weekday::Mon, Weekday::Sun),
            (Weekday::Sun, Weekday::Sat),
            (Weekday::Wed, Weekday::Tue),
            (Weekday::Mon, Weekday::Fri),
        ] {
            let grid = MonthGrid::containing(date(2024, 2, 14), ws, we);
            for row in 0..grid.row_count() {
                for col in 0..grid.days_per_week() {
                    if let Some(day) = grid.cell_to_day(row, col) {
                        assert_eq!(grid.day_to_cell(day), Some(CellCoord::new(row, col)));
                    }
                }
            }
        }
    }
}
