//! Month grid backing the calendar date picker.
//!
//! Weeks start on Monday. Cells before the first and after the last day of
//! the month are `None`.

use chrono::{Datelike, Months, NaiveDate};

/// One month laid out as rows of seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `day`.
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        let first = day.with_day(1).unwrap_or(day);
        let next_first = first.checked_add_months(Months::new(1));

        let mut weeks = Vec::with_capacity(6);
        let mut week: [Option<NaiveDate>; 7] = [None; 7];
        let mut column = first.weekday().num_days_from_monday() as usize;

        for current in first.iter_days() {
            if next_first.is_some_and(|next| current >= next) {
                break;
            }
            week[column] = Some(current);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self { first, weeks }
    }

    /// Rows of the grid, Monday first.
    #[must_use]
    pub fn weeks(&self) -> &[[Option<NaiveDate>; 7]] {
        &self.weeks
    }

    /// Heading such as `June 2024`.
    #[must_use]
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    #[must_use]
    pub fn previous_month(&self) -> Option<NaiveDate> {
        self.first.checked_sub_months(Months::new(1))
    }

    #[must_use]
    pub fn next_month(&self) -> Option<NaiveDate> {
        self.first.checked_add_months(Months::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_place_first_day_under_its_weekday() {
        // 1 June 2024 is a Saturday.
        let grid = MonthGrid::containing(day(2024, 6, 15));
        let first_week = grid.weeks()[0];
        assert_eq!(first_week[..5], [None; 5]);
        assert_eq!(first_week[5], Some(day(2024, 6, 1)));
        assert_eq!(first_week[6], Some(day(2024, 6, 2)));
    }

    #[test]
    fn should_contain_every_day_of_the_month_once() {
        let grid = MonthGrid::containing(day(2024, 2, 10));
        let days: Vec<NaiveDate> = grid.weeks().iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&day(2024, 2, 1)));
        assert_eq!(days.last(), Some(&day(2024, 2, 29)));
    }

    #[test]
    fn should_not_emit_trailing_empty_week() {
        // February 2021 starts on Monday and has exactly four weeks.
        let grid = MonthGrid::containing(day(2021, 2, 1));
        assert_eq!(grid.weeks().len(), 4);
    }

    #[test]
    fn should_navigate_across_year_boundary() {
        let grid = MonthGrid::containing(day(2024, 12, 31));
        assert_eq!(grid.next_month(), Some(day(2025, 1, 1)));
        assert_eq!(grid.previous_month(), Some(day(2024, 11, 1)));
    }

    #[test]
    fn should_title_with_month_name_and_year() {
        let grid = MonthGrid::containing(day(2024, 6, 15));
        assert_eq!(grid.title(), "June 2024");
    }
}
