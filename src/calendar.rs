//! Calendar grid layout.
//!
//! One cell per day of the target year, filled top to bottom in 7-row
//! column blocks. Every month starts a fresh block at row 0, so a
//! month occupies `ceil(days / 7)` columns and columns are not aligned
//! to real weekdays.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::github::ContributionDay;

/// Rows per column block. Visually a "week", though not weekday-aligned.
pub const ROWS: u32 = 7;

/// Date -> contribution count, built once before the render pass.
/// Dates absent from the fetched data count as zero.
pub struct ContributionIndex {
    counts: HashMap<NaiveDate, u32>,
}

impl ContributionIndex {
    pub fn new(days: &[ContributionDay]) -> Self {
        let counts = days.iter().map(|day| (day.date, day.count)).collect();
        ContributionIndex { counts }
    }

    pub fn count_for(&self, date: NaiveDate) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }
}

/// One grid cell: a single day of the target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// 0-based month, indexes the color palette.
    pub month: u32,
    pub column: u32,
    pub row: u32,
}

/// Number of days in a month, leap-year exact for any valid year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1);

    match (first, next_first) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 0,
    }
}

/// Lay out every day of `year` as grid cells, January first.
pub fn layout_year(year: i32) -> Vec<CalendarCell> {
    let mut cells = Vec::with_capacity(366);
    let mut month_base = 0;

    for month in 1..=12 {
        let days = days_in_month(year, month);
        for day in 1..=days {
            // Every (year, month, day) triple here exists by construction.
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                cells.push(CalendarCell {
                    date,
                    month: month - 1,
                    column: month_base + (day - 1) / ROWS,
                    row: (day - 1) % ROWS,
                });
            }
        }
        month_base += days.div_ceil(ROWS);
    }

    cells
}

/// Total number of columns the year's grid occupies.
pub fn column_count(year: i32) -> u32 {
    (1..=12).map(|month| days_in_month(year, month).div_ceil(ROWS)).sum()
}
