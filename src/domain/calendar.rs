use crate::domain::RangeSelection;
use crate::domain::date_format::{day_of_week, days_in_month, is_weekend};
use chrono::{Datelike, Local, NaiveDate};

/// The month currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    /// 1-12
    month: u32,
}

/// One day cell of a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_week: u32,
    pub selectable: bool,
    pub selected: bool,
}

impl CalendarCursor {
    /// Month cursor for `month` (1-12), clamped into range
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn today() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn previous_year(&mut self) {
        self.year -= 1;
    }

    pub fn next_year(&mut self) {
        self.year += 1;
    }

    /// Wraps January to December of the same year; year moves separately
    pub fn previous_month(&mut self) {
        self.month = if self.month == 1 { 12 } else { self.month - 1 };
    }

    /// Wraps December to January of the same year; year moves separately
    pub fn next_month(&mut self) {
        self.month = if self.month == 12 { 1 } else { self.month + 1 };
    }

    /// Every day of the displayed month with its selection state
    pub fn month_grid(&self, selection: &RangeSelection) -> Vec<CalendarDay> {
        (1..=self.days_in_month())
            .filter_map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
            .map(|date| CalendarDay {
                date,
                day_of_week: day_of_week(date),
                selectable: !is_weekend(date),
                selected: selection.is_selected(date),
            })
            .collect()
    }

    /// Month grid split into display rows.
    ///
    /// A row ends after each Friday and after the last day of the month, so
    /// weekend days open the following row.
    pub fn weeks(&self, selection: &RangeSelection) -> Vec<Vec<CalendarDay>> {
        let mut weeks = Vec::new();
        let mut current = Vec::new();

        for day in self.month_grid(selection) {
            let is_friday = day.day_of_week == 5;
            current.push(day);
            if is_friday {
                weeks.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            weeks.push(current);
        }

        weeks
    }
}
