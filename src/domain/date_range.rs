use crate::domain::date_format::format_date;
use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Inclusive span of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether start precedes or equals end
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Every day of the span in ascending order; empty when start > end
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        (0..=(end - start).num_days()).map(move |i| start + chrono::Duration::days(i))
    }

    /// Move both boundaries forward by `days`
    pub fn shifted(&self, days: u64) -> Result<Self> {
        let shift = |date: NaiveDate| {
            date.checked_add_days(Days::new(days))
                .ok_or_else(|| anyhow!("Cannot shift {} by {} days", date, days))
        };

        Ok(Self {
            start: shift(self.start)?,
            end: shift(self.end)?,
        })
    }

    /// Canonical `[start, end]` pair
    pub fn to_strings(&self) -> [String; 2] {
        [format_date(self.start), format_date(self.end)]
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", format_date(self.start), format_date(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_are_inclusive() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 1));
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
            ]
        );
    }

    #[test]
    fn reversed_range_has_no_days() {
        let range = DateRange::new(date(2024, 8, 25), date(2024, 8, 19));
        assert!(!range.is_ordered());
        assert_eq!(range.days().count(), 0);
    }

    #[test]
    fn shift_crosses_month_and_year() {
        let range = DateRange::new(date(2024, 12, 31), date(2025, 1, 31));
        let shifted = range.shifted(1).unwrap();
        assert_eq!(shifted.start, date(2025, 1, 1));
        assert_eq!(shifted.end, date(2025, 2, 1));
    }

    #[test]
    fn shift_past_max_date_fails() {
        let range = DateRange::day(NaiveDate::MAX);
        assert!(range.shifted(1).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = DateRange::new(date(2024, 8, 19), date(2024, 8, 25));
        assert!(range.contains(date(2024, 8, 19)));
        assert!(range.contains(date(2024, 8, 25)));
        assert!(!range.contains(date(2024, 8, 26)));
    }

    #[test]
    fn renders_canonical_strings() {
        let range = DateRange::new(date(2024, 8, 19), date(2024, 8, 25));
        assert_eq!(range.to_strings(), ["2024-08-19".to_string(), "2024-08-25".to_string()]);
        assert_eq!(range.to_string(), "2024-08-19 .. 2024-08-25");
    }
}
