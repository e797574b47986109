use crate::domain::DateRange;
use crate::domain::date_format::{format_date, is_weekend};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days added to both ends of a raw selection before it is reported
pub const RANGE_SHIFT_DAYS: u64 = 1;

/// A finalized selection as delivered to change hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    /// Adjusted `[start, end]` in canonical form
    pub range: [String; 2],
    /// Saturdays and Sundays inside the adjusted span, ascending
    pub weekends: Vec<String>,
}

impl fmt::Display for RangeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {} ({} weekend days)",
            self.range[0],
            self.range[1],
            self.weekends.len()
        )
    }
}

/// All weekend days of `range`, ascending
pub fn weekends_in(range: &DateRange) -> Vec<NaiveDate> {
    range.days().filter(|&date| is_weekend(date)).collect()
}

/// Shift a raw selection by [`RANGE_SHIFT_DAYS`] and enumerate its weekends
pub fn finalize(selection: DateRange) -> Result<RangeChange> {
    let adjusted = selection.shifted(RANGE_SHIFT_DAYS)?;
    let weekends = weekends_in(&adjusted).into_iter().map(format_date).collect();

    log::debug!("Finalized {} as {}", selection, adjusted);

    Ok(RangeChange {
        range: adjusted.to_strings(),
        weekends,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn monday_to_sunday_selection() {
        // Mon Aug 19 through Sun Aug 25, 2024
        let change = finalize(DateRange::new(date(2024, 8, 19), date(2024, 8, 25))).unwrap();
        assert_eq!(change.range, ["2024-08-20".to_string(), "2024-08-26".to_string()]);
        assert_eq!(change.weekends, strings(&["2024-08-24", "2024-08-25"]));
    }

    #[test]
    fn thirty_day_selection() {
        let change = finalize(DateRange::new(date(2024, 7, 27), date(2024, 8, 25))).unwrap();
        assert_eq!(change.range, ["2024-07-28".to_string(), "2024-08-26".to_string()]);
        assert_eq!(
            change.weekends,
            strings(&[
                "2024-07-28",
                "2024-08-03",
                "2024-08-04",
                "2024-08-10",
                "2024-08-11",
                "2024-08-17",
                "2024-08-18",
                "2024-08-24",
                "2024-08-25",
            ])
        );
    }

    #[test]
    fn single_tuesday_becomes_wednesday() {
        let change = finalize(DateRange::day(date(2024, 8, 20))).unwrap();
        assert_eq!(change.range, ["2024-08-21".to_string(), "2024-08-21".to_string()]);
        assert!(change.weekends.is_empty());
    }

    #[test]
    fn single_friday_becomes_saturday() {
        let change = finalize(DateRange::day(date(2024, 8, 23))).unwrap();
        assert_eq!(change.range, ["2024-08-24".to_string(), "2024-08-24".to_string()]);
        assert_eq!(change.weekends, strings(&["2024-08-24"]));
    }

    #[test]
    fn reversed_selection_passes_through() {
        let change = finalize(DateRange::new(date(2024, 8, 25), date(2024, 8, 19))).unwrap();
        assert_eq!(change.range, ["2024-08-26".to_string(), "2024-08-20".to_string()]);
        assert!(change.weekends.is_empty());
    }

    #[test]
    fn weekends_in_skips_weekdays() {
        // Mon Jan 13 through Sun Jan 19, 2025
        let weekends = weekends_in(&DateRange::new(date(2025, 1, 13), date(2025, 1, 19)));
        assert_eq!(weekends, vec![date(2025, 1, 18), date(2025, 1, 19)]);
    }

    #[test]
    fn serializes_like_the_callback_payload() {
        let change = finalize(DateRange::new(date(2024, 8, 19), date(2024, 8, 25))).unwrap();
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(
            json,
            r#"{"range":["2024-08-20","2024-08-26"],"weekends":["2024-08-24","2024-08-25"]}"#
        );
    }
}
