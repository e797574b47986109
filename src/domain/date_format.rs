use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Canonical `YYYY-MM-DD` pattern used for every date that leaves the core
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date in its canonical, lexicographically sortable form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` string
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;

    // chrono accepts unpadded fields ("2024-8-1"), which would break ordering
    if format_date(date) != value {
        return Err(anyhow::anyhow!(
            "Invalid date '{}', expected zero-padded YYYY-MM-DD",
            value
        ));
    }

    Ok(date)
}

/// Day of week with 0 = Sunday through 6 = Saturday
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in `month` (1-12) of `year`
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next_first) {
        (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
        _ => 0,
    }
}
