use crate::domain::DateRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A labelled shortcut range, e.g. "Last 7 Days".
///
/// Serialized as `{"label": "...", "range": ["YYYY-MM-DD", "YYYY-MM-DD"]}`.
/// The pair is taken as given; an end before the start is not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRange {
    pub label: String,
    pub range: [NaiveDate; 2],
}

impl PredefinedRange {
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.into(),
            range: [start, end],
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.range[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.range[1]
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start(), self.end())
    }

    pub fn is_ordered(&self) -> bool {
        self.date_range().is_ordered()
    }
}
