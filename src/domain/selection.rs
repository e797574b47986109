use crate::domain::DateRange;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    AwaitingStart,
    AwaitingEnd,
}

/// Result of feeding one click into the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A fresh selection began at this date
    Started(NaiveDate),
    /// The click preceded the pending start and replaced it
    Restarted(NaiveDate),
    /// The pending selection closed into a range
    Closed(DateRange),
}

/// Start/end selection driven by date clicks.
///
/// An absent end with a present start means a selection is in progress.
/// Once closed, the next click always starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn mode(&self) -> SelectionMode {
        match (self.start, self.end) {
            (Some(_), None) => SelectionMode::AwaitingEnd,
            _ => SelectionMode::AwaitingStart,
        }
    }

    /// The closed range, if both ends are set
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    pub fn on_date_clicked(&mut self, clicked: NaiveDate) -> ClickOutcome {
        match (self.start, self.end) {
            (Some(start), None) if clicked >= start => {
                self.end = Some(clicked);
                ClickOutcome::Closed(DateRange::new(start, clicked))
            }
            (Some(_), None) => {
                self.start = Some(clicked);
                ClickOutcome::Restarted(clicked)
            }
            _ => {
                self.start = Some(clicked);
                self.end = None;
                ClickOutcome::Started(clicked)
            }
        }
    }

    /// Overwrite both ends without any ordering check
    pub fn set_range(&mut self, range: DateRange) {
        self.start = Some(range.start);
        self.end = Some(range.end);
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Highlight predicate used by views
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match (self.range(), self.start) {
            (Some(range), _) => range.contains(date),
            (None, Some(start)) => date == start,
            (None, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_click_starts_selection() {
        let mut selection = RangeSelection::new();
        assert_eq!(selection.mode(), SelectionMode::AwaitingStart);

        let outcome = selection.on_date_clicked(date(2024, 8, 19));
        assert_eq!(outcome, ClickOutcome::Started(date(2024, 8, 19)));
        assert_eq!(selection.mode(), SelectionMode::AwaitingEnd);
        assert_eq!(selection.range(), None);
    }

    #[test]
    fn later_click_closes_range() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 19));

        let outcome = selection.on_date_clicked(date(2024, 8, 23));
        let expected = DateRange::new(date(2024, 8, 19), date(2024, 8, 23));
        assert_eq!(outcome, ClickOutcome::Closed(expected));
        assert_eq!(selection.range(), Some(expected));
        assert_eq!(selection.mode(), SelectionMode::AwaitingStart);
    }

    #[test]
    fn earlier_click_restarts() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 21));

        let outcome = selection.on_date_clicked(date(2024, 8, 20));
        assert_eq!(outcome, ClickOutcome::Restarted(date(2024, 8, 20)));
        assert_eq!(selection.start(), Some(date(2024, 8, 20)));
        assert_eq!(selection.end(), None);
        assert_eq!(selection.mode(), SelectionMode::AwaitingEnd);
    }

    #[test]
    fn same_date_twice_closes_one_day_range() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 20));

        let outcome = selection.on_date_clicked(date(2024, 8, 20));
        assert_eq!(outcome, ClickOutcome::Closed(DateRange::day(date(2024, 8, 20))));
    }

    #[test]
    fn click_after_close_starts_over() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 19));
        selection.on_date_clicked(date(2024, 8, 23));

        // Even a date after the closed end does not extend the range
        let outcome = selection.on_date_clicked(date(2024, 8, 30));
        assert_eq!(outcome, ClickOutcome::Started(date(2024, 8, 30)));
        assert_eq!(selection.end(), None);
    }

    #[test]
    fn highlight_while_in_progress() {
        let mut selection = RangeSelection::new();
        assert!(!selection.is_selected(date(2024, 8, 19)));

        selection.on_date_clicked(date(2024, 8, 19));
        assert!(selection.is_selected(date(2024, 8, 19)));
        assert!(!selection.is_selected(date(2024, 8, 20)));
    }

    #[test]
    fn highlight_closed_range_inclusive() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 19));
        selection.on_date_clicked(date(2024, 8, 23));

        assert!(!selection.is_selected(date(2024, 8, 18)));
        assert!(selection.is_selected(date(2024, 8, 19)));
        assert!(selection.is_selected(date(2024, 8, 21)));
        assert!(selection.is_selected(date(2024, 8, 23)));
        assert!(!selection.is_selected(date(2024, 8, 24)));
    }

    #[test]
    fn highlight_matches_closed_range_days() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 19));
        selection.on_date_clicked(date(2024, 8, 23));

        let range = selection.range().unwrap();
        let highlighted: Vec<NaiveDate> = (12..=30)
            .map(|day| date(2024, 8, day))
            .filter(|day| selection.is_selected(*day))
            .collect();
        assert_eq!(highlighted, range.days().collect::<Vec<_>>());
    }

    #[test]
    fn set_range_skips_ordering_check() {
        let mut selection = RangeSelection::new();
        selection.set_range(DateRange::new(date(2024, 8, 25), date(2024, 8, 19)));
        assert_eq!(selection.start(), Some(date(2024, 8, 25)));
        assert_eq!(selection.end(), Some(date(2024, 8, 19)));
        assert!(!selection.is_selected(date(2024, 8, 20)));
    }

    #[test]
    fn reset_clears_both_ends() {
        let mut selection = RangeSelection::new();
        selection.on_date_clicked(date(2024, 8, 19));
        selection.reset();
        assert_eq!(selection, RangeSelection::new());
    }
}
