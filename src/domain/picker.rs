use crate::domain::{
    CalendarCursor, CalendarDay, ClickOutcome, DateRange, PredefinedRange, RangeChange,
    RangeSelection, finalize,
};
use crate::infrastructure::HookRegistry;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// A single picker widget instance.
///
/// Owns the selection, the displayed month, the configured shortcut ranges
/// and the hooks that receive every finalized range. All inbound events go
/// through its methods.
pub struct DateRangePicker {
    selection: RangeSelection,
    cursor: CalendarCursor,
    predefined_ranges: Vec<PredefinedRange>,
    hooks: HookRegistry,
    last_change: Option<RangeChange>,
}

impl DateRangePicker {
    pub fn new(
        cursor: CalendarCursor,
        predefined_ranges: Vec<PredefinedRange>,
        hooks: HookRegistry,
    ) -> Self {
        Self {
            selection: RangeSelection::new(),
            cursor,
            predefined_ranges,
            hooks,
            last_change: None,
        }
    }

    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn predefined_ranges(&self) -> &[PredefinedRange] {
        &self.predefined_ranges
    }

    pub fn find_predefined_range(&self, label: &str) -> Option<&PredefinedRange> {
        self.predefined_ranges
            .iter()
            .find(|preset| preset.label.eq_ignore_ascii_case(label))
    }

    /// Most recent finalized change, if any
    pub fn last_change(&self) -> Option<&RangeChange> {
        self.last_change.as_ref()
    }

    pub fn on_date_clicked(&mut self, date: NaiveDate) -> Result<ClickOutcome> {
        let outcome = self.selection.on_date_clicked(date);
        log::debug!("Click on {} -> {:?}", date, outcome);

        if let ClickOutcome::Closed(range) = outcome {
            self.emit(range)?;
        }

        Ok(outcome)
    }

    /// Apply a shortcut range directly, skipping the click transition
    pub fn on_predefined_range_chosen(
        &mut self,
        label: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeChange> {
        log::debug!("Predefined range '{}' chosen", label);
        let range = DateRange::new(start, end);
        self.selection.set_range(range);
        self.emit(range)
    }

    /// Apply the configured shortcut at `index`
    pub fn choose_predefined_range(&mut self, index: usize) -> Result<RangeChange> {
        let preset = self
            .predefined_ranges
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow!("No predefined range at position {}", index + 1))?;

        self.on_predefined_range_chosen(&preset.label, preset.start(), preset.end())
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    pub fn previous_year(&mut self) {
        self.cursor.previous_year();
    }

    pub fn next_year(&mut self) {
        self.cursor.next_year();
    }

    pub fn previous_month(&mut self) {
        self.cursor.previous_month();
    }

    pub fn next_month(&mut self) {
        self.cursor.next_month();
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.is_selected(date)
    }

    pub fn month_grid(&self) -> Vec<CalendarDay> {
        self.cursor.month_grid(&self.selection)
    }

    pub fn weeks(&self) -> Vec<Vec<CalendarDay>> {
        self.cursor.weeks(&self.selection)
    }

    fn emit(&mut self, range: DateRange) -> Result<RangeChange> {
        let change = finalize(range)?;
        log::info!("Selected date range: {}", change);

        self.hooks.execute_change_hooks(&change);
        self.last_change = Some(change.clone());
        Ok(change)
    }
}
