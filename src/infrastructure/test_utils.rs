/// Test utilities for hook-driven tests
///
/// `RecordingHook` captures every `RangeChange` delivered to it. Clones share
/// the same buffer, so one clone can be registered with a picker while the
/// test keeps the other for assertions.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// use crate::infrastructure::test_utils::test_harness::RecordingHook;
///
/// #[test]
/// fn my_test() {
///     let recorder = RecordingHook::new();
///     let mut picker = test_harness::picker_with(recorder.clone());
///
///     // Click some dates...
///     assert_eq!(recorder.changes().len(), 1);
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::domain::{CalendarCursor, DateRangePicker, PredefinedRange, RangeChange};
    use crate::infrastructure::{ChangeHook, HookRegistry};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    /// Hook that records every change it receives
    #[derive(Clone, Default)]
    pub struct RecordingHook {
        changes: Arc<Mutex<Vec<RangeChange>>>,
    }

    impl RecordingHook {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of all changes received so far
        pub fn changes(&self) -> Vec<RangeChange> {
            self.changes.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub fn count(&self) -> usize {
            self.changes().len()
        }
    }

    impl ChangeHook for RecordingHook {
        fn on_range_changed(&self, change: &RangeChange) -> Result<()> {
            self.changes
                .lock()
                .map_err(|_| anyhow::anyhow!("recorder poisoned"))?
                .push(change.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "Recorder"
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// The two ranges shipped as defaults
    pub fn sample_ranges() -> Vec<PredefinedRange> {
        vec![
            PredefinedRange::new("Last 7 Days", date(2024, 8, 19), date(2024, 8, 25)),
            PredefinedRange::new("Last 30 Days", date(2024, 7, 27), date(2024, 8, 25)),
        ]
    }

    /// Picker on August 2024 with the sample ranges and a single hook
    pub fn picker_with<H: ChangeHook + 'static>(hook: H) -> DateRangePicker {
        let mut hooks = HookRegistry::new();
        hooks.register(hook);
        DateRangePicker::new(CalendarCursor::new(2024, 8), sample_ranges(), hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::domain::RangeChange;
    use crate::infrastructure::ChangeHook;

    #[test]
    fn recorder_clones_share_buffer() {
        let recorder = RecordingHook::new();
        let clone = recorder.clone();

        let change = RangeChange {
            range: ["2024-08-21".to_string(), "2024-08-21".to_string()],
            weekends: Vec::new(),
        };
        clone.on_range_changed(&change).unwrap();

        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.changes()[0], change);
    }
}
