use crate::domain::RangeChange;
use crate::infrastructure::ChangeHook;
use anyhow::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Collects finalized ranges and prints them on demand.
///
/// Reports are held until [`ConsoleReporterHook::flush_to`] is called, so
/// nothing reaches stdout while the month view owns the terminal. Clones
/// share the same queue.
#[derive(Clone, Default)]
pub struct ConsoleReporterHook {
    pending: Arc<Mutex<Vec<RangeChange>>>,
}

impl ConsoleReporterHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every queued report to `out` and clear the queue
    pub fn flush_to(&self, out: &mut dyn Write) -> Result<usize> {
        let pending: Vec<RangeChange> = self
            .pending
            .lock()
            .map_err(|_| anyhow::anyhow!("console reporter poisoned"))?
            .drain(..)
            .collect();

        for change in &pending {
            writeln!(out, "{}", format_report(change))?;
        }
        out.flush()?;

        Ok(pending.len())
    }
}

/// Two-line report used by the console reporter
pub fn format_report(change: &RangeChange) -> String {
    format!(
        "Selected Date Range: [{}, {}]\nWeekends within the range: [{}]",
        change.range[0],
        change.range[1],
        change.weekends.join(", ")
    )
}

impl ChangeHook for ConsoleReporterHook {
    fn on_range_changed(&self, change: &RangeChange) -> Result<()> {
        self.pending
            .lock()
            .map_err(|_| anyhow::anyhow!("console reporter poisoned"))?
            .push(change.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "Console Reporter"
    }

    fn enabled_by_default(&self) -> bool {
        false
    }
}
