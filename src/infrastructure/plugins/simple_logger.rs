use crate::domain::RangeChange;
use crate::infrastructure::ChangeHook;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends one line per finalized range to a log file
pub struct ChangeLogHook {
    log_path: PathBuf,
}

impl ChangeLogHook {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }
}

impl ChangeHook for ChangeLogHook {
    fn on_range_changed(&self, change: &RangeChange) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        writeln!(
            file,
            "[{}] Range {} to {} - Weekends: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            change.range[0],
            change.range[1],
            if change.weekends.is_empty() {
                "none".to_string()
            } else {
                change.weekends.join(", ")
            }
        )?;

        Ok(())
    }

    fn name(&self) -> &str {
        "Change Log"
    }
}
