use crate::application::{Config, MonthView, MonthViewResult, Theme};
use crate::domain::{CalendarCursor, DateRangePicker, RangeChange};
use crate::infrastructure::{ChangeHook, ChangeLogHook, ConsoleReporterHook, HookRegistry};
use std::io::Write;

pub struct PickerApp {
    picker: DateRangePicker,
    config: Config,
    reporter: Option<ConsoleReporterHook>,
}

impl PickerApp {
    pub fn new(config: Config, cursor: CalendarCursor) -> Self {
        Self::with_default_plugins(config, cursor)
    }

    pub fn with_default_plugins(config: Config, cursor: CalendarCursor) -> Self {
        // Set up hook registry with default plugins
        let mut hook_registry = Self::change_log_registry(&config);

        let reporter = ConsoleReporterHook::new();
        let reporter = if config.settings.echo_changes || reporter.enabled_by_default() {
            hook_registry.register(reporter.clone());
            Some(reporter)
        } else {
            None
        };

        let mut app = Self::with_hooks(config, cursor, hook_registry);
        app.reporter = reporter;
        app
    }

    /// Only the change log, for commands that print the change themselves
    pub fn with_change_log(config: Config, cursor: CalendarCursor) -> Self {
        let hook_registry = Self::change_log_registry(&config);
        Self::with_hooks(config, cursor, hook_registry)
    }

    pub fn without_plugins(config: Config, cursor: CalendarCursor) -> Self {
        Self::with_hooks(config, cursor, HookRegistry::new())
    }

    pub fn with_hooks(config: Config, cursor: CalendarCursor, hooks: HookRegistry) -> Self {
        let picker = DateRangePicker::new(
            cursor,
            config.settings.predefined_ranges.clone(),
            hooks,
        );

        Self {
            picker,
            config,
            reporter: None,
        }
    }

    fn change_log_registry(config: &Config) -> HookRegistry {
        let mut hook_registry = HookRegistry::new();
        if config.settings.change_log {
            hook_registry.register(ChangeLogHook::new(config.change_log_path.clone()));
        }
        hook_registry
    }

    pub fn picker(&self) -> &DateRangePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DateRangePicker {
        &mut self.picker
    }

    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.config.settings.theme)
    }

    /// Print changes queued by the console reporter, if it is enabled
    pub fn flush_reports(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        if let Some(reporter) = &self.reporter {
            reporter.flush_to(out)?;
        }
        Ok(())
    }

    /// Run the interactive month view until the user quits
    pub fn run_tui(&mut self) -> anyhow::Result<Option<RangeChange>> {
        let theme = self.theme();
        let result = MonthView::new(&mut self.picker, theme).run()?;

        match result {
            MonthViewResult::Confirmed(change) => Ok(Some(change)),
            MonthViewResult::Exited => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::test_harness::{RecordingHook, date};
    use tempfile::TempDir;

    #[test]
    fn default_plugins_write_change_log() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
        let log_path = config.change_log_path.clone();

        let mut app = PickerApp::new(config, CalendarCursor::new(2024, 8));
        app.picker_mut().on_date_clicked(date(2024, 8, 19)).unwrap();
        app.picker_mut().on_date_clicked(date(2024, 8, 21)).unwrap();

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Range 2024-08-20 to 2024-08-22"));
    }

    #[test]
    fn echoed_changes_wait_for_flush() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
        config.settings.echo_changes = true;
        config.settings.change_log = false;

        let mut app = PickerApp::new(config, CalendarCursor::new(2024, 8));
        app.picker_mut().on_date_clicked(date(2024, 8, 19)).unwrap();
        app.picker_mut().on_date_clicked(date(2024, 8, 23)).unwrap();

        let mut out = Vec::new();
        app.flush_reports(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Selected Date Range: [2024-08-20, 2024-08-24]\nWeekends within the range: [2024-08-24]\n"
        );

        let mut again = Vec::new();
        app.flush_reports(&mut again).unwrap();
        assert!(again.is_empty());
        assert!(!temp_dir.path().join("changes.log").exists());
    }

    #[test]
    fn reporter_is_off_unless_echo_is_set() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();

        let mut app = PickerApp::new(config, CalendarCursor::new(2024, 8));
        app.picker_mut().on_date_clicked(date(2024, 8, 19)).unwrap();
        app.picker_mut().on_date_clicked(date(2024, 8, 23)).unwrap();

        let mut out = Vec::new();
        app.flush_reports(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn predefined_ranges_come_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();

        let recorder = RecordingHook::new();
        let mut hooks = HookRegistry::new();
        hooks.register(recorder.clone());
        let mut app = PickerApp::with_hooks(config, CalendarCursor::new(2024, 8), hooks);

        assert_eq!(app.picker().predefined_ranges().len(), 2);
        app.picker_mut().choose_predefined_range(0).unwrap();
        assert_eq!(recorder.count(), 1);
        assert!(!temp_dir.path().join("changes.log").exists());
    }
}
