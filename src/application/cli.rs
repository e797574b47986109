use crate::application::{Config, PickerApp, TuiRenderer};
use crate::domain::{CalendarCursor, ClickOutcome, RangeChange, is_weekend, parse_date};
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weekday-picker")]
#[command(about = "Pick a weekday date range and list the weekends inside it")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to $WEEKDAY_PICKER_DIR/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive month view
    Pick {
        /// Month to open (YYYY-MM format, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Select START then END and print the resulting range
    Range {
        /// First clicked date (YYYY-MM-DD)
        start: String,
        /// Second clicked date (YYYY-MM-DD)
        end: String,
        /// Print the change as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a configured predefined range by label
    Preset {
        label: String,
        /// Print the change as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured predefined ranges
    Presets,
    /// Print a month grid
    Month {
        /// Month to print (YYYY-MM format, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(value: &str) -> Result<CalendarCursor> {
    let first = parse_date(&format!("{}-01", value))
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", value))?;
    Ok(CalendarCursor::new(first.year(), first.month()))
}

fn cursor_for(month: Option<&str>) -> Result<CalendarCursor> {
    match month {
        Some(value) => parse_month(value),
        None => Ok(CalendarCursor::today()),
    }
}

fn print_change(out: &mut dyn Write, change: &RangeChange, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(change)?)?;
    } else {
        writeln!(out, "{}", TuiRenderer::plain().render_change(change))?;
    }
    Ok(())
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::from_env()?,
        };

        cli.execute(config, &mut std::io::stdout())
    }

    pub fn execute(self, config: Config, out: &mut dyn Write) -> Result<()> {
        match self.command {
            Some(Commands::Pick { month }) => {
                let cursor = cursor_for(month.as_deref())?;
                Self::pick(config, cursor, out)?;
            }
            None => {
                // Default: start the month view on the current month
                Self::pick(config, CalendarCursor::today(), out)?;
            }
            Some(Commands::Range { start, end, json }) => {
                let start = parse_date(&start)?;
                let end = parse_date(&end)?;
                for date in [start, end] {
                    if is_weekend(date) {
                        return Err(anyhow::anyhow!(
                            "Weekends cannot be selected: {} is a {}",
                            date,
                            date.format("%A")
                        ));
                    }
                }

                let mut app = PickerApp::with_change_log(config, CalendarCursor::containing(start));

                app.picker_mut().on_date_clicked(start)?;
                match app.picker_mut().on_date_clicked(end)? {
                    ClickOutcome::Closed(_) => {
                        if let Some(change) = app.picker().last_change() {
                            print_change(out, change, json)?;
                        }
                    }
                    _ => {
                        return Err(anyhow::anyhow!(
                            "End date {} is before start date {}; selection restarted",
                            end,
                            start
                        ));
                    }
                }
            }
            Some(Commands::Preset { label, json }) => {
                let mut app = PickerApp::with_change_log(config, CalendarCursor::today());
                let preset = app
                    .picker()
                    .find_predefined_range(&label)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("No predefined range labelled '{}'", label))?;

                let change = app.picker_mut().on_predefined_range_chosen(
                    &preset.label,
                    preset.start(),
                    preset.end(),
                )?;
                print_change(out, &change, json)?;
            }
            Some(Commands::Presets) => {
                let app = PickerApp::without_plugins(config, CalendarCursor::today());
                writeln!(out, "{}", TuiRenderer::plain().render_presets(app.picker()))?;
            }
            Some(Commands::Month { month }) => {
                let cursor = cursor_for(month.as_deref())?;
                let app = PickerApp::without_plugins(config, cursor);
                let renderer = TuiRenderer::new(app.theme());
                write!(out, "{}", renderer.render_month(app.picker()))?;
            }
        }

        Ok(())
    }

    fn pick(config: Config, cursor: CalendarCursor, out: &mut dyn Write) -> Result<()> {
        let mut app = PickerApp::new(config, cursor);
        let confirmed = app.run_tui()?;

        // Echoed changes are held back until the terminal is restored
        app.flush_reports(out)?;
        if let Some(change) = confirmed {
            print_change(out, &change, false)?;
        }

        Ok(())
    }
}
