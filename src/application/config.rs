use crate::domain::PredefinedRange;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub struct Config {
    pub picker_dir: PathBuf,
    pub config_path: PathBuf,
    pub change_log_path: PathBuf,
    pub settings: Settings,
}

/// Contents of `config.json`; every field is optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub change_log: bool,
    pub echo_changes: bool,
    pub predefined_ranges: Vec<PredefinedRange>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            change_log: true,
            echo_changes: false,
            predefined_ranges: default_predefined_ranges(),
        }
    }
}

pub fn default_predefined_ranges() -> Vec<PredefinedRange> {
    let ranges = [
        ("Last 7 Days", (2024, 8, 19), (2024, 8, 25)),
        ("Last 30 Days", (2024, 7, 27), (2024, 8, 25)),
    ];

    ranges
        .into_iter()
        .filter_map(|(label, (sy, sm, sd), (ey, em, ed))| {
            let start = NaiveDate::from_ymd_opt(sy, sm, sd)?;
            let end = NaiveDate::from_ymd_opt(ey, em, ed)?;
            Some(PredefinedRange::new(label, start, end))
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let picker_dir = std::env::var("WEEKDAY_PICKER_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("weekday-picker")
            });

        let config_path = picker_dir.join("config.json");
        Self::load(picker_dir, config_path)
    }

    /// Load settings from an explicit file; its directory also holds `changes.log`
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let picker_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::load(picker_dir, config_path.to_path_buf())
    }

    fn load(picker_dir: PathBuf, config_path: PathBuf) -> Result<Self> {
        let settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let settings: Settings = serde_json::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
            log::info!("Loaded configuration from {}", config_path.display());
            settings
        } else {
            log::debug!(
                "No configuration at {}, using defaults",
                config_path.display()
            );
            Settings::default()
        };

        for preset in &settings.predefined_ranges {
            if !preset.is_ordered() {
                log::warn!(
                    "Predefined range '{}' ends before it starts; it will be applied as given",
                    preset.label
                );
            }
        }

        let change_log_path = picker_dir.join("changes.log");

        Ok(Self {
            picker_dir,
            config_path,
            change_log_path,
            settings,
        })
    }
}
