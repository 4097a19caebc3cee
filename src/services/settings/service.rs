use crate::models::settings::{ScheduleCatalog, ScheduleConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "timetable.toml";

/// Loads and saves the timetable configuration.
pub struct SettingsService;

impl SettingsService {
    /// Default config location under the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "rust-timetable")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and built-in defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<ScheduleConfig> {
        if let Some(path) = path {
            return Self::load_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                log::debug!("No timetable config found, using built-in catalog");
                Ok(ScheduleConfig::default())
            }
        }
    }

    /// Load and validate in one step.
    pub fn load_catalog(path: Option<&Path>) -> Result<ScheduleCatalog> {
        Self::load(path)?
            .into_catalog()
            .context("Invalid timetable configuration")
    }

    pub fn load_file(path: &Path) -> Result<ScheduleConfig> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: ScheduleConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        log::info!(
            "Loaded timetable config from {} ({} slots, {} days)",
            path.display(),
            config.time_slots.len(),
            config.days.len()
        );
        Ok(config)
    }

    pub fn save(path: &Path, config: &ScheduleConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}
