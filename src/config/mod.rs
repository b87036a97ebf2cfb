use crate::core::calendar::WeekStart;
use crate::core::window::RecurrenceWindow;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Relationship start: September 3, 2025, 12:05 PM Vietnam time.
pub const DEFAULT_START_INSTANT: &str = "2025-09-03T12:05:00+07:00";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_start_instant")]
    pub start_instant: String,
    #[serde(default = "default_years_back")]
    pub recurrence_years_back: u32,
    #[serde(default = "default_years_forward")]
    pub recurrence_years_forward: u32,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub week_starts_on: WeekStart,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_start_instant() -> String {
    DEFAULT_START_INSTANT.to_string()
}
fn default_years_back() -> u32 {
    20
}
fn default_years_forward() -> u32 {
    1
}
fn default_page_size() -> usize {
    12
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            start_instant: default_start_instant(),
            recurrence_years_back: default_years_back(),
            recurrence_years_forward: default_years_forward(),
            page_size: default_page_size(),
            week_starts_on: WeekStart::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtogether")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtogether")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtogether.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtogether.sqlite")
    }

    /// `--db` values: absolute paths are kept, bare names live in the config dir.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        if Path::new(name).is_absolute() {
            PathBuf::from(name)
        } else {
            Self::config_dir().join(name)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The configured relationship start as an instant.
    pub fn start(&self) -> AppResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.start_instant.trim())
            .map_err(|_| AppError::InvalidInstant(self.start_instant.clone()))
    }

    pub fn recurrence_window(&self) -> RecurrenceWindow {
        RecurrenceWindow::new(self.recurrence_years_back, self.recurrence_years_forward)
    }

    /// Prepare the config dir, the database location and (outside test
    /// runs) the config file. An existing config keeps its other values;
    /// only `database` is rewritten. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::load()?
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(db_path)
    }
}
