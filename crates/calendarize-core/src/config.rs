//! TOML-based layout configuration.
//!
//! Stores the grid preferences shared by every calendar view:
//! - Row unit and the visible time-of-day window
//! - Verbose (every row) or compact (occupied rows only) rendering
//! - The configured week boundaries
//!
//! Configuration is stored at `~/.config/calendarize/config.toml`.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError};

/// Minutes in a day; the upper bound of `day_end`.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Layout configuration as written by users.
///
/// Values are kept loosely typed so that invalid input reaches
/// [`LayoutConfig::validate`] and fails with a [`ConfigError`] instead of a
/// parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Minutes per grid row.
    #[serde(default = "default_unit")]
    pub unit: i64,
    /// First visible minute of the day.
    #[serde(default)]
    pub day_start: i64,
    /// End of the visible window, in minutes (exclusive).
    #[serde(default = "default_day_end")]
    pub day_end: i64,
    #[serde(default = "default_true")]
    pub verbose: bool,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_week_end")]
    pub week_end: String,
    /// Rendering-scope identifier. Generated per layout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn default_unit() -> i64 {
    60
}
fn default_day_end() -> i64 {
    MINUTES_PER_DAY
}
fn default_true() -> bool {
    true
}
fn default_week_start() -> String {
    "monday".into()
}
fn default_week_end() -> String {
    "sunday".into()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            day_start: 0,
            day_end: default_day_end(),
            verbose: true,
            week_start: default_week_start(),
            week_end: default_week_end(),
            id: None,
        }
    }
}

/// Validated, typed layout settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSettings {
    pub unit: u32,
    pub day_start: u32,
    pub day_end: u32,
    pub verbose: bool,
    pub week_start: Weekday,
    pub week_end: Weekday,
    pub id: Option<String>,
}

impl LayoutConfig {
    /// Check every field and convert to [`LayoutSettings`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a unit outside `1..=1440`, a day window
    /// that is reversed or leaves `0..=1440`, or an unrecognized weekday.
    pub fn validate(&self) -> Result<LayoutSettings, ConfigError> {
        let window = validate_day_window(self.unit, self.day_start, self.day_end)?;
        Ok(LayoutSettings {
            unit: window.unit,
            day_start: window.day_start,
            day_end: window.day_end,
            verbose: self.verbose,
            week_start: parse_weekday("week_start", &self.week_start)?,
            week_end: parse_weekday("week_end", &self.week_end)?,
            id: self.id.clone(),
        })
    }

    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Path of the default configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn default_path() -> Result<PathBuf, CoreError> {
        Self::path()
    }

    /// Load from the default location, writing defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            return Ok(cfg);
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: LayoutConfig = toml::from_str(&content)?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }
}

/// A checked row unit and time-of-day window, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub unit: u32,
    pub day_start: u32,
    pub day_end: u32,
}

/// Minutes within `0..=1440`, converted to `u32`.
fn minute_of_day(minutes: i64) -> Option<u32> {
    u32::try_from(minutes)
        .ok()
        .filter(|&m| i64::from(m) <= MINUTES_PER_DAY)
}

/// Validate a row unit and a time-of-day window, all in minutes.
///
/// # Errors
///
/// Returns a [`ConfigError`] when `unit` lies outside `1..=1440`, when a
/// bound leaves `0..=1440`, or when `day_start >= day_end`.
pub fn validate_day_window(unit: i64, day_start: i64, day_end: i64) -> Result<DayWindow, ConfigError> {
    let checked_unit = minute_of_day(unit)
        .filter(|&u| u > 0)
        .ok_or(ConfigError::InvalidUnit { unit })?;
    let (Some(start), Some(end)) = (minute_of_day(day_start), minute_of_day(day_end)) else {
        return Err(ConfigError::DayBoundsOutOfRange { day_start, day_end });
    };
    if start >= end {
        return Err(ConfigError::DayBoundsOrder { day_start, day_end });
    }
    Ok(DayWindow {
        unit: checked_unit,
        day_start: start,
        day_end: end,
    })
}

/// Parse a weekday identifier such as `monday`, `Mon` or `TUESDAY`.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownWeekday`] naming `key` when the value is
/// not a weekday.
pub fn parse_weekday(key: &str, value: &str) -> Result<Weekday, ConfigError> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| ConfigError::UnknownWeekday {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Returns `~/.config/calendarize[-dev]/` based on CALENDARIZE_ENV.
///
/// Set CALENDARIZE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CALENDARIZE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("calendarize-dev")
    } else {
        base_dir.join("calendarize")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
