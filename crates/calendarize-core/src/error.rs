//! Core error types for calendarize-core.
//!
//! Configuration problems abort a layout before anything is computed, while
//! event problems only exclude the offending event and are reported through
//! the layout's diagnostics.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

/// Core error type for calendarize-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Event conversion or validation errors
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The row unit must be between one minute and a whole day
    #[error("Invalid unit {unit}: must be between 1 and 1440 minutes")]
    InvalidUnit { unit: i64 },

    /// A day bound lies outside of a single day
    #[error("Invalid day window {day_start}..{day_end}: bounds must lie within 0..=1440 minutes")]
    DayBoundsOutOfRange { day_start: i64, day_end: i64 },

    /// The day window is empty or reversed
    #[error("Invalid day window {day_start}..{day_end}: day_start must be before day_end")]
    DayBoundsOrder { day_start: i64, day_end: i64 },

    /// A weekday identifier could not be recognized
    #[error("Unknown weekday '{value}' for '{key}'")]
    UnknownWeekday { key: String, value: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Event-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventError {
    /// The event ends before it starts
    #[error("Malformed event: end ({end}) precedes start ({start})")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// A required field was absent from an event record
    #[error("Missing event field: {field}")]
    MissingField { field: String },

    /// A timestamp could not be parsed
    #[error("Invalid timestamp for '{field}': {value}")]
    InvalidTimestamp { field: String, value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
