//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_console_lines")]
    pub max_console_lines: usize,
    /// Redraw cadence in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_console_lines: default_max_console_lines(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Mirror console lines to a daily file under `log_dir`.
    #[serde(default)]
    pub console_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: default_log_dir(),
            console_log: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ui.max_console_lines must be greater than zero")]
    ZeroConsoleCapacity,
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("ui.timestamp_format {0:?} is not a valid strftime format")]
    InvalidTimestampFormat(String),
    #[error("logging.level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.max_console_lines == 0 {
            return Err(ConfigError::ZeroConsoleCapacity);
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let format = &self.ui.timestamp_format;
        if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimestampFormat(format.clone()));
        }
        self.logging.tracing_level()?;
        Ok(())
    }
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".into()
}
fn default_max_console_lines() -> usize {
    500
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_level() -> String {
    "info".into()
}
fn default_log_dir() -> String {
    "~/.local/share/crabdemo/logs".into()
}
