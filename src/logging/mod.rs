//! Diagnostic tracing and console log files.
//!
//! The terminal is owned by the UI, so `tracing` output goes to
//! `<log_dir>/crabdemo.log`. When `logging.console_log` is enabled, console
//! lines are additionally written to daily files named `console_<date>.log`
//! in the same directory (default: `~/.local/share/crabdemo/logs/`).

use crate::app::console::ConsoleLine;
use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

/// Install the global `tracing` subscriber, writing plain text to the log dir.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let level = config.tracing_level()?;
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join("crabdemo.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Writes console lines to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Lines are dropped if a log file cannot be created.
pub struct ConsoleLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, Option<fs::File>>,
}

impl ConsoleLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.console_log,
            log_dir: expand_home(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    /// Append a line to today's console log. No-op if disabled.
    pub fn log_line(&mut self, line: &ConsoleLine) {
        if !self.enabled {
            return;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("console_{}.log", date);

        let log_dir = &self.log_dir;
        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(log_dir);
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(&filename))
            {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!(error = %e, "console log file unavailable");
                    None
                }
            }
        });

        if let Some(file) = handle {
            let _ = writeln!(file, "[{}] {}: {}", line.timestamp, line.source.tag(), line.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::console::ConsoleSource;
    use tempfile::tempdir;

    fn line(text: &str) -> ConsoleLine {
        ConsoleLine {
            timestamp: "12:00:00".into(),
            source: ConsoleSource::Notifier,
            text: text.into(),
        }
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log"), PathBuf::from("/var/log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let config = LoggingConfig {
            console_log: false,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        ConsoleLogger::new(&config).log_line(&line("qq"));
        assert!(!dir.exists());
    }

    #[test]
    fn test_enabled_appends_lines() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let config = LoggingConfig {
            console_log: true,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        let mut logger = ConsoleLogger::new(&config);
        logger.log_line(&line("qq"));
        logger.log_line(&line("abc"));
        drop(logger);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let contents = fs::read_to_string(dir.join(format!("console_{}.log", date))).unwrap();
        assert_eq!(contents, "[12:00:00] notifier: qq\n[12:00:00] notifier: abc\n");
    }
}
