pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabdemo")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        // Seed the file with defaults; failing to write it is not fatal.
        let _ = save_config_to(path, &config);
        return Ok(config);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults_and_seeds_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("crabdemo").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.max_console_lines, 500);
        assert!(path.exists());

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.ui.tick_rate_ms, config.ui.tick_rate_ms);
        assert_eq!(reloaded.logging.level, config.logging.level);
    }

    #[test]
    fn test_parse_error_names_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[ui\nmax_console_lines = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Failed to parse config file"), "{}", msg);
        assert!(msg.contains("config.toml"), "{}", msg);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Invalid config"), "{}", msg);
        assert!(msg.contains("tick_rate_ms must be greater than zero"), "{}", msg);
    }

    #[test]
    fn test_saved_config_round_trips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut config = AppConfig::default();
        config.ui.max_console_lines = 42;
        config.logging.console_log = true;

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.ui.max_console_lines, 42);
        assert!(loaded.logging.console_log);
    }
}
