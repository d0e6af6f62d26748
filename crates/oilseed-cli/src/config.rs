// crates/oilseed-cli/src/config.rs
//
// Runtime configuration for the CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory for local data storage (RocksDB).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    dirs::home_dir()
        .map(|home| home.join(".oilseed").join("data"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".oilseed/data".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default location of the configuration file: `~/.oilseed/config.toml`.
pub fn default_config_path() -> String {
    dirs::home_dir()
        .map(|home| home.join(".oilseed").join("config.toml"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".oilseed/config.toml".to_string())
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.log_level, "info");
        assert!(!config.data_dir.is_empty());
    }

    #[test]
    fn test_explicit_fields_win() {
        let config: CliConfig =
            toml::from_str("data_dir = \"/tmp/oilseed\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.data_dir, "/tmp/oilseed");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_config_path_is_absolute_not_tilde() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml"));
        assert!(!path.starts_with('~'));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(CliConfig::load("/nonexistent/oilseed/config.toml").is_err());
    }
}
