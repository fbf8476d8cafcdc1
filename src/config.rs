//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::chart::EntryOrder;
use crate::tracker::{IdealWeightRule, WeightUnit};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where entries are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("unlockfit").to_string_lossy().to_string())
        .unwrap_or_else(|| "./unlockfit_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// How entries are presented
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Unit preselected on the form and used for the chart
    #[serde(default)]
    pub unit: WeightUnit,

    /// Table and chart ordering
    #[serde(default)]
    pub order: EntryOrder,

    /// Formula behind the "Ideal Weight" column
    #[serde(default)]
    pub ideal_weight: IdealWeightRule,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("unlockfit").join("config.toml")),
            Some(PathBuf::from("./unlockfit.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("UNLOCKFIT_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        // Display overrides; unparseable values are ignored
        if let Some(unit) = var("UNLOCKFIT_UNIT") {
            match unit.parse() {
                Ok(u) => self.display.unit = u,
                Err(e) => tracing::warn!("Ignoring UNLOCKFIT_UNIT: {}", e),
            }
        }
        if let Some(order) = var("UNLOCKFIT_ORDER") {
            match order.parse() {
                Ok(o) => self.display.order = o,
                Err(e) => tracing::warn!("Ignoring UNLOCKFIT_ORDER: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("UNLOCKFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("UNLOCKFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Data directory with a leading `~` expanded
    pub fn data_dir(&self) -> PathBuf {
        expand_home(&self.storage.data_dir)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Unlock.fit Weight Tracker Configuration
#
# Environment variables override these settings:
# - UNLOCKFIT_DATA_DIR
# - UNLOCKFIT_UNIT
# - UNLOCKFIT_ORDER
# - UNLOCKFIT_LOG_LEVEL
# - UNLOCKFIT_LOG_FORMAT

[storage]
# Directory holding weightEntries.json and weightData.json
data_dir = "~/.local/share/unlockfit"

[display]
# Weight unit preselected on the form: kg or lbs
unit = "kg"

# Table and chart order: submission or date
order = "submission"

# Ideal weight formula: category-target (18.5 / 24.9) or fixed-target (22.5)
ideal_weight = "category-target"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.data_dir, "~/.local/share/unlockfit");
        assert_eq!(config.display.unit, WeightUnit::Kg);
        assert_eq!(config.display.order, EntryOrder::Submission);
        assert_eq!(config.display.ideal_weight, IdealWeightRule::CategoryTarget);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
[display]
unit = "lbs"
ideal_weight = "fixed-target"
"#,
        )
        .unwrap();
        assert_eq!(config.display.unit, WeightUnit::Lbs);
        assert_eq!(config.display.order, EntryOrder::Submission);
        assert_eq!(config.display.ideal_weight, IdealWeightRule::FixedTarget);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("[display]\norder = \"alphabetical\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("UNLOCKFIT_DATA_DIR", "/tmp/weights"),
            ("UNLOCKFIT_ORDER", "date"),
            ("UNLOCKFIT_UNIT", "stone"),
            ("UNLOCKFIT_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/weights"));
        assert_eq!(config.display.order, EntryOrder::Date);
        // Unknown unit leaves the default in place
        assert_eq!(config.display.unit, WeightUnit::Kg);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/unlockfit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
