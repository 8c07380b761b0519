//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the retention engine, supporting TOML files
//! and environment-variable overrides with validation and type-safe access
//! to all settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Range checks against the engine contract
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (highest priority)
//! 2. Configuration files
//! 3. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use records_retention::config::Config;
//!
//! let config = Config::from_file("config.toml")?;
//! println!("Result cap: {}", config.search.max_results);
//! # Ok::<(), records_retention::RetentionError>(())
//! ```

use crate::errors::{Result, RetentionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine behavior
    pub search: SearchEngineConfig,
    /// Dataset location and format
    pub data: DataConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Search engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEngineConfig {
    /// Maximum number of codes returned per query, applied after ranking.
    pub max_results: usize,
    /// Queries shorter than this (after trimming) return an empty result
    /// list rather than an error.
    pub min_query_length: usize,
}

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the record dataset handed to the engine at startup.
    pub dataset_path: PathBuf,
    /// Whether `dataset_path` holds a raw disposition corpus (parsed at
    /// load) rather than prebuilt classification records.
    pub raw_corpus: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file is not an error: defaults are used, matching the
    /// zero-configuration startup path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| RetentionError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| RetentionError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dataset_path) = std::env::var("RETENTION_DATASET_PATH") {
            self.data.dataset_path = PathBuf::from(dataset_path);
        }
        if let Ok(level) = std::env::var("RETENTION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(max_results) = std::env::var("RETENTION_MAX_RESULTS") {
            self.search.max_results =
                max_results.parse().map_err(|_| RetentionError::Config {
                    message: "Invalid number in RETENTION_MAX_RESULTS".to_string(),
                })?;
        }
        Ok(())
    }

    /// Validate configuration values against the engine contract.
    fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(RetentionError::ValidationFailed {
                field: "search.max_results".to_string(),
                reason: "Result cap must be greater than zero".to_string(),
            });
        }

        if self.search.min_query_length == 0 {
            return Err(RetentionError::ValidationFailed {
                field: "search.min_query_length".to_string(),
                reason: "Minimum query length must be at least one".to_string(),
            });
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(RetentionError::ValidationFailed {
                    field: "logging.level".to_string(),
                    reason: format!("Unknown log level: {}", other),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchEngineConfig::default(),
            data: DataConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            max_results: 15,
            min_query_length: 2,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("./data/records.json"),
            raw_corpus: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.max_results, 15);
        assert_eq!(config.search.min_query_length, 2);
    }

    #[test]
    fn zero_result_cap_is_rejected() {
        let mut config = Config::default();
        config.search.max_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nmax_results = 5").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.min_query_length, 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::from_file("/nonexistent/retention.toml").unwrap();
        assert_eq!(config.search.max_results, 15);
    }
}
