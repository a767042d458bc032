#![forbid(unsafe_code)]

//! fidmap Configuration
//!
//! Settings are read from a TOML file, by default
//! `{config_dir}/fidmap/config.toml`. Every section is optional; missing
//! values fall back to built-in defaults.
//!
//! ```toml
//! [snapshot]
//! path = "/var/lib/hare/consul-kv.json"
//!
//! [logging]
//! level = "warn"
//!
//! [host]
//! name = "srvnode-1"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the key-value snapshot
pub const DEFAULT_SNAPSHOT_PATH: &str = "/var/lib/hare/consul-kv.json";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// An explicitly requested configuration file does not exist
    #[error("Config file not found at: {}", .0.display())]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub snapshot: SnapshotConfig,
    pub logging: LoggingConfig,
    pub host: HostConfig,
}

/// Where the key-value dump is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Local host identity override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Node name to use instead of the machine hostname
    pub name: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Returns the default config file path:
    /// `{config_dir()}/fidmap/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("fidmap");
        Ok(config_dir.join("config.toml"))
    }

    /// Load from an explicit path, or from the default path when it exists.
    ///
    /// An explicit path must exist; an absent default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(default) if default.exists() => Self::from_file(default),
                _ => Ok(Self::default()),
            },
        }
    }
}
