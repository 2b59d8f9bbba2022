//! Application configuration management.
//!
//! Configuration is a TOML file with four sections:
//! - `server` - bind address for the backend
//! - `storage` - where the store and bus collection live
//! - `seats` - seat layout generation and booking failure handling
//! - `api` - base URL the schedule client talks to
//!
//! A missing file yields the defaults. Every loaded file is validated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::seats::{PersistFailurePolicy, DEFAULT_BOOKED_PROBABILITY};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "BUSBAY_CONFIG";

/// Errors from loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("Failed to read config {path}: {source}")]
    ReadError {
        /// Config path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file failed.
    #[error("Failed to write config {path}: {source}")]
    WriteError {
        /// Config path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// One field holds an unusable value.
    #[error("Invalid value for {field}: {message}")]
    ValidationError {
        /// Dotted field path.
        field: String,
        /// What is wrong.
        message: String,
    },

    /// Several fields hold unusable values.
    #[error("{} configuration errors", .0.len())]
    MultipleValidationErrors(Vec<ConfigError>),

    /// No platform directory could be determined.
    #[error("Cannot determine configuration directory")]
    NoConfigDir,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Backend bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Storage locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `store.json` and `buses.json`.
    pub data_dir: PathBuf,
    /// Write the bus collection to disk; when false it lives in memory only.
    pub persist: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: true,
        }
    }
}

/// Seat allotment settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatsConfig {
    /// Chance that a seat starts out booked.
    pub booked_probability: f64,
    /// Reaction to a failed booking write.
    pub persist_failure: PersistFailurePolicy,
}

impl Default for SeatsConfig {
    fn default() -> Self {
        Self {
            booked_probability: DEFAULT_BOOKED_PROBABILITY,
            persist_failure: PersistFailurePolicy::default(),
        }
    }
}

/// Schedule API client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL, e.g. `http://192.168.1.20:5000/api`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend bind settings.
    pub server: ServerConfig,
    /// Storage locations.
    pub storage: StorageConfig,
    /// Seat allotment settings.
    pub seats: SeatsConfig,
    /// Schedule API client settings.
    pub api: ApiConfig,
}

impl Config {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation error.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or return defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, parsed or
    /// validated.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from [`default_config_path`].
    ///
    /// # Errors
    ///
    /// See [`Config::load_or_default`].
    pub fn load() -> ConfigResult<Self> {
        Self::load_or_default(default_config_path()?)
    }

    /// Write to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let write_err = |source| ConfigError::WriteError {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the single problem found, or
    /// [`ConfigError::MultipleValidationErrors`] listing all of them.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push(invalid("server.port", "must be between 1 and 65535"));
        }
        if self.server.host.trim().is_empty() {
            errors.push(invalid("server.host", "must not be empty"));
        }
        let p = self.seats.booked_probability;
        if !(0.0..=1.0).contains(&p) {
            errors.push(invalid(
                "seats.booked_probability",
                &format!("must be between 0 and 1 (got {p})"),
            ));
        }
        let url = self.api.base_url.trim();
        if url.is_empty() {
            errors.push(invalid("api.base_url", "must not be empty"));
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(invalid("api.base_url", "must start with http:// or https://"));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Config file location: `$BUSBAY_CONFIG`, else the platform config dir.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if no home directory is known.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    directories::ProjectDirs::from("", "", "busbay")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Platform data directory, or `./data` when none is known.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "busbay")
        .map_or_else(|| PathBuf::from("./data"), |dirs| dirs.data_dir().to_path_buf())
}
