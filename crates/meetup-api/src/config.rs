//! Configuration loading for the Meetup API server.
//!
//! The canonical configuration lives in `meetup-config.yaml`. Every field
//! has a default so an empty or missing file is valid. Environment
//! variables override the YAML values after parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading `meetup-config.yaml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read meetup config {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`ApiConfig`].
    #[error("invalid meetup config YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    /// An environment override held an unusable value.
    #[error("invalid value for {var}: {message}")]
    Env {
        /// The offending variable.
        var: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Top-level API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApiConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `MEETUP_HOST` overrides `server.host`
    /// - `MEETUP_PORT` overrides `server.port`
    /// - `LOG_LEVEL` overrides `logging.level`
    /// - `LOG_JSON` overrides `logging.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if an override cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Env`] if an override cannot be parsed.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override values from environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `MEETUP_PORT` or `LOG_JSON` is set
    /// to something that does not parse.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(val) = lookup("MEETUP_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("MEETUP_PORT") {
            self.server.port = val.parse().map_err(|e| ConfigError::Env {
                var: "MEETUP_PORT",
                message: format!("{e}"),
            })?;
        }
        if let Some(val) = lookup("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = lookup("LOG_JSON") {
            self.logging.json = val.parse().map_err(|e| ConfigError::Env {
                var: "LOG_JSON",
                message: format!("{e}"),
            })?;
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off) used when `RUST_LOG`
    /// is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    String::from("info")
}
