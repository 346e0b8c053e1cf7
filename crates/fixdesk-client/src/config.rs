// crates/fixdesk-client/src/config.rs

//! Client configuration.
//!
//! Layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. optional TOML file (`--config`)
//! 3. environment:
//!    - `BACKEND_PORT`               (origin becomes `http://localhost:{port}`)
//!    - `FIXDESK_BACKEND_URL`        (full origin, wins over `BACKEND_PORT`)
//!    - `FIXDESK_POLL_INTERVAL_MS`   (default: 2000)
//!    - `FIXDESK_REQUEST_TIMEOUT_MS` (default: 5000)
//! 4. CLI flags, applied by the binary

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("backend_url must not be empty")]
    EmptyBackendUrl,
}

/// Configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend_url: String,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub default_symbol: String,
    pub default_quantity: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            poll_interval_ms: 2000,
            request_timeout_ms: 5000,
            default_symbol: "AAPL".to_string(),
            default_quantity: 100,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the file at `path` (if any) and then the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Overlay values from `lookup`. Tests pass a map-backed closure
    /// instead of mutating the process environment.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = read_env::<u16, _>(&lookup, "BACKEND_PORT")? {
            self.backend_url = format!("http://localhost:{port}");
        }
        if let Some(url) = lookup("FIXDESK_BACKEND_URL") {
            let url = url.trim();
            if !url.is_empty() {
                self.backend_url = url.to_string();
            }
        }
        if let Some(ms) = read_env(&lookup, "FIXDESK_POLL_INTERVAL_MS")? {
            self.poll_interval_ms = ms;
        }
        if let Some(ms) = read_env(&lookup, "FIXDESK_REQUEST_TIMEOUT_MS")? {
            self.request_timeout_ms = ms;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Zero("poll_interval_ms"));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Zero("request_timeout_ms"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value,
            }),
        None => Ok(None),
    }
}
