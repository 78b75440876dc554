//! Broker connection settings.
//!
//! Loaded once at startup and never mutated. The lookup order is an explicit
//! path from `IOT_SMOKETEST_CONFIG`, then `broker.toml` in the working
//! directory, then the user config directory. A missing file falls back to
//! defaults with a warning so the binaries stay usable against a local broker;
//! an unreadable or malformed file is a startup error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_ENV_VAR: &str = "IOT_SMOKETEST_CONFIG";
const CONFIG_FILE: &str = "broker.toml";
const CONFIG_DIR: &str = "iot-smoketest";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),
    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

/// Host, port and credentials for the TLS broker connection.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        BrokerConfig {
            host: "localhost".to_string(),
            port: 8883,
            username: String::new(),
            password: String::new(),
        }
    }
}

impl BrokerConfig {
    /// Loads the first config file found in the candidate locations, or the
    /// defaults if none exists.
    pub async fn load() -> Result<Self, ConfigError> {
        for path in Self::candidate_paths() {
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                debug!("Loading broker config from {}", path.display());
                return Self::from_file(&path).await;
            }
        }
        warn!("No broker config file found, using defaults");
        Ok(Self::default())
    }

    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE));
        if let Some(mut config_dir) = dirs::config_dir() {
            config_dir.push(CONFIG_DIR);
            config_dir.push(CONFIG_FILE);
            paths.push(config_dir);
        }
        paths
    }
}
