//! Configuration management for vkpost
//!
//! The configuration file is optional. When no file is named explicitly and
//! the default location does not exist, built-in defaults are used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default `wall.post` endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.vk.com/method/wall.post";

/// VK API version sent with every request
pub const DEFAULT_API_VERSION: &str = "5.131";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from `explicit`, `VKPOST_CONFIG` or the default location
    ///
    /// A file named explicitly (argument or environment) must exist. The
    /// default location is allowed to be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Ok(path) = std::env::var("VKPOST_CONFIG") {
            let expanded = PathBuf::from(shellexpand::tilde(&path).to_string());
            return Self::load_from_path(&expanded);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("api.endpoint".to_string()).into());
        }
        if self.api.version.trim().is_empty() {
            return Err(ConfigError::MissingField("api.version".to_string()).into());
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::MissingField(
                "api.timeout_secs (must be greater than zero)".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Default configuration file path following the XDG Base Directory spec
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vkpost").join("config.toml"))
}
