//! Configuration System
//!
//! Resolves the API base URL and request timeout shared by every page.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "SURYA_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_API_TIMEOUT: &str = "SURYA_API_TIMEOUT_SECS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Build a config for a base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Request timeout applied uniformly to every call
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join the base URL with an absolute API path
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Apply a raw base URL / timeout pair, ignoring blank or invalid values
    pub fn apply_overrides(&mut self, base_url: Option<&str>, timeout_secs: Option<&str>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = normalize_base_url(url);
        }
        if let Some(secs) = timeout_secs {
            match secs.trim().parse::<u64>() {
                Ok(s) if s > 0 => self.timeout_secs = s,
                _ => tracing::warn!("Ignoring invalid API timeout {:?}", secs),
            }
        }
    }
}

/// Remove surrounding whitespace and trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })?;
        config.api.base_url = normalize_base_url(&config.api.base_url);
        if config.api.timeout_secs == 0 {
            tracing::warn!("Ignoring API timeout of 0s, using {}s", default_timeout_secs());
            config.api.timeout_secs = default_timeout_secs();
        }
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                error,
            },
            other => other,
        })
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
        Self::load_first(&default_config_paths())
    }

    /// Load the first readable file among `paths`, then apply environment
    /// overrides; falls back to defaults when none loads
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        let url = std::env::var(ENV_API_URL).ok();
        let timeout = std::env::var(ENV_API_TIMEOUT).ok();
        self.api.apply_overrides(url.as_deref(), timeout.as_deref());
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    #[cfg(feature = "native")]
    {
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("surya").join("config.toml"));
        }
    }
    paths.push(PathBuf::from("./config.toml"));
    paths
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse { path: Option<PathBuf>, error: String },
}
