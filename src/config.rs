//! Configuration loading for the `breeds` CLI.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `~/.breedfetch/config.toml` (user, optional)
//! 3. Built-in defaults
//!
//! ```toml
//! [api]
//! base_url = "https://dog.ceo"
//! timeout_secs = 30
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::providers::DogApiClient;
use crate::providers::dog_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::{BreedFetchError, Result};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API base URL (default: https://dog.ceo).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl ApiConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a [`DogApiClient`] from these settings.
    pub fn client(&self) -> DogApiClient {
        DogApiClient::with_options(&self.base_url, self.timeout())
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; an error if missing)
    /// 2. `~/.breedfetch/config.toml`
    /// 3. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BreedFetchError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::parse(&content).map_err(|e| match e {
            BreedFetchError::Configuration(msg) => {
                BreedFetchError::Configuration(format!("{msg} in {path:?}"))
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            BreedFetchError::Configuration(format!("Failed to parse config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(BreedFetchError::Configuration(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(BreedFetchError::Configuration(format!(
                "api.base_url is not a valid URL: {}",
                self.api.base_url
            )));
        }
        Ok(())
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(BreedFetchError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(user_config_path().filter(|path| path.exists()))
    }
}

/// `~/.breedfetch/config.toml`, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".breedfetch").join("config.toml"))
}
