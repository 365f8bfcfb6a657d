//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OMDBAPI_KEY";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb API settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
}

/// `[omdb]` section.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Picks the API key: `--api-key`, then the environment, then the file.
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if no source provides a key.
    pub fn resolve_api_key(&self, cli_key: Option<&str>, env_key: Option<&str>) -> Result<String> {
        let key = [cli_key, env_key, self.omdb.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|k| !k.is_empty());

        match key {
            Some(k) => Ok(String::from(k)),
            None => bail!(
                "OMDb API key is not set (use --api-key, {API_KEY_ENV} or `api_key` under [omdb] in config.toml)"
            ),
        }
    }

    /// Request timeout, if configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.omdb.timeout_secs.map(Duration::from_secs)
    }
}
