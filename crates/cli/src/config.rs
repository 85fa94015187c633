// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `config.toml` inside the state directory and
//! includes:
//! - `base_url`: Root of the visits API (e.g., "https://host/gsbvttMobile/API")
//! - `timeout_secs`: Optional per-request timeout; absent means no timeout

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "visite";
const CONFIG_FILE_NAME: &str = "config.toml";

/// API root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://s5-4242.nuage-peda.fr/gsbvttMobile/API";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL that endpoint paths such as `/ApiVisite.php` are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Requests wait on the transport when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given state directory.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when no file exists.
    pub fn load_or_default(state_dir: &Path) -> Result<Self> {
        if state_dir.join(CONFIG_FILE_NAME).is_file() {
            Config::load(state_dir)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves configuration to the given state directory, creating it if needed.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::create_dir_all(state_dir)?;
        fs::write(state_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Replaces the base URL when an override is given.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Result<Self> {
        if let Some(url) = base_url {
            self.base_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    /// Checks that the base URL is an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(Error::Config(format!(
                "invalid base_url '{}': must start with http:// or https://",
                self.base_url
            ))),
        }
    }

    /// The base URL without a trailing slash.
    pub fn api_root(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Resolve the state directory: explicit path, then `VISITE_STATE_DIR`,
/// then the platform's local data directory.
pub fn resolve_state_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit.or_else(env::state_dir) {
        return Ok(dir);
    }
    dirs::data_local_dir()
        .map(|d| d.join(STATE_DIR_NAME))
        .ok_or_else(|| Error::Config("cannot determine a state directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
