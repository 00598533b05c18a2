//! Configuration management and validation.
//!
//! Settings for the report fetcher, layered as defaults, then environment
//! variables, then command-line overrides applied with the `with_*` builders.

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::{MetarError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Global configuration for fetching METAR reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetarConfig {
    /// METAR API endpoint; the station is passed as the `ids` query parameter
    pub api_base_url: String,

    /// Timeout for a single request, in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for MetarConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl MetarConfig {
    /// Defaults overridden by `METAR_API_URL` and `METAR_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the process environment in practice)
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!("Using API URL from {}: {}", ENV_API_URL, url);
            self.api_base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring {}={:?}, expected whole seconds",
                    ENV_TIMEOUT_SECS, raw
                ),
            }
        }

        self
    }

    /// Set the API endpoint
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the settings can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(MetarError::configuration("API URL must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(MetarError::configuration(
                "Timeout must be at least one second",
            ));
        }

        Ok(())
    }
}
