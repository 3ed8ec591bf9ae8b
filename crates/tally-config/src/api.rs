//! Tally API connection settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

/// Public Tally API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tally.so";

/// Page size used when iterating over every item of a list endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("tally-client/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Bearer token (`tly-...`) sent with every request.
    #[serde(default)]
    pub api_key: String,

    /// Base URL without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page size for full-collection iteration.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the given key and default tuning.
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check if an API key has been provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Ensure the config can be used to talk to the API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] without an API key and
    /// [`ConfigError::InvalidValue`] for an unusable URL, timeout, or page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.page_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
