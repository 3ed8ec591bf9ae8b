//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment variable could not be read into the config.
    #[error("failed to load Tally configuration: {0}")]
    Load(#[from] figment::Error),

    /// No API key in any source.
    #[error("no Tally API key configured (set TALLY_API_KEY or api.api_key)")]
    MissingApiKey,

    /// A setting is present but cannot be used to reach the API.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
