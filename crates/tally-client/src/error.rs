//! Client error taxonomy.

use tally_config::ConfigError;
use tally_core::{DecodeError, EncodeError};
use thiserror::Error;

use crate::executor::TransportError;

/// Errors surfaced by the resource façades.
///
/// Transport failures with a well-known status are promoted to their own
/// variant by the `From<TransportError>` conversion; everything else stays
/// in [`TallyError::Transport`].
#[derive(Debug, Error)]
pub enum TallyError {
    /// The caller passed an argument the API can never accept.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// A response did not match its model.
    #[error(transparent)]
    Decoding(#[from] DecodeError),

    /// A request model could not be serialized.
    #[error(transparent)]
    Encoding(#[from] EncodeError),

    /// 404: the target does not exist or is not accessible with this key.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 401: the API key was rejected.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// 400/422: the API rejected the content of the request.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Network failure, rate limiting, or any other non-success status.
    #[error(transparent)]
    Transport(TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TallyError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<TransportError> for TallyError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status {
                status: 404,
                message,
            } => Self::NotFound { message },
            TransportError::Status {
                status: 401,
                message,
            } => Self::Unauthorized { message },
            TransportError::Status {
                status: 400 | 422,
                message,
            } => Self::BadRequest { message },
            other => Self::Transport(other),
        }
    }
}
