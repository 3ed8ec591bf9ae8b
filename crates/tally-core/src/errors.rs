//! Errors raised while mapping between wire JSON and typed models.
//!
//! Transport and HTTP-status failures live in `tally-client`; this crate only
//! knows whether a JSON value has the shape a model requires.

use thiserror::Error;

/// A server response did not match the model it was decoded into.
///
/// The source carries serde's message, which names missing fields and
/// unknown enum variants.
#[derive(Debug, Error)]
#[error("failed to decode {entity}: {source}")]
pub struct DecodeError {
    /// Model that was being decoded (e.g. `form`, `form details`).
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// A model could not be turned into a request body.
#[derive(Debug, Error)]
#[error("failed to encode {entity}: {source}")]
pub struct EncodeError {
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// A block payload did not match the shape required by its `type` tag.
#[derive(Debug, Error)]
#[error("invalid payload for block type {block_type}: {source}")]
pub struct PayloadError {
    pub block_type: String,
    #[source]
    pub source: serde_json::Error,
}
