//! Decode/encode entry points shared by every wire model.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{DecodeError, EncodeError};

/// A model with a fixed JSON representation on the Tally API.
///
/// The serde derives on each model carry the exact camelCase wire keys; this
/// trait only attaches the entity name to failures so callers can tell which
/// response was malformed.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;

    /// Decode a model from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if a required key is missing, a value has the
    /// wrong type, or a closed enum holds an unknown variant.
    fn decode(value: Value) -> Result<Self, DecodeError> {
        serde_json::from_value(value).map_err(|source| DecodeError {
            entity: Self::ENTITY,
            source,
        })
    }

    /// Encode a model into a request body. Unset optional fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if a value cannot be represented as JSON.
    fn encode(&self) -> Result<Value, EncodeError> {
        serde_json::to_value(self).map_err(|source| EncodeError {
            entity: Self::ENTITY,
            source,
        })
    }
}
