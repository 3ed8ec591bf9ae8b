//! # tally-core
//!
//! Wire models for the Tally form-building API.
//!
//! This crate owns the mapping between the service's camelCase JSON and the
//! typed values the client hands to callers:
//! - Entity structs (forms, form details, blocks, settings, workspaces)
//! - Closed enums (`FormStatus`) and open ones (`BlockType`)
//! - The block payload sum type, selected by the sibling `type` tag
//! - The paginated envelope shared by every list endpoint
//! - The tri-state [`Nullable`] used by partial-update fields
//! - Decode/encode error types
//!
//! Nothing here performs I/O; see `tally-client` for the resource façades.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod nullable;
pub mod page;
pub mod payloads;
pub mod wire;

pub use errors::{DecodeError, EncodeError, PayloadError};
pub use nullable::Nullable;
pub use page::Page;
pub use wire::WireModel;
