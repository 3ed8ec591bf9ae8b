//! Entity structs for the Tally API.
//!
//! Field names are snake_case in Rust and camelCase on the wire. Optional
//! fields decode missing keys to `None` and are omitted again on encode.

mod block;
mod form;
mod settings;
mod workspace;

pub use block::FormBlock;
pub use form::{Form, FormCreated, FormDetails, FormPayment, NewForm};
pub use settings::FormSettings;
pub use workspace::{NewWorkspace, Workspace};

use serde::{Deserialize, Deserializer};

/// Decode an optional list, treating `[]` the same as a missing key.
pub(crate) fn non_empty_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(list.filter(|items| !items.is_empty()))
}
