use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::WireModel;

/// A workspace grouping forms and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkspace {
    pub name: String,
}

impl NewWorkspace {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl WireModel for Workspace {
    const ENTITY: &'static str = "workspace";
}

impl WireModel for NewWorkspace {
    const ENTITY: &'static str = "new workspace";
}
