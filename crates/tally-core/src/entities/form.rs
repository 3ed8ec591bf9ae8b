use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FormBlock, FormSettings, non_empty_list};
use crate::enums::FormStatus;
use crate::wire::WireModel;

/// A payment configured on a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPayment {
    pub amount: f64,
    pub currency: String,
}

/// A form as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    pub status: FormStatus,
    pub number_of_submissions: u64,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` when the form has no payments; never `Some(vec![])`.
    #[serde(
        default,
        deserialize_with = "non_empty_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub payments: Option<Vec<FormPayment>>,
}

/// A single form with its full block structure and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDetails {
    #[serde(flatten)]
    pub form: Form,
    pub blocks: Vec<FormBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FormSettings>,
}

/// Response of the create endpoint, which shares the details schema.
pub type FormCreated = FormDetails;

/// Request body for creating a form.
///
/// ```
/// use tally_core::entities::{FormSettings, NewForm};
/// use tally_core::enums::FormStatus;
///
/// let request = NewForm::new(FormStatus::Draft, Vec::new())
///     .workspace_id("ws_123")
///     .settings(FormSettings {
///         save_for_later: Some(true),
///         ..FormSettings::default()
///     });
/// assert_eq!(request.template_id, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForm {
    pub status: FormStatus,
    pub blocks: Vec<FormBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FormSettings>,
}

impl NewForm {
    #[must_use]
    pub const fn new(status: FormStatus, blocks: Vec<FormBlock>) -> Self {
        Self {
            status,
            blocks,
            workspace_id: None,
            template_id: None,
            settings: None,
        }
    }

    #[must_use]
    pub fn workspace_id(self, workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: Some(workspace_id.into()),
            ..self
        }
    }

    #[must_use]
    pub fn template_id(self, template_id: impl Into<String>) -> Self {
        Self {
            template_id: Some(template_id.into()),
            ..self
        }
    }

    #[must_use]
    pub fn settings(self, settings: FormSettings) -> Self {
        Self {
            settings: Some(settings),
            ..self
        }
    }
}

impl WireModel for FormPayment {
    const ENTITY: &'static str = "form payment";
}

impl WireModel for Form {
    const ENTITY: &'static str = "form";
}

impl WireModel for FormDetails {
    const ENTITY: &'static str = "form details";
}

impl WireModel for NewForm {
    const ENTITY: &'static str = "new form";
}
