use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::nullable::Nullable;
use crate::wire::WireModel;

/// Form-level configuration.
///
/// Every key is optional and omitted from the payload when unset, so a
/// settings value built with `..FormSettings::default()` only touches the
/// fields it names. Fields the API lets a caller clear use [`Nullable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_message_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_message_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_timezone: Option<String>,
    /// Scheduled close date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub close_date: Nullable<String>,
    /// Scheduled close time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub close_time: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub submissions_limit: Nullable<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_submission_key: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub redirect_on_completion: Nullable<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_self_email_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_email_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_email_reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_email_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_email_from_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_email_body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_respondent_email_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email_reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email_from_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email_body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_progress_bar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_partial_submissions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_auto_jump: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_for_later: Option<bool>,
    /// Theme overrides; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Value>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub password: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions_data_retention_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions_data_retention_unit: Option<String>,
}

impl WireModel for FormSettings {
    const ENTITY: &'static str = "form settings";
}
