//! `/workspaces` resource.

use async_trait::async_trait;
use tally_core::entities::{NewWorkspace, Workspace};
use tally_core::{Page, WireModel};

use crate::client::TallyClient;
use crate::error::TallyError;
use crate::executor::ApiRequest;
use crate::pagination::{PageSource, Paginator, validate_page};

/// Workspaces façade. Obtain one with [`TallyClient::workspaces`].
#[derive(Debug, Clone, Copy)]
pub struct Workspaces<'a> {
    client: &'a TallyClient,
}

impl<'a> Workspaces<'a> {
    pub(crate) const fn new(client: &'a TallyClient) -> Self {
        Self { client }
    }

    /// Fetch one page of workspaces.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Validation`] for page 0 without issuing a
    /// request, or any transport/decoding error of the call.
    pub async fn list(&self, page: u32) -> Result<Page<Workspace>, TallyError> {
        validate_page(page)?;
        self.client
            .send(ApiRequest::get("/workspaces").query("page", page))
            .await
    }

    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when the workspace does not exist.
    pub async fn get(&self, id: &str) -> Result<Workspace, TallyError> {
        if id.is_empty() {
            return Err(TallyError::Validation(
                "workspace id must not be empty".into(),
            ));
        }
        let path = format!("/workspaces/{}", urlencoding::encode(id));
        self.client.send(ApiRequest::get(path)).await
    }

    /// # Errors
    ///
    /// Returns [`TallyError::Validation`] for a blank name.
    pub async fn create(&self, name: impl Into<String>) -> Result<Workspace, TallyError> {
        let workspace = NewWorkspace::new(name);
        if workspace.name.trim().is_empty() {
            return Err(TallyError::Validation(
                "workspace name must not be blank".into(),
            ));
        }
        let body = workspace.encode()?;
        self.client
            .send(ApiRequest::post("/workspaces", body))
            .await
    }

    /// Lazily walk every workspace, starting at page 1.
    #[must_use]
    pub fn iter(&self) -> Paginator<WorkspacePages<'a>> {
        Paginator::new(WorkspacePages { workspaces: *self })
    }
}

/// [`PageSource`] behind [`Workspaces::iter`].
#[derive(Debug)]
pub struct WorkspacePages<'a> {
    workspaces: Workspaces<'a>,
}

#[async_trait]
impl PageSource for WorkspacePages<'_> {
    type Item = Workspace;

    async fn fetch_page(&self, page: u32) -> Result<Page<Workspace>, TallyError> {
        self.workspaces.list(page).await
    }
}
