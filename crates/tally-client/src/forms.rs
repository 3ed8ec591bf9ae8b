//! `/forms` resource.

use async_trait::async_trait;
use tally_core::entities::{Form, FormCreated, FormDetails, NewForm};
use tally_core::{Page, WireModel};

use crate::client::TallyClient;
use crate::error::TallyError;
use crate::executor::ApiRequest;
use crate::pagination::{PageSource, Paginator, validate_page};

/// Forms façade. Obtain one with [`TallyClient::forms`].
#[derive(Debug, Clone, Copy)]
pub struct Forms<'a> {
    client: &'a TallyClient,
}

impl<'a> Forms<'a> {
    pub(crate) const fn new(client: &'a TallyClient) -> Self {
        Self { client }
    }

    /// Fetch one page of forms.
    ///
    /// `limit` is sent as given. `workspace_ids`, when present, is sent as a
    /// repeated `workspaceIds` query key.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Validation`] for page 0 without issuing a
    /// request, or any transport/decoding error of the call.
    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        workspace_ids: Option<&[String]>,
    ) -> Result<Page<Form>, TallyError> {
        validate_page(page)?;

        let mut request = ApiRequest::get("/forms")
            .query("page", page)
            .query("limit", limit);
        if let Some(ids) = workspace_ids {
            request = request.query("workspaceIds", ids.to_vec());
        }

        self.client.send(request).await
    }

    /// Fetch a single form with its blocks and settings.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when the form does not exist and
    /// [`TallyError::Validation`] for an empty id.
    pub async fn get(&self, id: &str) -> Result<FormDetails, TallyError> {
        if id.is_empty() {
            return Err(TallyError::Validation("form id must not be empty".into()));
        }
        let path = format!("/forms/{}", urlencoding::encode(id));
        self.client.send(ApiRequest::get(path)).await
    }

    /// Create a form from its block definitions.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::BadRequest`] when the API rejects the blocks,
    /// or any encoding/transport/decoding error of the call.
    pub async fn create(&self, form: &NewForm) -> Result<FormCreated, TallyError> {
        let body = form.encode()?;
        self.client.send(ApiRequest::post("/forms", body)).await
    }

    /// Lazily walk every form the key can see, starting at page 1.
    #[must_use]
    pub fn iter(&self) -> Paginator<FormPages<'a>> {
        self.pages(None)
    }

    /// Lazily walk the forms of the given workspaces.
    #[must_use]
    pub fn iter_in_workspaces<I, S>(&self, workspace_ids: I) -> Paginator<FormPages<'a>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages(Some(workspace_ids.into_iter().map(Into::into).collect()))
    }

    fn pages(&self, workspace_ids: Option<Vec<String>>) -> Paginator<FormPages<'a>> {
        Paginator::new(FormPages {
            forms: *self,
            limit: self.client.page_size(),
            workspace_ids,
        })
    }
}

/// [`PageSource`] behind [`Forms::iter`].
#[derive(Debug)]
pub struct FormPages<'a> {
    forms: Forms<'a>,
    limit: u32,
    workspace_ids: Option<Vec<String>>,
}

#[async_trait]
impl PageSource for FormPages<'_> {
    type Item = Form;

    async fn fetch_page(&self, page: u32) -> Result<Page<Form>, TallyError> {
        self.forms
            .list(page, self.limit, self.workspace_ids.as_deref())
            .await
    }
}
