//! Explicitly constructed client context shared by the resource façades.

use std::sync::Arc;

use tally_config::{ApiConfig, DEFAULT_PAGE_SIZE};
use tally_core::WireModel;

use crate::error::TallyError;
use crate::executor::{ApiRequest, RequestExecutor};
use crate::forms::Forms;
use crate::http::HttpExecutor;
use crate::workspaces::Workspaces;

/// Entry point to the Tally API.
///
/// Holds the request executor and the page size used by full-collection
/// iteration. Cloning is cheap and clones share the executor.
#[derive(Clone)]
pub struct TallyClient {
    executor: Arc<dyn RequestExecutor>,
    page_size: u32,
}

impl TallyClient {
    /// Client over any executor, iterating with the default page size.
    pub fn new(executor: impl RequestExecutor + 'static) -> Self {
        Self {
            executor: Arc::new(executor),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// reqwest-backed client built from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Config`] if the settings are unusable.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TallyError> {
        let executor = HttpExecutor::new(config)?;
        Ok(Self::new(executor).with_page_size(config.page_size))
    }

    /// Override the page size used by `iter()`. Zero falls back to the default.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn forms(&self) -> Forms<'_> {
        Forms::new(self)
    }

    #[must_use]
    pub const fn workspaces(&self) -> Workspaces<'_> {
        Workspaces::new(self)
    }

    /// Issue one request and decode the body as `T`.
    pub(crate) async fn send<T: WireModel>(&self, request: ApiRequest) -> Result<T, TallyError> {
        let value = self.executor.request(request).await?;
        Ok(T::decode(value)?)
    }
}

impl std::fmt::Debug for TallyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TallyClient")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
