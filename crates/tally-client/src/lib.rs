//! # tally-client
//!
//! Resource façades for the Tally form-building API.
//!
//! Each façade issues one request per call through a [`RequestExecutor`],
//! decodes the response with the `tally-core` wire models, and exposes a lazy
//! page-flattening [`Paginator`] over its list endpoint:
//! - [`Forms`]: list, get, create, iterate
//! - [`Workspaces`]: list, get, create, iterate
//!
//! The executor is injected through [`TallyClient`]; [`HttpExecutor`] is the
//! reqwest-backed implementation built from a `tally-config` [`ApiConfig`].
//!
//! ```no_run
//! # async fn run() -> Result<(), tally_client::TallyError> {
//! use tally_client::TallyClient;
//! use tally_config::TallyConfig;
//!
//! let config = TallyConfig::load_with_dotenv()?;
//! let client = TallyClient::from_config(&config.api)?;
//!
//! let mut forms = client.forms().iter();
//! while let Some(form) = forms.try_next().await? {
//!     println!("{} ({})", form.name, form.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ApiConfig`]: tally_config::ApiConfig

mod client;
mod error;
mod executor;
mod forms;
mod http;
mod pagination;
mod workspaces;

pub use client::TallyClient;
pub use error::TallyError;
pub use executor::{ApiRequest, Method, QueryValue, RequestExecutor, TransportError};
pub use forms::{FormPages, Forms};
pub use http::HttpExecutor;
pub use pagination::{PageSource, Paginator};
pub use workspaces::{WorkspacePages, Workspaces};

pub use tally_core as models;
