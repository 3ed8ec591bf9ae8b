//! Boundary between the resource façades and the HTTP transport.
//!
//! Façades describe a call as an [`ApiRequest`] and receive raw JSON back.
//! Authentication, connection handling, and status checks belong to the
//! [`RequestExecutor`] implementation.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query-string value. Lists are sent as one `key=value` pair per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// One logical call to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, QueryValue)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value sent for `key`, if any.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&QueryValue> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

/// Failures raised by the transport before a response body reaches a model.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout, or TLS failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        status: u16,
        /// Response body, usually a JSON error document.
        message: String,
    },

    /// The API answered 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The response body was not JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The request path or base URL could not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Executes one API call and returns the decoded JSON body.
///
/// Implementations must issue exactly one logical call per invocation; the
/// façades rely on this for their one-request-per-page guarantee.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
