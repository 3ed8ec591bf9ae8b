//! reqwest-backed [`RequestExecutor`].
//!
//! Injects the bearer token and builds the request URL. Any non-2xx answer
//! becomes a [`TransportError`] here: 429 as `RateLimited` with the
//! `Retry-After` delay, everything else as `Status` carrying the error body.
//! The façades only ever see decoded JSON.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use serde_json::Value;
use tally_config::{ApiConfig, ConfigError};

use crate::error::TallyError;
use crate::executor::{ApiRequest, Method, QueryValue, RequestExecutor, TransportError};

/// HTTP client for the Tally REST API.
pub struct HttpExecutor {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpExecutor {
    /// Build an executor from validated API settings.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Config`] if the config is incomplete or the
    /// base URL does not parse, and [`TallyError::Transport`] if the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, TallyError> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url",
            reason: e.to_string(),
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(
            |e| ConfigError::InvalidValue {
                field: "api.api_key",
                reason: e.to_string(),
            },
        )?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { http, base_url })
    }

    /// Join `request.path` onto the base URL and append the query string.
    fn url_for(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        if !request.path.starts_with('/') {
            return Err(TransportError::InvalidUrl(format!(
                "path must start with '/': {}",
                request.path
            )));
        }

        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), request.path);
        url.set_path(&path);

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                match value {
                    QueryValue::Scalar(value) => {
                        pairs.append_pair(key, value);
                    }
                    QueryValue::List(values) => {
                        for value in values {
                            pairs.append_pair(key, value);
                        }
                    }
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn request(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = self.url_for(&request)?;
        tracing::debug!(method = %request.method, %url, "tally request");

        let builder = match request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder.send().await?;
        if !resp.status().is_success() {
            return Err(status_error(request.method, &request.path, resp).await);
        }

        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(TransportError::InvalidBody)
    }
}

/// Turn a non-2xx response into the matching [`TransportError`].
async fn status_error(method: Method, path: &str, resp: reqwest::Response) -> TransportError {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after_secs(resp.headers());
        tracing::warn!(%method, path, retry_after_secs, "tally rate limit hit");
        return TransportError::RateLimited { retry_after_secs };
    }

    tracing::warn!(%method, path, status = status.as_u16(), "tally request failed");
    TransportError::Status {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    }
}

/// `Retry-After` in seconds. Absent, HTTP-date, or garbage values give 60.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor(base_url: &str) -> HttpExecutor {
        HttpExecutor::new(&ApiConfig::new("tly-test", base_url)).unwrap()
    }

    #[rstest]
    #[case(Some("120"), 120)]
    #[case(Some(" 5 "), 5)]
    #[case(None, 60)]
    #[case(Some("Wed, 21 Oct 2026 07:28:00 GMT"), 60)]
    fn retry_after_header(#[case] value: Option<&str>, #[case] expected: u64) {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        }
        assert_eq!(retry_after_secs(&headers), expected);
    }

    #[tokio::test]
    async fn rate_limited_form_list_reports_delay() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forms"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .expect(1)
            .mount(&server)
            .await;

        let err = executor(&server.uri())
            .request(ApiRequest::get("/forms").query("page", 1_u32))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn error_body_is_kept_in_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forms/wMq4bA"))
            .respond_with(
                ResponseTemplate::new(503).set_body_string(r#"{"message":"maintenance"}"#),
            )
            .mount(&server)
            .await;

        let err = executor(&server.uri())
            .request(ApiRequest::get("/forms/wMq4bA"))
            .await
            .unwrap_err();
        let TransportError::Status { status, message } = &err else {
            panic!("expected status error, got {err:?}");
        };
        assert_eq!(*status, 503);
        assert_eq!(message, r#"{"message":"maintenance"}"#);
    }

    #[tokio::test]
    async fn create_sends_bearer_token_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workspaces"))
            .and(header("Authorization", "Bearer tly-test"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "name": "Research" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "ws_1" })))
            .expect(1)
            .mount(&server)
            .await;

        let value = executor(&server.uri())
            .request(ApiRequest::post("/workspaces", json!({ "name": "Research" })))
            .await
            .unwrap();
        assert_eq!(value, json!({ "id": "ws_1" }));
    }

    #[tokio::test]
    async fn empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/workspaces"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let value = executor(&server.uri())
            .request(ApiRequest::get("/workspaces"))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn html_success_body_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forms"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let err = executor(&server.uri())
            .request(ApiRequest::get("/forms"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidBody(_)));
    }

    #[test]
    fn url_joins_path_and_repeats_list_keys() {
        let request = ApiRequest::get("/forms")
            .query("page", 1_u32)
            .query("workspaceIds", vec!["ws_1".to_string(), "ws_2".to_string()]);
        let url = executor("https://api.tally.so").url_for(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.tally.so/forms?page=1&workspaceIds=ws_1&workspaceIds=ws_2"
        );
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let request = ApiRequest::get("/forms/abc");
        let url = executor("http://localhost:8080/v1/").url_for(&request).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/forms/abc");
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let url = executor("https://api.tally.so")
            .url_for(&ApiRequest::get("/workspaces"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.tally.so/workspaces");
    }

    #[test]
    fn relative_path_is_rejected() {
        let result = executor("https://api.tally.so").url_for(&ApiRequest::get("forms"));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = HttpExecutor::new(&ApiConfig::default());
        assert!(matches!(result, Err(TallyError::Config(_))));
    }
}
