//! Mock transport for testing without API access.
//!
//! Responses are registered per URL; every request is recorded so tests
//! can check what was asked for and with which credentials.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::config::Credentials;
use super::error::TransportError;
use super::transport::Transport;

#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Status(StatusCode),
}

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub url: String,
    pub username: String,
}

/// Transport that serves canned JSON.
///
/// Unregistered URLs answer 404, like the real API does for unknown paths.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: HashMap<String, MockResponse>,
    requests: Arc<Mutex<Vec<MockRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), MockResponse::Json(body));
        self
    }

    /// Answer `url` with an empty response carrying `status`.
    pub fn with_status(mut self, url: impl Into<String>, status: StatusCode) -> Self {
        self.responses.insert(url.into(), MockResponse::Status(status));
        self
    }

    /// Requests made so far, oldest first.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for MockTransport {
    async fn get_json(&self, url: &Url, credentials: &Credentials) -> Result<Value, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(MockRequest {
                url: url.to_string(),
                username: credentials.username().to_string(),
            });

        match self.responses.get(url.as_str()) {
            Some(MockResponse::Json(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(TransportError::from_status(url, *status)),
            None => Err(TransportError::from_status(url, StatusCode::NOT_FOUND)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.rtt.io/api/v1/json/search/CLJ";

    #[tokio::test]
    async fn serves_registered_json() {
        let mock = MockTransport::new().with_json(URL, json!({ "ok": true }));
        let url = Url::parse(URL).unwrap();

        let body = mock
            .get_json(&url, &Credentials::new("user", "pw"))
            .await
            .unwrap();

        assert_eq!(body, json!({ "ok": true }));
        assert_eq!(
            mock.requests(),
            vec![MockRequest {
                url: URL.to_string(),
                username: "user".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let mock = MockTransport::new();
        let url = Url::parse(URL).unwrap();

        let err = mock
            .get_json(&url, &Credentials::new("user", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn clones_share_request_log() {
        let mock = MockTransport::new().with_status(URL, StatusCode::SERVICE_UNAVAILABLE);
        let clone = mock.clone();
        let url = Url::parse(URL).unwrap();

        let err = clone
            .get_json(&url, &Credentials::new("user", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("request to {URL} failed: 503 Service Unavailable"));
        assert_eq!(mock.requests().len(), 1);
    }
}
