//! HTTP transport.
//!
//! The client only needs "GET this URL with these credentials and give me
//! the JSON". [`Transport`] is that seam; [`HttpTransport`] is the real
//! implementation and [`MockTransport`](super::MockTransport) serves
//! canned responses.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value;

use super::config::Credentials;
use super::error::TransportError;

/// Performs one authenticated GET and decodes the JSON body.
pub trait Transport {
    fn get_json(
        &self,
        url: &Url,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// reqwest-backed transport using HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rtt-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url, credentials: &Credentials) -> Result<Value, TransportError> {
        let response = self
            .http
            .get(url.clone())
            .basic_auth(credentials.username(), Some(credentials.password()))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::from_status(url, status));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransportError::Body {
            message: e.to_string(),
            snippet: body.chars().take(500).collect(),
        })
    }
}
