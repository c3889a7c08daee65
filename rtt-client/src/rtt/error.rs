//! RTT client error types.

use reqwest::{StatusCode, Url};

use crate::parse::ParseError;

/// Errors from the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The API answered with a non-success status.
    ///
    /// `reason` is the standard phrase for `status`, or "Unknown Status"
    /// for codes without one.
    #[error("request to {url} failed: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The request never got a response (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("JSON parse error: {message}")]
    Body { message: String, snippet: String },
}

impl TransportError {
    pub(crate) fn from_status(url: &Url, status: StatusCode) -> Self {
        TransportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// HTTP status of a [`TransportError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Errors returned by [`RttClient`](super::RttClient).
#[derive(Debug, thiserror::Error)]
pub enum RttError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The request could not be built from the caller's arguments.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or unusable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
