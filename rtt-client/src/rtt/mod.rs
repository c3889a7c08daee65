//! Realtime Trains (RTT) API client.
//!
//! Thin facade over the RTT pull API. Each call builds one URL, makes one
//! authenticated GET and hands the decoded JSON to [`parse`](crate::parse).
//!
//! Key characteristics of RTT:
//! - Stations can be addressed by CRS code or TIPLOC
//! - Service UIDs are only unique together with a running date
//! - Lookup failures come back as a JSON `error` field on a 200 response

mod client;
mod config;
mod endpoint;
mod error;
mod mock;
mod transport;

pub use client::RttClient;
pub use config::{
    BASE_URL_VAR, Credentials, DEFAULT_BASE_URL, PASSWORD_VAR, RttConfig, USERNAME_VAR,
};
pub use endpoint::Endpoint;
pub use error::{RttError, TransportError};
pub use mock::{MockRequest, MockTransport};
pub use transport::{HttpTransport, Transport};
