//! Realtime Trains API client.
//!
//! Fetches station departure/arrival boards and per-service detail from
//! the RTT JSON API and maps them into plain Rust types.

pub mod model;
pub mod parse;
pub mod rtt;

pub use rtt::{RttClient, RttConfig, RttError};
