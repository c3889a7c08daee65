//! Conversion from decoded Realtime Trains JSON to model types.
//!
//! Every parser takes a `serde_json::Value`, leaves it untouched, and
//! either returns a freshly owned model value or the first problem it
//! found. Optional fields follow one rule everywhere: a key that is
//! present and non-null replaces the field's default, anything else
//! leaves the default in place.

mod error;
mod fields;
mod location;
mod search;
mod service;

pub use error::ParseError;
pub use location::{parse_location_call, parse_location_detail, parse_timing_pair};
pub use search::{parse_search_result, parse_service_summary};
pub use service::parse_service_detail;
