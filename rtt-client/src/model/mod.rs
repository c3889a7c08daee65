//! Data model for Realtime Trains responses.
//!
//! These types are produced by the [`parse`](crate::parse) module and are
//! never mutated by this crate afterwards. Optional API fields are
//! represented by empty values (empty string, `false`, `0`, empty `Vec`)
//! rather than `Option`, so callers can read them without unwrapping.

mod call;
mod location;
mod pair;
mod search;
mod service;
mod service_uid;

pub use call::LocationCall;
pub use location::{LocationDetail, Tiploc};
pub use pair::TimingPair;
pub use search::{
    NO_COUNTDOWN, SearchResult, ServiceSummary, UNKNOWN_OPERATOR_CODE, UNKNOWN_OPERATOR_NAME,
};
pub use service::ServiceDetail;
pub use service_uid::{InvalidServiceUid, ServiceUid};
