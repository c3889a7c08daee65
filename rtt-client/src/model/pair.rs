//! Origin/destination reference points.

use serde::Serialize;

/// An origin or destination of a service, as seen from one location.
///
/// The API calls this a "pair". A service can have several origins or
/// destinations when it joins or divides, hence the sequences on
/// [`LocationCall`](super::LocationCall) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingPair {
    /// TIPLOC code of the timing point.
    pub tiploc: String,
    /// Human-readable name, e.g. "London Waterloo".
    pub description: String,
    /// Working timetable time, `HHmmss`.
    pub working_time: String,
    /// Public timetable time, `HHmm`.
    pub public_time: String,
}
