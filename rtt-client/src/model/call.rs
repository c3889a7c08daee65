//! Per-location call detail.
//!
//! A `LocationCall` describes what a service does at one location: booked
//! working (WTT) and public (GBTT) times, realtime observations, platform
//! and routing information, and any cancellation. Only the CRS code is
//! guaranteed; every other field holds an empty value when the API did
//! not send it.

use serde::Serialize;

use super::TimingPair;

/// A service's call (or pass) at a single location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCall {
    pub crs: String,
    pub realtime_activated: bool,
    pub tiploc: String,
    pub description: String,

    pub wtt_booked_arrival: String,
    pub wtt_booked_departure: String,
    pub wtt_booked_pass: String,
    pub gbtt_booked_arrival: String,
    pub gbtt_booked_departure: String,

    pub origin: Vec<TimingPair>,
    pub destination: Vec<TimingPair>,

    /// Whether the service stops here (as opposed to passing).
    pub is_call: bool,
    /// Whether the stop is advertised to the public.
    pub is_public_call: bool,

    pub realtime_arrival: String,
    pub realtime_arrival_actual: bool,
    pub realtime_arrival_no_report: bool,
    /// Minutes late against the working timetable; negative when early.
    pub realtime_wtt_arrival_lateness: i32,
    /// Minutes late against the public timetable; negative when early.
    pub realtime_gbtt_arrival_lateness: i32,

    pub realtime_departure: String,
    pub realtime_departure_actual: bool,
    pub realtime_departure_no_report: bool,
    pub realtime_wtt_departure_lateness: i32,
    pub realtime_gbtt_departure_lateness: i32,

    pub platform: String,
    pub platform_confirmed: bool,
    pub platform_changed: bool,

    pub line: String,
    pub line_confirmed: bool,
    pub path: String,
    pub path_confirmed: bool,

    pub cancel_reason_code: String,
    pub cancel_reason_short_text: String,
    pub cancel_reason_long_text: String,

    /// Display hint, e.g. "CALL", "ORIGIN", "DESTINATION", "CANCELLED_CALL".
    pub display_as: String,
    /// Where the train currently is relative to this location,
    /// e.g. "APPR_STAT" or "AT_PLAT".
    pub service_location: String,
}

impl LocationCall {
    /// A call at `crs` with every other field at its default.
    pub fn new(crs: impl Into<String>) -> Self {
        Self {
            crs: crs.into(),
            ..Self::default()
        }
    }

    /// Whether a cancellation reason has been recorded for this call.
    pub fn is_cancelled(&self) -> bool {
        !self.cancel_reason_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_empty_defaults() {
        let call = LocationCall::new("WOK");
        assert_eq!(call.crs, "WOK");
        assert!(!call.realtime_activated);
        assert!(call.platform.is_empty());
        assert_eq!(call.realtime_gbtt_departure_lateness, 0);
        assert!(call.origin.is_empty());
        assert!(!call.is_cancelled());
    }

    #[test]
    fn cancelled_when_reason_code_present() {
        let call = LocationCall {
            cancel_reason_code: "TG".to_string(),
            ..LocationCall::new("CLJ")
        };
        assert!(call.is_cancelled());
    }
}
