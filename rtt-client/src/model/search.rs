//! Station search results.

use chrono::NaiveDate;
use serde::Serialize;

use super::{LocationCall, LocationDetail, ServiceUid, TimingPair};

/// Operator code used when the API does not name one.
pub const UNKNOWN_OPERATOR_CODE: &str = "ZZ";

/// Operator name used when the API does not name one.
pub const UNKNOWN_OPERATOR_NAME: &str = "Unknown";

/// Value of [`ServiceSummary::countdown_minutes`] when no countdown applies.
pub const NO_COUNTDOWN: i32 = -1;

/// One service row on a station search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub service_uid: ServiceUid,
    pub run_date: NaiveDate,
    /// What the service does at the searched station.
    pub location_detail: LocationCall,
    pub train_identity: String,
    pub running_identity: String,
    pub atoc_code: String,
    pub atoc_name: String,
    /// "train", "bus" or "ship".
    pub service_type: String,
    pub is_passenger: bool,
    pub planned_cancel: bool,
    pub origin: Vec<TimingPair>,
    pub destination: Vec<TimingPair>,
    /// Minutes until departure, or [`NO_COUNTDOWN`].
    pub countdown_minutes: i32,
}

impl ServiceSummary {
    /// A summary with the given identity and default values elsewhere.
    pub fn new(service_uid: ServiceUid, run_date: NaiveDate, location_detail: LocationCall) -> Self {
        Self {
            service_uid,
            run_date,
            location_detail,
            train_identity: String::new(),
            running_identity: String::new(),
            atoc_code: UNKNOWN_OPERATOR_CODE.to_string(),
            atoc_name: UNKNOWN_OPERATOR_NAME.to_string(),
            service_type: String::new(),
            is_passenger: false,
            planned_cancel: false,
            origin: Vec::new(),
            destination: Vec::new(),
            countdown_minutes: NO_COUNTDOWN,
        }
    }

    /// Minutes until departure, if the API supplied a countdown.
    pub fn countdown(&self) -> Option<i32> {
        (self.countdown_minutes != NO_COUNTDOWN).then_some(self.countdown_minutes)
    }
}

/// Response of a station search (departures, arrivals, or A-to-B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The station searched.
    pub location: LocationDetail,
    /// The "to" station of an A-to-B search.
    pub filter: Option<LocationDetail>,
    pub services: Vec<ServiceSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ServiceSummary {
        ServiceSummary::new(
            ServiceUid::new("W12345").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            LocationCall::new("CLJ"),
        )
    }

    #[test]
    fn new_applies_operator_and_countdown_defaults() {
        let s = summary();
        assert_eq!(s.atoc_code, "ZZ");
        assert_eq!(s.atoc_name, "Unknown");
        assert_eq!(s.countdown_minutes, -1);
        assert_eq!(s.countdown(), None);
    }

    #[test]
    fn countdown_present() {
        let s = ServiceSummary {
            countdown_minutes: 0,
            ..summary()
        };
        assert_eq!(s.countdown(), Some(0));
    }
}
