//! Full service records.

use chrono::NaiveDate;
use serde::Serialize;

use super::search::{UNKNOWN_OPERATOR_CODE, UNKNOWN_OPERATOR_NAME};
use super::{LocationCall, ServiceUid, TimingPair};

/// Everything known about one train service on one running date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub service_uid: ServiceUid,
    pub run_date: NaiveDate,
    pub service_type: String,
    pub is_passenger: bool,
    /// Headcode, e.g. "2D23".
    pub train_identity: String,
    /// Headcode actually used on the day, if it differs.
    pub running_identity: String,
    /// Traction, e.g. "EMU", "DMU", "HST".
    pub power_type: String,
    pub train_class: String,
    pub sleeper: String,
    pub atoc_code: String,
    pub atoc_name: String,
    pub performance_monitored: bool,
    pub realtime_activated: bool,
    pub origin: Vec<TimingPair>,
    pub destination: Vec<TimingPair>,
    /// Stopping pattern, origin first.
    pub locations: Vec<LocationCall>,
}

impl ServiceDetail {
    /// A record with the given identity and default values elsewhere.
    pub fn new(service_uid: ServiceUid, run_date: NaiveDate) -> Self {
        Self {
            service_uid,
            run_date,
            service_type: String::new(),
            is_passenger: false,
            train_identity: String::new(),
            running_identity: String::new(),
            power_type: String::new(),
            train_class: String::new(),
            sleeper: String::new(),
            atoc_code: UNKNOWN_OPERATOR_CODE.to_string(),
            atoc_name: UNKNOWN_OPERATOR_NAME.to_string(),
            performance_monitored: false,
            realtime_activated: false,
            origin: Vec::new(),
            destination: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// The first location in the stopping pattern with the given CRS code.
    pub fn calls_at(&self, crs: &str) -> Option<&LocationCall> {
        self.locations.iter().find(|call| call.crs == crs)
    }
}
