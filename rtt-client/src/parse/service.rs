//! Parser for service detail responses.

use serde_json::Value;

use crate::model::ServiceDetail;

use super::ParseError;
use super::fields::Fields;
use super::search::service_uid;

const DETAIL: &str = "ServiceDetail";

/// Parse a service detail response.
///
/// The API reports unknown services with a 200 and an `{"error": ...}`
/// body; that is returned as [`ParseError::Upstream`] before any other
/// field is looked at.
pub fn parse_service_detail(json: &Value) -> Result<ServiceDetail, ParseError> {
    let fields = Fields::of(json, DETAIL)?;

    if let Some(error) = fields.raw("error") {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(ParseError::Upstream { message });
    }

    fields.require_keys(&[
        "serviceUid",
        "runDate",
        "serviceType",
        "isPassenger",
        "trainIdentity",
        "atocCode",
        "atocName",
    ])?;

    let mut detail = ServiceDetail::new(service_uid(&fields, DETAIL)?, fields.date("runDate")?);

    fields.assign_if_set(&mut detail.service_type, "serviceType")?;
    fields.assign_if_set(&mut detail.is_passenger, "isPassenger")?;
    fields.assign_if_set(&mut detail.train_identity, "trainIdentity")?;
    fields.assign_if_set(&mut detail.atoc_code, "atocCode")?;
    fields.assign_if_set(&mut detail.atoc_name, "atocName")?;

    fields.assign_if_set(&mut detail.running_identity, "runningIdentity")?;
    fields.assign_if_set(&mut detail.power_type, "powerType")?;
    fields.assign_if_set(&mut detail.train_class, "trainClass")?;
    fields.assign_if_set(&mut detail.sleeper, "sleeper")?;
    fields.assign_if_set(&mut detail.performance_monitored, "performanceMonitored")?;
    fields.assign_if_set(&mut detail.realtime_activated, "realtimeActivated")?;
    fields.assign_if_set(&mut detail.origin, "origin")?;
    fields.assign_if_set(&mut detail.destination, "destination")?;
    fields.assign_if_set(&mut detail.locations, "locations")?;

    Ok(detail)
}
