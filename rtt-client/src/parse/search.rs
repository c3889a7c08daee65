//! Parsers for station search responses.

use serde_json::Value;

use crate::model::{SearchResult, ServiceSummary, ServiceUid};

use super::ParseError;
use super::fields::{FieldRef, Fields, FromJson};

const SUMMARY: &str = "ServiceSummary";

/// Parse one entry of a search response's `services` array.
///
/// `serviceUid`, `atocCode`, `atocName`, `serviceType` and `isPassenger`
/// must be present and `runDate` must be a `YYYY-MM-DD` date. A null
/// operator code or name falls back to "ZZ" / "Unknown".
pub fn parse_service_summary(json: &Value) -> Result<ServiceSummary, ParseError> {
    let fields = Fields::of(json, SUMMARY)?;
    fields.require_keys(&[
        "serviceUid",
        "atocCode",
        "atocName",
        "serviceType",
        "isPassenger",
    ])?;

    let service_uid = service_uid(&fields, SUMMARY)?;
    let run_date = fields.date("runDate")?;
    let location_detail = fields.required("locationDetail")?;

    let mut summary = ServiceSummary::new(service_uid, run_date, location_detail);

    fields.assign_if_set(&mut summary.atoc_code, "atocCode")?;
    fields.assign_if_set(&mut summary.atoc_name, "atocName")?;
    fields.assign_if_set(&mut summary.service_type, "serviceType")?;
    fields.assign_if_set(&mut summary.is_passenger, "isPassenger")?;

    fields.assign_if_set(&mut summary.train_identity, "trainIdentity")?;
    fields.assign_if_set(&mut summary.running_identity, "runningIdentity")?;
    fields.assign_if_set(&mut summary.planned_cancel, "plannedCancel")?;
    fields.assign_if_set(&mut summary.countdown_minutes, "countdownMinutes")?;
    fields.assign_if_set(&mut summary.origin, "origin")?;
    fields.assign_if_set(&mut summary.destination, "destination")?;

    Ok(summary)
}

/// Parse a station search response.
///
/// The `location`, `filter` and `services` keys must all be present.
/// `location` must also be non-null; a null `filter` means "not an A-to-B
/// search" and a null `services` means "nothing running".
pub fn parse_search_result(json: &Value) -> Result<SearchResult, ParseError> {
    let fields = Fields::of(json, "SearchResult")?;
    fields.require_keys(&["location", "filter", "services"])?;

    let mut result = SearchResult {
        location: fields.required("location")?,
        filter: None,
        services: Vec::new(),
    };
    fields.assign_if_set(&mut result.filter, "filter")?;
    fields.assign_if_set(&mut result.services, "services")?;

    Ok(result)
}

/// Read a record's `serviceUid`, which must be a non-empty string.
pub(super) fn service_uid(fields: &Fields<'_>, entity: &'static str) -> Result<ServiceUid, ParseError> {
    let raw: String = fields.required("serviceUid")?;
    ServiceUid::new(raw).map_err(|_| ParseError::InvalidField {
        entity,
        field: "serviceUid",
        reason: "must not be empty",
    })
}

impl FromJson for ServiceSummary {
    fn from_json(value: &Value, _at: FieldRef) -> Result<Self, ParseError> {
        parse_service_summary(value)
    }
}
