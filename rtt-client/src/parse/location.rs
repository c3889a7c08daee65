//! Parsers for station identities, timing pairs and location calls.

use serde_json::Value;

use crate::model::{LocationCall, LocationDetail, Tiploc, TimingPair};

use super::ParseError;
use super::fields::{FieldRef, Fields, FromJson};

/// Parse the `location` / `filter` object of a search response.
///
/// `name` and `crs` must be non-empty strings. `tiploc` may be a string or
/// an array of strings and keeps whichever shape it arrived in.
pub fn parse_location_detail(json: &Value) -> Result<LocationDetail, ParseError> {
    let fields = Fields::of(json, "LocationDetail")?;
    fields.require_keys(&["name", "crs", "tiploc"])?;

    Ok(LocationDetail {
        name: fields.non_empty("name")?,
        crs: fields.non_empty("crs")?,
        tiploc: fields.required("tiploc")?,
    })
}

/// Parse an origin/destination pair. All four fields are mandatory.
pub fn parse_timing_pair(json: &Value) -> Result<TimingPair, ParseError> {
    let fields = Fields::of(json, "TimingPair")?;
    fields.require_keys(&["tiploc", "description", "workingTime", "publicTime"])?;

    Ok(TimingPair {
        tiploc: fields.required("tiploc")?,
        description: fields.required("description")?,
        working_time: fields.required("workingTime")?,
        public_time: fields.required("publicTime")?,
    })
}

/// Parse the per-location detail of a service.
///
/// Only `crs` is mandatory; anything else that is absent or null keeps the
/// default from [`LocationCall::new`].
pub fn parse_location_call(json: &Value) -> Result<LocationCall, ParseError> {
    let fields = Fields::of(json, "LocationCall")?;
    let mut call = LocationCall::new(fields.required::<String>("crs")?);

    fields.assign_if_set(&mut call.realtime_activated, "realtimeActivated")?;
    fields.assign_if_set(&mut call.tiploc, "tiploc")?;
    fields.assign_if_set(&mut call.description, "description")?;

    fields.assign_if_set(&mut call.wtt_booked_arrival, "wttBookedArrival")?;
    fields.assign_if_set(&mut call.wtt_booked_departure, "wttBookedDeparture")?;
    fields.assign_if_set(&mut call.wtt_booked_pass, "wttBookedPass")?;
    fields.assign_if_set(&mut call.gbtt_booked_arrival, "gbttBookedArrival")?;
    fields.assign_if_set(&mut call.gbtt_booked_departure, "gbttBookedDeparture")?;

    fields.assign_if_set(&mut call.origin, "origin")?;
    fields.assign_if_set(&mut call.destination, "destination")?;

    fields.assign_if_set(&mut call.is_call, "isCall")?;
    fields.assign_if_set(&mut call.is_public_call, "isPublicCall")?;

    fields.assign_if_set(&mut call.realtime_arrival, "realtimeArrival")?;
    fields.assign_if_set(&mut call.realtime_arrival_actual, "realtimeArrivalActual")?;
    fields.assign_if_set(&mut call.realtime_arrival_no_report, "realtimeArrivalNoReport")?;
    fields.assign_if_set(
        &mut call.realtime_wtt_arrival_lateness,
        "realtimeWttArrivalLateness",
    )?;
    fields.assign_if_set(
        &mut call.realtime_gbtt_arrival_lateness,
        "realtimeGbttArrivalLateness",
    )?;

    fields.assign_if_set(&mut call.realtime_departure, "realtimeDeparture")?;
    fields.assign_if_set(&mut call.realtime_departure_actual, "realtimeDepartureActual")?;
    fields.assign_if_set(
        &mut call.realtime_departure_no_report,
        "realtimeDepartureNoReport",
    )?;
    fields.assign_if_set(
        &mut call.realtime_wtt_departure_lateness,
        "realtimeWttDepartureLateness",
    )?;
    fields.assign_if_set(
        &mut call.realtime_gbtt_departure_lateness,
        "realtimeGbttDepartureLateness",
    )?;

    fields.assign_if_set(&mut call.platform, "platform")?;
    fields.assign_if_set(&mut call.platform_confirmed, "platformConfirmed")?;
    fields.assign_if_set(&mut call.platform_changed, "platformChanged")?;

    fields.assign_if_set(&mut call.line, "line")?;
    fields.assign_if_set(&mut call.line_confirmed, "lineConfirmed")?;
    fields.assign_if_set(&mut call.path, "path")?;
    fields.assign_if_set(&mut call.path_confirmed, "pathConfirmed")?;

    fields.assign_if_set(&mut call.cancel_reason_code, "cancelReasonCode")?;
    fields.assign_if_set(&mut call.cancel_reason_short_text, "cancelReasonShortText")?;
    fields.assign_if_set(&mut call.cancel_reason_long_text, "cancelReasonLongText")?;

    fields.assign_if_set(&mut call.display_as, "displayAs")?;
    fields.assign_if_set(&mut call.service_location, "serviceLocation")?;

    Ok(call)
}

impl FromJson for Tiploc {
    fn from_json(value: &Value, at: FieldRef) -> Result<Self, ParseError> {
        let wrong_type = || ParseError::WrongType {
            entity: at.entity,
            field: at.key,
            expected: "a string or an array of strings",
        };
        match value {
            Value::String(code) => Ok(Tiploc::Single(code.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned).ok_or_else(wrong_type))
                .collect::<Result<Vec<_>, _>>()
                .map(Tiploc::Multiple),
            _ => Err(wrong_type()),
        }
    }
}

impl FromJson for LocationDetail {
    fn from_json(value: &Value, _at: FieldRef) -> Result<Self, ParseError> {
        parse_location_detail(value)
    }
}

impl FromJson for TimingPair {
    fn from_json(value: &Value, _at: FieldRef) -> Result<Self, ParseError> {
        parse_timing_pair(value)
    }
}

impl FromJson for LocationCall {
    fn from_json(value: &Value, _at: FieldRef) -> Result<Self, ParseError> {
        parse_location_call(value)
    }
}
