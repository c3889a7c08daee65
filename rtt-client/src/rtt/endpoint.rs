//! RTT endpoint URLs.

use chrono::{Datelike, NaiveDate};
use reqwest::Url;

use crate::model::ServiceUid;

use super::error::RttError;

/// A request the client knows how to make.
///
/// Station arguments accept either a CRS code (`"CLJ"`) or a TIPLOC
/// (`"CLPHMJC"`); the API resolves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/json/search/{station}`
    Departures { station: &'a str },
    /// `/json/search/{station}/arrivals`
    Arrivals { station: &'a str },
    /// `/json/search/{from}/to/{to}`
    DeparturesTo { from: &'a str, to: &'a str },
    /// `/json/service/{uid}/{YYYY}/{MM}/{DD}`
    Service { uid: &'a ServiceUid, date: NaiveDate },
}

impl Endpoint<'_> {
    /// Build the full URL below `base`.
    ///
    /// Each argument becomes exactly one percent-encoded path segment.
    pub fn url(&self, base: &Url) -> Result<Url, RttError> {
        let segments = self.segments()?;

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| RttError::Config(format!("base URL {base} cannot take a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn segments(&self) -> Result<Vec<String>, RttError> {
        let segments = match *self {
            Endpoint::Departures { station } => {
                vec!["json".into(), "search".into(), station_code(station)?]
            }
            Endpoint::Arrivals { station } => vec![
                "json".into(),
                "search".into(),
                station_code(station)?,
                "arrivals".into(),
            ],
            Endpoint::DeparturesTo { from, to } => vec![
                "json".into(),
                "search".into(),
                station_code(from)?,
                "to".into(),
                station_code(to)?,
            ],
            Endpoint::Service { uid, date } => vec![
                "json".into(),
                "service".into(),
                uid.to_string(),
                format!("{:04}", date.year()),
                format!("{:02}", date.month()),
                format!("{:02}", date.day()),
            ],
        };
        Ok(segments)
    }
}

fn station_code(station: &str) -> Result<String, RttError> {
    let station = station.trim();
    if station.is_empty() {
        return Err(RttError::InvalidRequest(
            "station code must not be empty".to_string(),
        ));
    }
    Ok(station.to_string())
}
