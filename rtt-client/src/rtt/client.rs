//! RTT API client.
//!
//! Each method makes exactly one request and one parse. Nothing is cached
//! or retried; errors come back to the caller as they happened.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::model::{SearchResult, ServiceDetail, ServiceUid};
use crate::parse::{parse_search_result, parse_service_detail};

use super::config::{Credentials, RttConfig};
use super::endpoint::Endpoint;
use super::error::RttError;
use super::transport::{HttpTransport, Transport};

/// Realtime Trains API client.
///
/// Credentials are fixed at construction and sent with every request.
#[derive(Debug, Clone)]
pub struct RttClient<T = HttpTransport> {
    transport: T,
    credentials: Credentials,
    base_url: Url,
}

impl RttClient<HttpTransport> {
    /// Create a client that talks HTTP to `config.base_url`.
    pub fn new(config: RttConfig) -> Result<Self, RttError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> RttClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(config: RttConfig, transport: T) -> Result<Self, RttError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RttError::Config(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;

        Ok(Self {
            transport,
            credentials: config.credentials,
            base_url,
        })
    }

    /// The transport in use.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Upcoming departures from a station (CRS or TIPLOC).
    pub async fn search_departures(&self, station: &str) -> Result<SearchResult, RttError> {
        self.search(Endpoint::Departures { station }).await
    }

    /// Upcoming arrivals at a station (CRS or TIPLOC).
    pub async fn search_arrivals(&self, station: &str) -> Result<SearchResult, RttError> {
        self.search(Endpoint::Arrivals { station }).await
    }

    /// Departures from `from` that call at `to`.
    ///
    /// The result's `filter` holds the `to` station.
    pub async fn search_departures_to(
        &self,
        from: &str,
        to: &str,
    ) -> Result<SearchResult, RttError> {
        self.search(Endpoint::DeparturesTo { from, to }).await
    }

    /// Full detail of one service on one running date.
    ///
    /// An unknown UID/date comes back as
    /// [`ParseError::Upstream`](crate::parse::ParseError::Upstream).
    pub async fn service_detail(
        &self,
        uid: &ServiceUid,
        date: NaiveDate,
    ) -> Result<ServiceDetail, RttError> {
        let json = self.fetch(Endpoint::Service { uid, date }).await?;
        let detail = parse_service_detail(&json)?;

        debug!(
            uid = %detail.service_uid,
            locations = detail.locations.len(),
            "parsed service detail"
        );
        Ok(detail)
    }

    async fn search(&self, endpoint: Endpoint<'_>) -> Result<SearchResult, RttError> {
        let json = self.fetch(endpoint).await?;
        let result = parse_search_result(&json)?;

        debug!(
            location = %result.location.crs,
            services = result.services.len(),
            "parsed search result"
        );
        Ok(result)
    }

    async fn fetch(&self, endpoint: Endpoint<'_>) -> Result<Value, RttError> {
        let url = endpoint.url(&self.base_url)?;
        debug!(url = %url, "RTT request");

        match self.transport.get_json(&url, &self.credentials).await {
            Ok(json) => {
                trace!(url = %url, "RTT response decoded");
                Ok(json)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "RTT request failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseError;
    use crate::rtt::error::TransportError;
    use crate::rtt::mock::MockTransport;
    use reqwest::StatusCode;
    use serde_json::json;

    const BASE: &str = "https://api.rtt.io/api/v1";

    fn search_fixture() -> Value {
        serde_json::from_str(include_str!("../../data/fixtures/search_departures.json")).unwrap()
    }

    fn detail_fixture() -> Value {
        serde_json::from_str(include_str!("../../data/fixtures/service_detail.json")).unwrap()
    }

    fn client(mock: MockTransport) -> RttClient<MockTransport> {
        RttClient::with_transport(RttConfig::new("rttapi_user", "pw"), mock).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn http_client_creation() {
        assert!(RttClient::new(RttConfig::new("user", "pw")).is_ok());
    }

    #[test]
    fn invalid_base_url_rejected() {
        let config = RttConfig::new("user", "pw").with_base_url("not a url");
        assert!(matches!(
            RttClient::with_transport(config, MockTransport::new()),
            Err(RttError::Config(_))
        ));
    }

    #[tokio::test]
    async fn departures_make_one_request() {
        let url = format!("{BASE}/json/search/CLJ");
        let client = client(MockTransport::new().with_json(&url, search_fixture()));

        let result = client.search_departures("CLJ").await.unwrap();

        assert_eq!(result.location.name, "Clapham Junction");
        assert_eq!(result.services.len(), 3);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, url);
        assert_eq!(requests[0].username, "rttapi_user");
    }

    #[tokio::test]
    async fn arrivals_use_arrivals_endpoint() {
        let url = format!("{BASE}/json/search/CLJ/arrivals");
        let client = client(MockTransport::new().with_json(&url, search_fixture()));

        client.search_arrivals("CLJ").await.unwrap();

        assert_eq!(client.transport().requests()[0].url, url);
    }

    #[tokio::test]
    async fn departures_to_populates_filter() {
        let url = format!("{BASE}/json/search/CLJ/to/WOK");
        let body = json!({
            "location": { "name": "Clapham Junction", "crs": "CLJ", "tiploc": ["CLPHMJN", "CLPHMJC"] },
            "filter": { "name": "Woking", "crs": "WOK", "tiploc": "WOKING" },
            "services": null
        });
        let client = client(MockTransport::new().with_json(&url, body));

        let result = client.search_departures_to("CLJ", "WOK").await.unwrap();

        assert_eq!(result.filter.map(|f| f.name), Some("Woking".to_string()));
        assert!(result.services.is_empty());
    }

    #[tokio::test]
    async fn service_detail_builds_dated_url() {
        let url = format!("{BASE}/json/service/W12345/2024/03/15");
        let client = client(MockTransport::new().with_json(&url, detail_fixture()));
        let uid = ServiceUid::new("W12345").unwrap();

        let detail = client.service_detail(&uid, date()).await.unwrap();

        assert_eq!(detail.service_uid, uid);
        assert_eq!(detail.locations.len(), 4);
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn upstream_error_is_propagated() {
        let url = format!("{BASE}/json/service/X00000/2024/03/15");
        let client = client(
            MockTransport::new().with_json(&url, json!({ "error": "Unknown service" })),
        );
        let uid = ServiceUid::new("X00000").unwrap();

        let err = client.service_detail(&uid, date()).await.unwrap_err();

        match err {
            RttError::Parse(parse) => {
                assert_eq!(parse.upstream_message(), Some("Unknown service"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_error_is_propagated_unchanged() {
        let url = format!("{BASE}/json/search/CLJ");
        let client = client(MockTransport::new().with_status(&url, StatusCode::UNAUTHORIZED));

        let err = client.search_departures("CLJ").await.unwrap_err();

        match err {
            RttError::Transport(TransportError::Status { status, reason, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(reason, "Unauthorized");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let url = format!("{BASE}/json/search/CLJ");
        let client = client(MockTransport::new().with_json(&url, json!({ "location": null })));

        let err = client.search_departures("CLJ").await.unwrap_err();

        assert!(matches!(
            err,
            RttError::Parse(ParseError::MissingField {
                entity: "SearchResult",
                field: "filter"
            })
        ));
    }

    #[tokio::test]
    async fn empty_station_makes_no_request() {
        let client = client(MockTransport::new());

        let err = client.search_departures("").await.unwrap_err();

        assert!(matches!(err, RttError::InvalidRequest(_)));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn credentials_reused_across_calls() {
        let departures = format!("{BASE}/json/search/CLJ");
        let arrivals = format!("{BASE}/json/search/CLJ/arrivals");
        let client = client(
            MockTransport::new()
                .with_json(&departures, search_fixture())
                .with_json(&arrivals, search_fixture()),
        );

        client.search_departures("CLJ").await.unwrap();
        client.search_arrivals("CLJ").await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.username == "rttapi_user"));
    }
}
