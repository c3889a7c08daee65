use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use rtt_client::model::ServiceSummary;
use rtt_client::{RttClient, RttConfig};

const USAGE: &str = "usage: rtt-client <STATION> [arrivals]";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(station) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let arrivals = match args.next().as_deref() {
        None => false,
        Some("arrivals") => true,
        Some(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let client = match RttConfig::from_env().and_then(RttClient::new) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create RTT client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if arrivals {
        client.search_arrivals(&station).await
    } else {
        client.search_departures(&station).await
    };

    let board = match result {
        Ok(board) => board,
        Err(e) => {
            error!(station = %station, "Search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{} ({})", board.location.name, board.location.crs);
    if board.services.is_empty() {
        println!("  No services");
    }
    for service in &board.services {
        println!("  {}", describe(service, arrivals));
    }

    ExitCode::SUCCESS
}

/// One board line: time, platform, headcode, other end, operator.
fn describe(service: &ServiceSummary, arrivals: bool) -> String {
    let call = &service.location_detail;
    let (time, ends) = if arrivals {
        (&call.gbtt_booked_arrival, &call.origin)
    } else {
        (&call.gbtt_booked_departure, &call.destination)
    };
    let other_end = ends
        .iter()
        .map(|pair| pair.description.as_str())
        .collect::<Vec<_>>()
        .join(" & ");
    let status = if call.is_cancelled() { "  CANCELLED" } else { "" };

    format!(
        "{time:>4}  plat {platform:<3} {headcode:<4}  {other_end}  ({operator}){status}",
        platform = call.platform,
        headcode = service.train_identity,
        operator = service.atoc_name,
    )
}
