//! Route CLI - locate a position against a flight route.
//!
//! Binaries:
//! - route-locate: nearest leg, cross-track and along-route distances

pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use route_core::{DistanceUnit, LocatorConfig, Pos, Route};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use report::{locate, LocateReport};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Route JSON file: a list of legs or {"waypoints": [...]}
    #[arg(long)]
    pub route: PathBuf,

    /// Query latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Query longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Output unit (nm, km, m, mi, ft); defaults to ROUTE_DISTANCE_UNIT or nm
    #[arg(long)]
    pub unit: Option<DistanceUnit>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_tracing(json: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("route_cli=info".parse()?)
        .add_directive("route_core=info".parse()?);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

/// Load the route, run the query and render the report.
pub fn run(args: &Args) -> Result<String> {
    let json = std::fs::read_to_string(&args.route)
        .with_context(|| format!("Failed to read route file {}", args.route.display()))?;
    let route = Route::from_json(&json)
        .with_context(|| format!("Failed to parse route file {}", args.route.display()))?;
    tracing::info!(
        legs = route.len(),
        total_m = route.total_distance_m(),
        "Loaded route"
    );

    let mut config = LocatorConfig::from_env();
    if let Some(unit) = args.unit {
        config = config.with_unit(unit);
    }

    let pos = Pos::new(args.lat, args.lon);
    let report = locate(&route, &pos, config)
        .with_context(|| format!("Failed to locate lat {}, lon {}", args.lat, args.lon))?;
    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}
