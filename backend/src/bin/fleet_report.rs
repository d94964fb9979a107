//! Fleet report generator.
//!
//! Reads a fleet file and a classification config, then prints the dashboard
//! view model as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Bundled sample fleet, config from ./fleet.toml (or built-in defaults)
//! cargo run -p fleet-lifecycle --bin fleet-report
//!
//! # Explicit fleet and config
//! cargo run -p fleet-lifecycle --bin fleet-report -- backend/data/fleet.json backend/fleet.toml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info), written to stderr
//!
//! Without a config argument, `fleet.toml` is searched for in the current
//! directory, `backend/` and the parent directory. Built-in defaults apply
//! only when no file is found; a file that fails to parse or validate aborts
//! the run.

use std::env;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fleet_lifecycle::api::FleetConfig;
use fleet_lifecycle::ingest::load_fleet_file;
use fleet_lifecycle::services::compute_fleet_report;

const DEFAULT_FLEET_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fleet.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = env::args().collect();
    let fleet_path = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_FLEET_PATH);

    let config = match args.get(2) {
        Some(path) => FleetConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => match FleetConfig::from_default_location().context("Failed to load fleet.toml")? {
            Some(config) => config,
            None => {
                warn!("No fleet.toml found in standard locations; using built-in defaults");
                FleetConfig::default()
            }
        },
    };

    let assets = load_fleet_file(fleet_path)
        .with_context(|| format!("Failed to load fleet from {}", fleet_path))?;
    info!("Loaded {} asset(s) from {}", assets.len(), fleet_path);

    let report = compute_fleet_report(&assets, &config);
    info!(
        "Summary: {} assets, {} need rejuvenation, {} need replacement, availability {}%",
        report.summary.total_assets,
        report.summary.rejuvenation_needed,
        report.summary.replacement_needed,
        report.summary.availability_pct
    );

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
