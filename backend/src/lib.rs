//! # Fleet Lifecycle Analytics
//!
//! Aggregation and classification engine behind the fleet-maintenance
//! dashboard (locomotives, railcars, wagons).
//!
//! The crate turns an ordered list of asset records and a classification
//! configuration into a [`FleetReport`](api::FleetReport): summary counters,
//! an age-bucket histogram, a capex sparkline, a priority table and a
//! lifecycle notification feed. The analytics are pure, synchronous functions
//! over borrowed slices; the only I/O lives at the ingestion and configuration
//! boundary.
//!
//! ## Architecture
//!
//! - [`models`]: the validated `Asset` record
//! - [`ingest`]: JSON/TOML fleet files → validated assets
//! - [`config`]: thresholds, age buckets and capex plan from `fleet.toml`
//! - [`services`]: the analytics (summary, histogram, notifications, ...)
//! - [`views`]: view-model types, re-exported through [`api`]
//! - [`error`]: `FleetError` and its context
//!
//! ## Example
//!
//! ```
//! use fleet_lifecycle::api::FleetConfig;
//! use fleet_lifecycle::ingest::load_fleet_json_str;
//! use fleet_lifecycle::services::compute_fleet_report;
//!
//! let assets = load_fleet_json_str(r#"[{
//!     "id": "CC2019216", "type": "Lokomotif", "ageYears": 39, "economicLife": 30,
//!     "canBeRejuvenated": false, "healthStatus": "critical",
//!     "lastMaintenance": "2024-05-12", "costProjection": 23, "availability": 0.63
//! }]"#).unwrap();
//!
//! let report = compute_fleet_report(&assets, &FleetConfig::default());
//! assert_eq!(report.summary.replacement_needed, 1);
//! assert_eq!(report.notifications[0].due_label, "immediate");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod services;
pub mod views;
