//! Ingestion boundary: fleet files in, validated assets out.
//!
//! Raw records keep signed integers so that a negative age or life is reported
//! as an invalid asset rather than a parse failure. Once a record passes
//! [`validator::FleetValidator`] it becomes an [`Asset`](crate::models::Asset)
//! whose invariants the analytics rely on.

pub mod parser;
pub mod validator;

pub use parser::{
    load_fleet_file, parse_fleet_json_str, parse_fleet_toml_str, AssetRecord,
};
pub use validator::{ingest_records, FleetValidator, ValidationIssue, ValidationReport};

use crate::error::FleetResult;
use crate::models::Asset;

/// Parse and validate a fleet from JSON text.
pub fn load_fleet_json_str(json: &str) -> FleetResult<Vec<Asset>> {
    ingest_records(parse_fleet_json_str(json)?)
}

/// Parse and validate a fleet from TOML text (`[[assets]]` tables).
pub fn load_fleet_toml_str(toml: &str) -> FleetResult<Vec<Asset>> {
    ingest_records(parse_fleet_toml_str(toml)?)
}
