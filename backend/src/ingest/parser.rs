use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::validator::ingest_records;
use crate::error::{ErrorContext, FleetError, FleetResult};
use crate::models::{Asset, HealthStatus};

/// Asset as it appears in a fleet file, before invariants are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub asset_type: String,
    #[serde(default)]
    pub depot: String,
    pub age_years: i64,
    pub economic_life: i64,
    pub can_be_rejuvenated: bool,
    pub health_status: HealthStatus,
    #[serde(default)]
    pub next_action: String,
    pub last_maintenance: NaiveDate,
    pub cost_projection: f64,
    pub availability: f64,
    #[serde(default)]
    pub notes: String,
}

impl From<&Asset> for AssetRecord {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.to_string(),
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            depot: asset.depot.clone(),
            age_years: i64::from(asset.age_years),
            economic_life: i64::from(asset.economic_life),
            can_be_rejuvenated: asset.can_be_rejuvenated,
            health_status: asset.health_status,
            next_action: asset.next_action.clone(),
            last_maintenance: asset.last_maintenance,
            cost_projection: asset.cost_projection,
            availability: asset.availability,
            notes: asset.notes.clone(),
        }
    }
}

#[derive(Deserialize)]
struct FleetDocument {
    #[serde(default)]
    assets: Vec<AssetRecord>,
}

/// Parse asset records from JSON.
///
/// Accepts either a bare array of records or an object with an `assets` array.
pub fn parse_fleet_json_str(json: &str) -> FleetResult<Vec<AssetRecord>> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| FleetError::from(e).with_operation("parse_fleet_json"))?;

    let records: Result<Vec<AssetRecord>, serde_json::Error> = if value.is_array() {
        serde_json::from_value(value)
    } else if value.get("assets").is_some() {
        serde_json::from_value::<FleetDocument>(value).map(|doc| doc.assets)
    } else {
        return Err(FleetError::parse_with_context(
            "Expected an array of assets or an object with an 'assets' field",
            ErrorContext::new("parse_fleet_json"),
        ));
    };

    records.map_err(|e| FleetError::from(e).with_operation("parse_fleet_json"))
}

/// Parse asset records from TOML `[[assets]]` tables.
pub fn parse_fleet_toml_str(content: &str) -> FleetResult<Vec<AssetRecord>> {
    let doc: FleetDocument =
        toml::from_str(content).map_err(|e| FleetError::from(e).with_operation("parse_fleet_toml"))?;
    Ok(doc.assets)
}

/// Read, parse and validate a fleet file. The format follows the extension
/// (`.json` or `.toml`).
pub fn load_fleet_file<P: AsRef<Path>>(path: P) -> FleetResult<Vec<Asset>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        FleetError::io_with_context(
            format!("Failed to read fleet file: {}", e),
            ErrorContext::new("load_fleet_file").with_details(path.display().to_string()),
        )
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let records = match extension.as_deref() {
        Some("json") => parse_fleet_json_str(&content)?,
        Some("toml") => parse_fleet_toml_str(&content)?,
        _ => {
            return Err(FleetError::configuration_with_context(
                "Unsupported fleet file extension (expected .json or .toml)",
                ErrorContext::new("load_fleet_file").with_details(path.display().to_string()),
            ))
        }
    };

    log::debug!("Read {} asset record(s) from {}", records.len(), path.display());
    ingest_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "id": "CC2019216",
        "name": "CC2019216",
        "type": "Lokomotif",
        "depot": "Lokomotif",
        "ageYears": 39,
        "economicLife": 30,
        "canBeRejuvenated": false,
        "healthStatus": "critical",
        "nextAction": "Penggantian Unit Baru",
        "lastMaintenance": "2024-05-12",
        "costProjection": 23,
        "availability": 0.63,
        "notes": "Melebihi umur ekonomis."
    }"#;

    #[test]
    fn test_parse_bare_array() {
        let records = parse_fleet_json_str(&format!("[{}]", RECORD_JSON)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "CC2019216");
        assert_eq!(records[0].asset_type, "Lokomotif");
        assert_eq!(records[0].cost_projection, 23.0);
        assert_eq!(
            records[0].last_maintenance,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
    }

    #[test]
    fn test_parse_wrapped_object() {
        let records = parse_fleet_json_str(&format!("{{\"assets\": [{}]}}", RECORD_JSON)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_negative_age_parses_as_record() {
        let json = format!("[{}]", RECORD_JSON.replace("\"ageYears\": 39", "\"ageYears\": -1"));
        let records = parse_fleet_json_str(&json).unwrap();
        assert_eq!(records[0].age_years, -1);
    }

    #[test]
    fn test_rejects_scalar_document() {
        let err = parse_fleet_json_str("42").unwrap_err();
        assert!(matches!(err, FleetError::ParseError { .. }));
    }

    #[test]
    fn test_rejects_unknown_health_status() {
        let json = format!("[{}]", RECORD_JSON.replace("critical", "broken"));
        let err = parse_fleet_json_str(&json).unwrap_err();
        assert!(matches!(err, FleetError::ParseError { .. }));
        assert_eq!(err.context().operation.as_deref(), Some("parse_fleet_json"));
    }

    #[test]
    fn test_parse_toml_tables() {
        let toml = r#"
[[assets]]
id = "K100802"
type = "Kereta Penumpang"
ageYears = 16
economicLife = 30
canBeRejuvenated = true
healthStatus = "warning"
lastMaintenance = "2024-03-22"
costProjection = 10.0
availability = 0.81
"#;
        let records = parse_fleet_toml_str(toml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].health_status, HealthStatus::Warning);
        assert!(records[0].name.is_empty());
    }

    #[test]
    fn test_record_from_asset_roundtrips_through_ingest() {
        let records = parse_fleet_json_str(&format!("[{}]", RECORD_JSON)).unwrap();
        let assets = ingest_records(records.clone()).unwrap();
        assert_eq!(AssetRecord::from(&assets[0]), records[0]);
    }
}
