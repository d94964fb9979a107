#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use fleet_lifecycle::api::{Asset, AssetId, HealthStatus};
use fleet_lifecycle::ingest::load_fleet_file;

/// Path to the bundled sample fleet.
pub fn sample_fleet_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/fleet.json")
}

pub fn sample_fleet() -> Vec<Asset> {
    load_fleet_file(sample_fleet_path()).expect("bundled sample fleet must load")
}

/// Asset with neutral defaults; override fields with struct update syntax.
pub fn asset(id: &str, age_years: u32, economic_life: u32) -> Asset {
    Asset {
        id: AssetId::new(id),
        name: id.to_string(),
        asset_type: "Lokomotif".to_string(),
        depot: "Lokomotif".to_string(),
        age_years,
        economic_life,
        can_be_rejuvenated: true,
        health_status: HealthStatus::Stable,
        next_action: "Perawatan Rutin".to_string(),
        last_maintenance: NaiveDate::from_ymd_opt(2024, 5, 30).expect("valid date"),
        cost_projection: 0.0,
        availability: 1.0,
        notes: String::new(),
    }
}
