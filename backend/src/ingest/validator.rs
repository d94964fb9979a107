//! Asset invariant checks.
//!
//! Collects every problem in a fleet instead of stopping at the first one, so a
//! data owner can fix a file in a single pass. [`ingest_records`] turns a
//! failed report into [`FleetError::InvalidAsset`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::parser::AssetRecord;
use crate::error::{ErrorContext, FleetError, FleetResult};
use crate::models::{Asset, AssetId, HealthStatus};

/// One invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub asset_id: String,
    pub field: String,
    pub message: String,
}

/// Outcome of validating a fleet.
///
/// Issues make the fleet unusable; warnings are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub total_records: usize,
    pub issues: Vec<ValidationIssue>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn add_issue(&mut self, asset_id: &str, field: &str, message: String) {
        self.issues.push(ValidationIssue {
            asset_id: asset_id.to_string(),
            field: field.to_string(),
            message,
        });
    }
}

pub struct FleetValidator;

impl FleetValidator {
    /// Check every record against the asset invariants.
    ///
    /// - `id` non-empty and unique (the second occurrence is reported)
    /// - `ageYears >= 0`, `economicLife > 0`
    /// - `availability` within `[0, 1]`
    /// - `costProjection >= 0` and finite
    pub fn validate_records(records: &[AssetRecord]) -> ValidationReport {
        let mut report = ValidationReport {
            total_records: records.len(),
            ..Default::default()
        };

        let mut seen: HashSet<&str> = HashSet::new();
        for record in records {
            if record.id.trim().is_empty() {
                report.add_issue(&record.id, "id", "Asset id must not be empty".to_string());
            } else if !seen.insert(record.id.as_str()) {
                report.add_issue(&record.id, "id", format!("Duplicate asset id '{}'", record.id));
            }
            Self::validate_record(record, &mut report);
        }

        if records.is_empty() {
            report.warnings.push("Fleet contains no assets".to_string());
        }

        report
    }

    fn validate_record(record: &AssetRecord, report: &mut ValidationReport) {
        let id = record.id.as_str();

        if record.age_years < 0 {
            report.add_issue(id, "ageYears", format!("Age must be >= 0, got {}", record.age_years));
        } else if u32::try_from(record.age_years).is_err() {
            report.add_issue(id, "ageYears", format!("Age out of range: {}", record.age_years));
        }

        if record.economic_life <= 0 {
            report.add_issue(
                id,
                "economicLife",
                format!("Economic life must be > 0, got {}", record.economic_life),
            );
        } else if u32::try_from(record.economic_life).is_err() {
            report.add_issue(
                id,
                "economicLife",
                format!("Economic life out of range: {}", record.economic_life),
            );
        }

        if !(0.0..=1.0).contains(&record.availability) {
            report.add_issue(
                id,
                "availability",
                format!("Availability must be within [0, 1], got {}", record.availability),
            );
        }

        if !record.cost_projection.is_finite() || record.cost_projection < 0.0 {
            report.add_issue(
                id,
                "costProjection",
                format!("Cost projection must be >= 0, got {}", record.cost_projection),
            );
        }

        if record.health_status == HealthStatus::Stable && record.age_years > record.economic_life {
            report.warnings.push(format!(
                "Asset '{}' is past its economic life but reported as stable",
                id
            ));
        }
    }
}

/// Validate records and convert them into assets.
///
/// Fails with [`FleetError::InvalidAsset`] describing the first issue; the
/// context details carry the total number of issues. An empty fleet is accepted.
pub fn ingest_records(records: Vec<AssetRecord>) -> FleetResult<Vec<Asset>> {
    let report = FleetValidator::validate_records(&records);

    for warning in &report.warnings {
        log::warn!("{}", warning);
    }

    if let Some(first) = report.issues.first() {
        return Err(FleetError::invalid_asset_with_context(
            first.message.clone(),
            ErrorContext::new("ingest_records")
                .with_asset_id(&first.asset_id)
                .with_field(&first.field)
                .with_details(format!("{} issue(s) in {} record(s)", report.issues.len(), report.total_records)),
        ));
    }

    records.into_iter().map(into_asset).collect()
}

fn into_asset(record: AssetRecord) -> FleetResult<Asset> {
    let out_of_range = |field: &str| {
        FleetError::invalid_asset_with_context(
            format!("{} out of range", field),
            ErrorContext::new("ingest_records")
                .with_asset_id(&record.id)
                .with_field(field),
        )
    };
    let age_years = u32::try_from(record.age_years).map_err(|_| out_of_range("ageYears"))?;
    let economic_life =
        u32::try_from(record.economic_life).map_err(|_| out_of_range("economicLife"))?;

    let name = if record.name.is_empty() {
        record.id.clone()
    } else {
        record.name
    };

    Ok(Asset {
        id: AssetId::new(record.id),
        name,
        asset_type: record.asset_type,
        depot: record.depot,
        age_years,
        economic_life,
        can_be_rejuvenated: record.can_be_rejuvenated,
        health_status: record.health_status,
        next_action: record.next_action,
        last_maintenance: record.last_maintenance,
        cost_projection: record.cost_projection,
        availability: record.availability,
        notes: record.notes,
    })
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;
