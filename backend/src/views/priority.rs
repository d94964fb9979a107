use serde::{Deserialize, Serialize};

use super::badge::{BadgeVariant, HealthBadge};
use crate::models::AssetId;

/// One row of the priority table (rejuvenate vs. replace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityRow {
    pub asset_id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub depot: String,
    pub age_years: u32,
    pub economic_life: u32,
    pub health: HealthBadge,
    pub next_action: String,
    pub action_variant: BadgeVariant,
    /// Availability as a percentage clamped to 0-100
    pub availability_pct: f64,
    /// Formatted cost projection ("Rp 23 M")
    pub cost_label: String,
}
