use serde::{Deserialize, Serialize};

/// Headline counters of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_assets: usize,
    /// Rejuvenable assets inside the rejuvenation window
    pub rejuvenation_needed: usize,
    /// Non-rejuvenable assets inside the replacement window
    pub replacement_needed: usize,
    /// Summed cost projection of rejuvenable assets (billions)
    pub protected_value: f64,
    /// Mean availability as a rounded percentage, 0 for an empty fleet
    pub availability_pct: u32,
}
