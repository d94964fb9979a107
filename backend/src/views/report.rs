use serde::{Deserialize, Serialize};

use super::age_distribution::AgeHistogram;
use super::capex::CapexChart;
use super::notifications::Notification;
use super::priority::PriorityRow;
use super::summary::FleetSummary;

/// Complete dashboard view model. Recomputed from the asset list on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetReport {
    pub summary: FleetSummary,
    pub age_histogram: AgeHistogram,
    pub notifications: Vec<Notification>,
    pub capex: CapexChart,
    pub priority_table: Vec<PriorityRow>,
}
