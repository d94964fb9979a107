use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fleet unit identifier (registration number, e.g. "CC2019216").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(value: impl Into<String>) -> Self {
        AssetId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        AssetId(value.to_string())
    }
}

/// Condition reported by the latest inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[serde(alias = "stabil")]
    Stable,
    Warning,
    Critical,
    Improving,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Stable => "stable",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
            HealthStatus::Improving => "improving",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked fleet unit (locomotive, railcar, wagon).
///
/// Values of this type have passed ingestion: `economic_life > 0`,
/// `availability` lies in `[0, 1]` and `cost_projection` is non-negative.
/// Construct them through [`crate::ingest`] when the source is untrusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub depot: String,
    pub age_years: u32,
    /// Service-life threshold in years
    pub economic_life: u32,
    pub can_be_rejuvenated: bool,
    pub health_status: HealthStatus,
    pub next_action: String,
    pub last_maintenance: NaiveDate,
    /// Projected cost in billions of rupiah
    pub cost_projection: f64,
    /// Fraction of time operationally available, 0.0 - 1.0
    pub availability: f64,
    #[serde(default)]
    pub notes: String,
}

impl Asset {
    /// Whether the asset has reached `economic_life - margin_years`.
    ///
    /// Inclusive at the boundary. A margin larger than the economic life
    /// qualifies every asset instead of wrapping around.
    pub fn within_action_window(&self, margin_years: u32) -> bool {
        i64::from(self.age_years) >= i64::from(self.economic_life) - i64::from(margin_years)
    }

    /// Display label used by notification panels ("CC2019216, Lokomotif").
    pub fn display_label(&self) -> String {
        format!("{}, {}", self.name, self.asset_type)
    }
}
