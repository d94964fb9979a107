use serde::{Deserialize, Serialize};

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Warning,
    Success,
    Critical,
    Muted,
}

/// Label and tone shown for an asset's health status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBadge {
    pub label: String,
    pub variant: BadgeVariant,
}
