use serde::{Deserialize, Serialize};

use super::badge::BadgeVariant;
use crate::models::AssetId;

/// Notification urgency tier.
///
/// Variants are declared most urgent first, so the derived `Ord` sorts
/// critical before warning before muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Muted,
}

impl Severity {
    /// Due label shown next to the notification.
    pub fn due_label(&self) -> &'static str {
        match self {
            Severity::Critical => "immediate",
            Severity::Warning => "14 days",
            Severity::Muted => "30 days",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Severity::Critical => BadgeVariant::Critical,
            Severity::Warning => BadgeVariant::Warning,
            Severity::Muted => BadgeVariant::Muted,
        }
    }
}

/// Lifecycle signal for one asset inside its action window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub asset_id: AssetId,
    /// "name, type"
    pub asset_label: String,
    pub depot: String,
    pub severity: Severity,
    pub due_label: String,
    pub action: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_most_urgent_first() {
        let mut tiers = vec![Severity::Muted, Severity::Critical, Severity::Warning];
        tiers.sort();
        assert_eq!(tiers, vec![Severity::Critical, Severity::Warning, Severity::Muted]);
    }

    #[test]
    fn test_due_labels() {
        assert_eq!(Severity::Critical.due_label(), "immediate");
        assert_eq!(Severity::Warning.due_label(), "14 days");
        assert_eq!(Severity::Muted.due_label(), "30 days");
    }

    #[test]
    fn test_badge_variant_matches_severity() {
        assert_eq!(Severity::Muted.badge_variant(), BadgeVariant::Muted);
        assert_eq!(Severity::Critical.badge_variant(), BadgeVariant::Critical);
    }
}
