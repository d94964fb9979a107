//! Public API surface of the crate.
//!
//! Consolidates the input model, the configuration types and the view-model
//! types handed to the dashboard renderer. Everything here derives
//! Serialize/Deserialize.

pub use crate::config::AgeBucket;
pub use crate::config::CapexPlanPoint;
pub use crate::config::ClassificationThresholds;
pub use crate::config::FleetConfig;
pub use crate::config::NotificationOrder;
pub use crate::models::Asset;
pub use crate::models::AssetId;
pub use crate::models::HealthStatus;
pub use crate::views::age_distribution::AgeHistogram;
pub use crate::views::age_distribution::AgeHistogramEntry;
pub use crate::views::badge::BadgeVariant;
pub use crate::views::badge::HealthBadge;
pub use crate::views::capex::CapexChart;
pub use crate::views::capex::ChartPoint;
pub use crate::views::notifications::Notification;
pub use crate::views::notifications::Severity;
pub use crate::views::priority::PriorityRow;
pub use crate::views::report::FleetReport;
pub use crate::views::summary::FleetSummary;
