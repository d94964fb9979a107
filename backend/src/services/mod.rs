//! Service layer: the fleet analytics.
//!
//! Every function here is a pure, synchronous transform from a borrowed asset
//! slice (plus configuration) to a view-model value. Assets are never mutated
//! and no state is kept between calls, so concurrent callers need no locking.

pub mod capex;
pub mod formatting;
pub mod histogram;
pub mod notifications;
pub mod priority;
pub mod report;
pub mod summary;

pub use capex::compute_capex_chart;
pub use histogram::compute_age_histogram;
pub use notifications::{
    classify_severity, compute_notifications, compute_ordered_notifications, sort_by_severity,
};
pub use priority::compute_priority_table;
pub use report::compute_fleet_report;
pub use summary::{compute_summary, mean_availability};
