use super::capex::compute_capex_chart;
use super::histogram::compute_age_histogram;
use super::notifications::compute_ordered_notifications;
use super::priority::compute_priority_table;
use super::summary::compute_summary;
use crate::api::{Asset, FleetConfig, FleetReport};

/// Compute the complete dashboard view model.
///
/// Pure function of `assets` and `config`; nothing is cached between calls.
pub fn compute_fleet_report(assets: &[Asset], config: &FleetConfig) -> FleetReport {
    let summary = compute_summary(assets, &config.thresholds);
    let age_histogram = compute_age_histogram(assets, &config.age_buckets);
    let notifications =
        compute_ordered_notifications(assets, &config.thresholds, config.notifications.order);
    let capex = compute_capex_chart(&config.capex_plan);
    let priority_table = compute_priority_table(assets);

    log::debug!(
        "Fleet report: total={}, rejuvenation={}, replacement={}, notifications={}",
        summary.total_assets,
        summary.rejuvenation_needed,
        summary.replacement_needed,
        notifications.len()
    );

    FleetReport {
        summary,
        age_histogram,
        notifications,
        capex,
        priority_table,
    }
}
