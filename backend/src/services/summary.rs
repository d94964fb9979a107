use crate::api::{Asset, ClassificationThresholds, FleetSummary};

/// Mean availability over the fleet, or `None` for an empty fleet.
pub fn mean_availability(assets: &[Asset]) -> Option<f64> {
    if assets.is_empty() {
        return None;
    }
    let total: f64 = assets.iter().map(|a| a.availability).sum();
    Some(total / assets.len() as f64)
}

/// Compute the headline counters.
///
/// An empty fleet yields the zero-value summary.
pub fn compute_summary(assets: &[Asset], thresholds: &ClassificationThresholds) -> FleetSummary {
    let rejuvenation_needed = assets
        .iter()
        .filter(|a| {
            a.can_be_rejuvenated && a.within_action_window(thresholds.rejuvenation_margin_years)
        })
        .count();

    let replacement_needed = assets
        .iter()
        .filter(|a| {
            !a.can_be_rejuvenated && a.within_action_window(thresholds.replacement_margin_years)
        })
        .count();

    let protected_value: f64 = assets
        .iter()
        .filter(|a| a.can_be_rejuvenated)
        .map(|a| a.cost_projection)
        .sum();

    // availability is within [0, 1], so the rounded percentage fits in 0..=100
    let availability_pct = mean_availability(assets)
        .map(|mean| (mean * 100.0).round() as u32)
        .unwrap_or(0);

    FleetSummary {
        total_assets: assets.len(),
        rejuvenation_needed,
        replacement_needed,
        protected_value,
        availability_pct,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
