use crate::api::{Asset, ClassificationThresholds, HealthStatus, Notification, NotificationOrder, Severity};

/// Severity of a notification for an asset inside its action window.
///
/// First match wins: critical health, then rejuvenable, then everything else.
pub fn classify_severity(asset: &Asset) -> Severity {
    if asset.health_status == HealthStatus::Critical {
        Severity::Critical
    } else if asset.can_be_rejuvenated {
        Severity::Warning
    } else {
        Severity::Muted
    }
}

/// Build lifecycle notifications for assets within the replacement window.
///
/// Matching assets keep their input (registration) order.
pub fn compute_notifications(
    assets: &[Asset],
    thresholds: &ClassificationThresholds,
) -> Vec<Notification> {
    assets
        .iter()
        .filter(|a| a.within_action_window(thresholds.replacement_margin_years))
        .map(|a| {
            let severity = classify_severity(a);
            Notification {
                asset_id: a.id.clone(),
                asset_label: a.display_label(),
                depot: a.depot.clone(),
                severity,
                due_label: severity.due_label().to_string(),
                action: a.next_action.clone(),
                notes: a.notes.clone(),
            }
        })
        .collect()
}

/// Stable sort, most urgent first. Ties keep registration order.
pub fn sort_by_severity(notifications: &mut [Notification]) {
    notifications.sort_by_key(|n| n.severity);
}

/// Notifications in the requested order.
pub fn compute_ordered_notifications(
    assets: &[Asset],
    thresholds: &ClassificationThresholds,
    order: NotificationOrder,
) -> Vec<Notification> {
    let mut notifications = compute_notifications(assets, thresholds);
    if order == NotificationOrder::Severity {
        sort_by_severity(&mut notifications);
    }
    notifications
}

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod notifications_tests;
