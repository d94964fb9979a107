mod support;

use fleet_lifecycle::api::{
    AgeBucket, Asset, BadgeVariant, ClassificationThresholds, FleetConfig, FleetSummary,
    HealthStatus, NotificationOrder, Severity,
};
use fleet_lifecycle::services::{
    compute_age_histogram, compute_fleet_report, compute_notifications, compute_summary,
};
use support::{asset, sample_fleet};

fn counts(assets: &[Asset], buckets: &[AgeBucket]) -> Vec<usize> {
    compute_age_histogram(assets, buckets)
        .entries
        .iter()
        .map(|e| e.count)
        .collect()
}

#[test]
fn replacement_candidate_next_to_young_unit() {
    let assets = vec![
        Asset {
            can_be_rejuvenated: false,
            health_status: HealthStatus::Critical,
            cost_projection: 23.0,
            availability: 0.63,
            ..asset("CC2019216", 39, 30)
        },
        Asset {
            can_be_rejuvenated: true,
            health_status: HealthStatus::Stable,
            cost_projection: 2.0,
            availability: 0.97,
            ..asset("K102325", 2, 30)
        },
    ];

    let summary = compute_summary(&assets, &ClassificationThresholds::default());

    assert_eq!(summary.total_assets, 2);
    assert_eq!(summary.replacement_needed, 1);
    assert_eq!(summary.rejuvenation_needed, 0);
    assert_eq!(summary.protected_value, 2.0);
    assert_eq!(summary.availability_pct, 80);
}

#[test]
fn empty_fleet_yields_zero_summary() {
    let summary = compute_summary(&[], &ClassificationThresholds::default());
    assert_eq!(
        summary,
        FleetSummary {
            total_assets: 0,
            rejuvenation_needed: 0,
            replacement_needed: 0,
            protected_value: 0.0,
            availability_pct: 0,
        }
    );
}

#[test]
fn histogram_over_reference_ages() {
    let assets: Vec<Asset> = [39, 39, 40, 2, 34, 16]
        .iter()
        .enumerate()
        .map(|(i, &age)| asset(&format!("unit-{}", i), age, 30))
        .collect();
    let buckets = vec![
        AgeBucket::new("0-15", 0, Some(15)),
        AgeBucket::new("15-25", 15, Some(25)),
        AgeBucket::new("25-30", 25, Some(30)),
        AgeBucket::new("30-200", 30, Some(200)),
    ];

    assert_eq!(counts(&assets, &buckets), vec![1, 1, 0, 4]);
}

#[test]
fn critical_rejuvenable_asset_is_critical() {
    let assets = vec![Asset {
        health_status: HealthStatus::Critical,
        can_be_rejuvenated: true,
        ..asset("K319603", 40, 30)
    }];

    let notifications = compute_notifications(&assets, &ClassificationThresholds::default());

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Critical);
}

#[test]
fn sample_fleet_report() {
    let assets = sample_fleet();
    let report = compute_fleet_report(&assets, &FleetConfig::default());

    assert_eq!(report.summary.total_assets, 6);
    assert_eq!(report.summary.rejuvenation_needed, 2);
    assert_eq!(report.summary.replacement_needed, 2);
    assert_eq!(report.summary.protected_value, 32.0);
    assert_eq!(report.summary.availability_pct, 72);

    let histogram: Vec<usize> = report.age_histogram.entries.iter().map(|e| e.count).collect();
    assert_eq!(histogram, vec![1, 1, 0, 4]);

    let ids: Vec<&str> = report.notifications.iter().map(|n| n.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["CC2019216", "CC2019217", "K319603", "GB258323"]);
    assert!(report.notifications.iter().all(|n| n.due_label == "immediate"));

    assert_eq!(report.priority_table.len(), 6);
    let young = &report.priority_table[3];
    assert_eq!(young.asset_id.as_str(), "K102325");
    assert_eq!(young.health.variant, BadgeVariant::Success);
    assert_eq!(report.priority_table[0].action_variant, BadgeVariant::Critical);
    assert_eq!(report.priority_table[1].action_variant, BadgeVariant::Warning);

    assert_eq!(report.capex.points.len(), 6);
    assert_eq!(report.capex.max_value, 54.0);
}

#[test]
fn severity_order_applies_to_report() {
    let assets = vec![
        Asset {
            can_be_rejuvenated: false,
            ..asset("muted", 35, 30)
        },
        Asset {
            health_status: HealthStatus::Warning,
            ..asset("warning", 35, 30)
        },
        Asset {
            health_status: HealthStatus::Critical,
            ..asset("critical", 35, 30)
        },
    ];
    let mut config = FleetConfig::default();
    config.notifications.order = NotificationOrder::Severity;

    let report = compute_fleet_report(&assets, &config);

    let severities: Vec<Severity> = report.notifications.iter().map(|n| n.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::Warning, Severity::Muted]
    );
}

#[test]
fn report_serializes_for_renderer() {
    let report = compute_fleet_report(&sample_fleet(), &FleetConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["availabilityPct"], 72);
    assert_eq!(json["ageHistogram"][3]["count"], 4);
    assert_eq!(json["notifications"][0]["severity"], "critical");
    assert_eq!(json["notifications"][0]["assetId"], "CC2019216");
    assert_eq!(json["priorityTable"][0]["type"], "Lokomotif");
    assert_eq!(json["capex"]["polyline"].as_str().unwrap().split(' ').count(), 6);
}

#[test]
fn report_is_idempotent() {
    let assets = sample_fleet();
    let config = FleetConfig::default();
    assert_eq!(
        compute_fleet_report(&assets, &config),
        compute_fleet_report(&assets, &config)
    );
}
