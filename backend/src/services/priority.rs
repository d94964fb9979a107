use super::formatting::{action_variant, clamp_progress, format_billion, health_badge};
use crate::api::{Asset, PriorityRow};

/// One table row per asset, in input order.
pub fn compute_priority_table(assets: &[Asset]) -> Vec<PriorityRow> {
    assets
        .iter()
        .map(|a| PriorityRow {
            asset_id: a.id.clone(),
            name: a.name.clone(),
            asset_type: a.asset_type.clone(),
            depot: a.depot.clone(),
            age_years: a.age_years,
            economic_life: a.economic_life,
            health: health_badge(a.health_status),
            next_action: a.next_action.clone(),
            action_variant: action_variant(&a.next_action),
            availability_pct: clamp_progress(a.availability * 100.0),
            cost_label: format_billion(a.cost_projection),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AssetId, BadgeVariant, HealthStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_priority_row_from_asset() {
        let asset = Asset {
            id: AssetId::new("GB258323"),
            name: "GB258323".to_string(),
            asset_type: "Gerbong Barang".to_string(),
            depot: "Balai Yasa Tegal".to_string(),
            age_years: 34,
            economic_life: 30,
            can_be_rejuvenated: false,
            health_status: HealthStatus::Critical,
            next_action: "Penggantian Unit Baru".to_string(),
            last_maintenance: NaiveDate::from_ymd_opt(2023, 12, 10).unwrap(),
            cost_projection: 18.0,
            availability: 0.5,
            notes: String::new(),
        };

        let rows = compute_priority_table(std::slice::from_ref(&asset));

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.asset_id, asset.id);
        assert_eq!(row.health.variant, BadgeVariant::Critical);
        assert_eq!(row.action_variant, BadgeVariant::Critical);
        assert_eq!(row.availability_pct, 50.0);
        assert_eq!(row.cost_label, "Rp 18 M");
    }

    #[test]
    fn test_empty_table() {
        assert!(compute_priority_table(&[]).is_empty());
    }
}
