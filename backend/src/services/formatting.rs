//! Deterministic presentation helpers.
//!
//! Pure functions of their input; the renderer calls them instead of carrying
//! its own lookup tables.

use crate::api::{BadgeVariant, HealthBadge, HealthStatus};

/// Badge label and tone for a health status.
pub fn health_badge(status: HealthStatus) -> HealthBadge {
    let (label, variant) = match status {
        HealthStatus::Stable => ("Stable", BadgeVariant::Success),
        HealthStatus::Warning => ("Needs Monitoring", BadgeVariant::Warning),
        HealthStatus::Critical => ("Critical", BadgeVariant::Critical),
        HealthStatus::Improving => ("Recovering", BadgeVariant::Default),
    };
    HealthBadge {
        label: label.to_string(),
        variant,
    }
}

/// Tone of the next-action badge: critical when the action is a replacement.
pub fn action_variant(next_action: &str) -> BadgeVariant {
    let action = next_action.to_lowercase();
    if action.contains("ganti") || action.contains("replace") {
        BadgeVariant::Critical
    } else {
        BadgeVariant::Warning
    }
}

/// Format an amount in billions of rupiah, e.g. `1234.56` -> `"Rp 1.234,6 M"`.
///
/// Indonesian grouping: `.` separates thousands, `,` the single fractional
/// digit, which is dropped when zero.
pub fn format_billion(value: f64) -> String {
    if !value.is_finite() {
        return "Rp - M".to_string();
    }

    let tenths = (value.abs() * 10.0).round() as u64;
    let whole = tenths / 10;
    let fraction = tenths % 10;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("Rp {}{} M", sign, grouped)
    } else {
        format!("Rp {}{},{} M", sign, grouped, fraction)
    }
}

/// Clamp a progress value to the 0-100 range. NaN renders as empty.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
