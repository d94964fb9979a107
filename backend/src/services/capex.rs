use crate::api::{CapexChart, CapexPlanPoint, ChartPoint};

/// Project the capex plan onto a 0-100 sparkline viewbox.
///
/// Points are spread evenly along x; a single point sits at `x = 0`. The
/// largest value touches the top (`y = 0`); when no value is positive every
/// point lies on the baseline `y = 100`.
pub fn compute_capex_chart(plan: &[CapexPlanPoint]) -> CapexChart {
    if plan.is_empty() {
        return CapexChart::default();
    }

    let max_value = plan
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (plan.len() - 1) as f64;

    let points: Vec<ChartPoint> = plan
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let x = if span > 0.0 { index as f64 / span * 100.0 } else { 0.0 };
            let y = if max_value > 0.0 {
                100.0 - p.value / max_value * 100.0
            } else {
                100.0
            };
            ChartPoint { x, y }
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let area = format!("0,100 {} 100,100", polyline);

    CapexChart {
        labels: plan.iter().map(|p| p.label.clone()).collect(),
        values: plan.iter().map(|p| p.value).collect(),
        points,
        max_value,
        polyline,
        area,
    }
}
