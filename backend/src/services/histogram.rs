use crate::api::{AgeBucket, AgeHistogram, AgeHistogramEntry, Asset};

/// Count assets per age bucket.
///
/// Buckets are emitted in the order given, not sorted by count, so the chart
/// reads youngest to oldest. An asset whose age falls outside every bucket is
/// left out of all counts.
pub fn compute_age_histogram(assets: &[Asset], buckets: &[AgeBucket]) -> AgeHistogram {
    let entries = buckets
        .iter()
        .map(|bucket| AgeHistogramEntry {
            bucket_label: bucket.label.clone(),
            count: assets.iter().filter(|a| bucket.contains(a.age_years)).count(),
        })
        .collect();

    let uncovered = assets
        .iter()
        .filter(|a| !buckets.iter().any(|b| b.contains(a.age_years)))
        .count();
    if uncovered > 0 {
        log::debug!(
            "{} asset(s) fall outside every age bucket and are not counted",
            uncovered
        );
    }

    AgeHistogram { entries }
}
