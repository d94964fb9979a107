use serde::{Deserialize, Serialize};

/// Asset count for one age bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeHistogramEntry {
    pub bucket_label: String,
    pub count: usize,
}

/// Age histogram in bucket order, youngest to oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeHistogram {
    pub entries: Vec<AgeHistogramEntry>,
}

impl AgeHistogram {
    /// Largest bucket count, floored at 1 so bar widths never divide by zero.
    pub fn highest_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0).max(1)
    }

    /// Width of a bar relative to the largest bucket, in percent.
    pub fn bar_width_pct(&self, count: usize) -> f64 {
        count as f64 / self.highest_count() as f64 * 100.0
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(counts: &[usize]) -> AgeHistogram {
        AgeHistogram {
            entries: counts
                .iter()
                .enumerate()
                .map(|(i, &count)| AgeHistogramEntry {
                    bucket_label: format!("bucket-{}", i),
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_bar_width_relative_to_highest() {
        let h = histogram(&[1, 1, 0, 4]);
        assert_eq!(h.highest_count(), 4);
        assert_eq!(h.bar_width_pct(4), 100.0);
        assert_eq!(h.bar_width_pct(1), 25.0);
        assert_eq!(h.total(), 6);
    }

    #[test]
    fn test_all_zero_histogram_floors_highest() {
        let h = histogram(&[0, 0]);
        assert_eq!(h.highest_count(), 1);
        assert_eq!(h.bar_width_pct(0), 0.0);
        assert_eq!(AgeHistogram::default().highest_count(), 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_value(histogram(&[2])).unwrap();
        assert_eq!(json[0]["bucketLabel"], "bucket-0");
        assert_eq!(json[0]["count"], 2);
    }
}
