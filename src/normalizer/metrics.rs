//! Summary statistics over a normalized dataset.
//!
//! Summaries are logged after normalization and optionally printed as a
//! table at the end of a run.

use super::records::BenchmarkRecord;
use super::table::Dataset;
use crate::parser::BenchmarkKind;
use log::debug;

/// Distribution of the measured value of one dataset
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub kind: BenchmarkKind,

    /// Number of retained rows
    pub rows: usize,

    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,

    /// Tail percentiles, only tracked for latency
    pub p90: Option<f64>,
    pub p99: Option<f64>,
}

impl DatasetSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the summary table
    pub fn summary(&self) -> String {
        let mut text = format!(
            "{}: {} rows | Min: {:.2} | Max: {:.2} | Mean: {:.2} | Median: {:.2}",
            self.kind, self.rows, self.min, self.max, self.mean, self.median
        );
        if let (Some(p90), Some(p99)) = (self.p90, self.p99) {
            text.push_str(&format!(" | p90: {:.2} | p99: {:.2}", p90, p99));
        }
        text
    }
}

/// Compute the summary of a dataset
///
/// **Public** - main entry point for metrics
///
/// # Returns
/// `None` for an empty dataset
pub fn summarize<R: BenchmarkRecord>(dataset: &Dataset<R>) -> Option<DatasetSummary> {
    if dataset.is_empty() {
        return None;
    }

    let mut values: Vec<f64> = dataset.rows.iter().map(R::measured_value).collect();
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (values[count / 2 - 1] + values[count / 2]) / 2.0
    } else {
        values[count / 2]
    };

    let (p90, p99) = if R::KIND == BenchmarkKind::LatencyCdf {
        (Some(percentile(&values, 90.0)), Some(percentile(&values, 99.0)))
    } else {
        (None, None)
    };

    debug!("Summarized {} values for {}", count, R::KIND);

    Some(DatasetSummary {
        kind: R::KIND,
        rows: count,
        min: values[0],
        max: values[count - 1],
        mean,
        median,
        p90,
        p99,
    })
}

/// Nearest-rank percentile over sorted, non-empty values
///
/// **Private** - internal helper for summarize
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::records::{LatencySample, ScalabilityPoint};

    #[test]
    fn test_summarize_empty() {
        let dataset: Dataset<ScalabilityPoint> = Dataset::new(vec![]);
        assert!(summarize(&dataset).is_none());
    }

    #[test]
    fn test_summarize_scalability() {
        let dataset = Dataset::new(vec![
            ScalabilityPoint { nodes: 10, avg_hops: 2.0 },
            ScalabilityPoint { nodes: 20, avg_hops: 4.0 },
            ScalabilityPoint { nodes: 30, avg_hops: 3.0 },
        ]);
        let summary = summarize(&dataset).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
        assert!(summary.p90.is_none());
    }

    #[test]
    fn test_latency_percentiles() {
        let rows = (1..=100).map(|v| LatencySample { latency_us: v as f64 }).collect();
        let summary = summarize(&Dataset::new(rows)).unwrap();
        assert_eq!(summary.median, 50.5);
        assert_eq!(summary.p90, Some(90.0));
        assert_eq!(summary.p99, Some(99.0));
        assert!(summary.summary().contains("p99: 99.00"));
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 99.0), 7.0);
    }
}
