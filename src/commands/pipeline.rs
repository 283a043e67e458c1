//! Per-kind pipeline: extract, normalize, chart.
//!
//! Each kind runs on its own. An absent or empty dataset, or a failed chart,
//! only affects that kind's entry in the report.

use super::models::{KindOutcome, KindReport};
use crate::chart::{build_chart, render_svg, Chartable};
use crate::normalizer::{
    normalize, summarize, Dataset, LatencySample, LoadRecord, ReplicationTrial, ScalabilityPoint,
};
use crate::output::ChartSink;
use crate::parser::{extract_section, scan_anchors, BenchmarkKind};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Render one dataset through a sink
///
/// **Public** - the chart step of the pipeline
///
/// # Returns
/// * `Ok(Some(path))` - chart written
/// * `Ok(None)` - dataset absent or empty, nothing written
pub fn render_chart<R: Chartable>(
    dataset: Option<&Dataset<R>>,
    sink: &mut dyn ChartSink,
) -> Result<Option<PathBuf>> {
    let dataset = match dataset {
        Some(dataset) if !dataset.is_empty() => dataset,
        _ => {
            info!("No data for {}", R::KIND);
            return Ok(None);
        }
    };

    let spec = build_chart(dataset)?;
    let svg = render_svg(&spec);
    let path = sink
        .write_chart(R::KIND, &svg)
        .with_context(|| format!("Failed to write {} chart", R::KIND))?;

    info!("✓ {} chart written to: {}", R::KIND, path.display());
    Ok(Some(path))
}

/// Run extraction, normalization and rendering for one record type
///
/// **Public** - one independent pipeline per benchmark kind
pub fn run_pipeline<R: Chartable>(raw: &str, sink: &mut dyn ChartSink) -> KindReport {
    info!("Parsing {} Benchmark...", R::KIND);

    let payload = extract_section(raw, &R::KIND.spec());
    let dataset = normalize::<R>(payload.as_ref());

    let summary = dataset.as_ref().and_then(summarize);
    if let Some(summary) = &summary {
        info!("{}", summary.summary());
    }

    let outcome = match render_chart(dataset.as_ref(), sink) {
        Ok(Some(path)) => KindOutcome::Written(path),
        Ok(None) if dataset.is_none() => KindOutcome::Absent,
        Ok(None) => KindOutcome::Empty,
        Err(e) => {
            warn!("{} chart failed: {:#}", R::KIND, e);
            KindOutcome::Failed(format!("{:#}", e))
        }
    };

    KindReport {
        kind: R::KIND,
        outcome,
        summary,
    }
}

/// Run all four pipelines over the raw output, in order
///
/// **Public** - shared by the run and render commands
pub fn render_all(raw: &str, sink: &mut dyn ChartSink) -> Vec<KindReport> {
    log_unused_anchors(raw);

    let mut reports = Vec::with_capacity(BenchmarkKind::ALL.len());
    for kind in BenchmarkKind::ALL {
        let report = match kind {
            BenchmarkKind::Scalability => run_pipeline::<ScalabilityPoint>(raw, sink),
            BenchmarkKind::LoadBalancing => run_pipeline::<LoadRecord>(raw, sink),
            BenchmarkKind::ReplicationDelay => run_pipeline::<ReplicationTrial>(raw, sink),
            BenchmarkKind::LatencyCdf => run_pipeline::<LatencySample>(raw, sink),
        };
        reports.push(report);
    }
    reports
}

/// Note benchmark sections that no chart consumes
///
/// **Private** - diagnostic only
fn log_unused_anchors(raw: &str) {
    for anchor in scan_anchors(raw) {
        let consumed = BenchmarkKind::ALL
            .iter()
            .any(|kind| kind.spec().matches_anchor(anchor.number, &anchor.title));
        if !consumed {
            debug!(
                "Section `Benchmark {}: {}` (line {}) has no chart, ignoring",
                anchor.number,
                anchor.title,
                anchor.line + 1
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use crate::utils::error::OutputError;

    struct FailingSink;

    impl ChartSink for FailingSink {
        fn write_chart(&mut self, _kind: BenchmarkKind, _svg: &str) -> Result<PathBuf, OutputError> {
            Err(OutputError::InvalidPath("read-only".to_string()))
        }
    }

    #[test]
    fn test_render_chart_absent_writes_nothing() {
        let mut sink = MemorySink::new();
        let written = render_chart::<ScalabilityPoint>(None, &mut sink).unwrap();
        assert!(written.is_none());
        assert!(sink.charts.is_empty());
    }

    #[test]
    fn test_render_chart_empty_writes_nothing() {
        let mut sink = MemorySink::new();
        let dataset: Dataset<LatencySample> = Dataset::new(vec![]);
        assert!(render_chart(Some(&dataset), &mut sink).unwrap().is_none());
        assert!(sink.charts.is_empty());
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let mut sink = MemorySink::new();
        let absent = run_pipeline::<ReplicationTrial>("nothing here\n", &mut sink);
        let empty = run_pipeline::<ReplicationTrial>(
            "=== Benchmark 4: Replication Delay ===\nTrial,Delay_ms\nAverage Replication Delay: 0.00 ms\n",
            &mut sink,
        );
        assert_eq!(absent.outcome, KindOutcome::Absent);
        assert_eq!(empty.outcome, KindOutcome::Empty);
    }

    #[test]
    fn test_sink_failure_is_isolated() {
        let raw = "=== Benchmark 5: Latency CDF ===\nLatency_us\n10\n20\n";
        let mut sink = FailingSink;
        let reports = render_all(raw, &mut sink);
        assert_eq!(reports.len(), 4);
        assert!(matches!(reports[3].outcome, KindOutcome::Failed(_)));
        assert_eq!(reports[0].outcome, KindOutcome::Absent);
    }
}
