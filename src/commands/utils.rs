use super::models::{KindOutcome, RunReport};

/// Format the per-kind results and dataset summaries as a text table
pub fn format_summary_table(report: &RunReport) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(80));
    lines.push("BENCHMARK SUMMARY".to_string());
    lines.push("=".repeat(80));

    for entry in &report.kinds {
        let status = match &entry.outcome {
            KindOutcome::Absent => "no section".to_string(),
            KindOutcome::Empty => "no data rows".to_string(),
            KindOutcome::Written(path) => format!("chart {}", path.display()),
            KindOutcome::Failed(message) => format!("FAILED: {}", message),
        };
        lines.push(format!("{:<20} {}", entry.kind.display_name(), status));
        if let Some(summary) = &entry.summary {
            lines.push(format!("  {}", summary.summary()));
        }
    }

    lines.push("=".repeat(80));
    lines.join("\n")
}

/// Display version information
pub fn display_version() {
    println!("chord-bench-viz v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Charts for the Chord DHT benchmark suite.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::KindReport;
    use crate::parser::BenchmarkKind;
    use std::path::PathBuf;

    #[test]
    fn test_summary_table_lists_every_kind() {
        let report = RunReport {
            output_dir: PathBuf::from("/tmp/results"),
            raw_output: None,
            kinds: vec![
                KindReport {
                    kind: BenchmarkKind::Scalability,
                    outcome: KindOutcome::Written(PathBuf::from("/tmp/results/scalability.svg")),
                    summary: None,
                },
                KindReport {
                    kind: BenchmarkKind::LatencyCdf,
                    outcome: KindOutcome::Absent,
                    summary: None,
                },
            ],
        };

        let table = format_summary_table(&report);

        assert!(table.contains("Scalability"));
        assert!(table.contains("scalability.svg"));
        assert!(table.contains("Latency CDF"));
        assert!(table.contains("no section"));
    }
}
