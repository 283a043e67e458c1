mod common;

use chord_bench_viz::chart::{build_chart, ecdf_points, render_svg, Series};
use chord_bench_viz::normalizer::{
    normalize, Dataset, LatencySample, LoadRecord, ReplicationTrial, ScalabilityPoint,
};
use chord_bench_viz::parser::{extract_section, BenchmarkKind};
use common::FULL_OUTPUT;
use pretty_assertions::assert_eq;

#[test]
fn test_scalability_chart_spec() {
    let dataset = Dataset::new(vec![
        ScalabilityPoint { nodes: 4, avg_hops: 2.1 },
        ScalabilityPoint { nodes: 8, avg_hops: 3.0 },
    ]);
    let spec = build_chart(&dataset).unwrap();

    assert_eq!(spec.kind, BenchmarkKind::Scalability);
    assert_eq!(spec.x_label, "Number of Nodes");
    assert_eq!(spec.y_label, "Average Hops");
    assert!(spec.grid);
    assert_eq!(spec.y_floor, None);
    assert_eq!(
        spec.series,
        Series::Line {
            points: vec![(4.0, 2.1), (8.0, 3.0)],
            markers: true,
        }
    );
}

#[test]
fn test_load_balancing_categories_in_dataset_order() {
    let raw = "=== Benchmark 2: Load Balancing ===\nNode_ID,Key_Count\nz9y8x7w6v5,5\na1b2c3d4e5,10\n";
    let payload = extract_section(raw, &BenchmarkKind::LoadBalancing.spec());
    let dataset = normalize::<LoadRecord>(payload.as_ref()).unwrap();
    let spec = build_chart(&dataset).unwrap();

    match spec.series {
        Series::Bars {
            categories,
            values,
            color,
        } => {
            assert_eq!(categories, vec!["a1b2c3d4...", "z9y8x7w6..."]);
            assert_eq!(values, vec![10.0, 5.0]);
            assert_eq!(color, "rgb(135, 206, 235)");
        }
        other => panic!("expected bars, got {:?}", other),
    }
    assert_eq!(spec.label_rotation, 45.0);
}

#[test]
fn test_replication_chart_clamps_floor() {
    let dataset = Dataset::new(vec![
        ReplicationTrial { trial: 0, delay_ms: 12.0 },
        ReplicationTrial { trial: 1, delay_ms: 15.0 },
    ]);
    let spec = build_chart(&dataset).unwrap();
    assert_eq!(spec.y_floor, Some(0.0));
    assert_eq!(spec.title, "Replication Delay per Trial");
}

#[test]
fn test_latency_chart_is_ecdf() {
    let dataset = Dataset::new(vec![
        LatencySample { latency_us: 300.0 },
        LatencySample { latency_us: 100.0 },
        LatencySample { latency_us: 200.0 },
        LatencySample { latency_us: 400.0 },
    ]);
    let spec = build_chart(&dataset).unwrap();
    assert_eq!(
        spec.series,
        Series::Step {
            points: vec![(100.0, 0.25), (200.0, 0.5), (300.0, 0.75), (400.0, 1.0)],
        }
    );
}

#[test]
fn test_ecdf_ends_at_one() {
    let points = ecdf_points(&[5.0, 1.0, 5.0, 3.0, 9.0]);
    assert_eq!(points.last().map(|p| p.1), Some(1.0));
    assert!(points.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
}

#[test]
fn test_svg_for_every_kind_in_full_output() {
    fn svg_for<R: chord_bench_viz::chart::Chartable>() -> String {
        let payload = extract_section(FULL_OUTPUT, &R::KIND.spec());
        let dataset = normalize::<R>(payload.as_ref()).unwrap();
        render_svg(&build_chart(&dataset).unwrap())
    }

    let scalability = svg_for::<ScalabilityPoint>();
    assert!(scalability.contains("Scalability: Average Hops vs Network Size"));
    assert_eq!(scalability.matches("<circle").count(), 3);

    let load = svg_for::<LoadRecord>();
    assert!(load.matches("<rect").count() >= 3);
    assert!(load.contains("18446744..."));

    let replication = svg_for::<ReplicationTrial>();
    assert!(replication.contains("Delay (milliseconds)"));

    let latency = svg_for::<LatencySample>();
    assert!(latency.contains("<path"));
    assert!(latency.contains("Proportion of Requests &lt;= x"));
}
