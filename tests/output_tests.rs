use chord_bench_viz::output::{
    read_raw_output, validate_path, write_raw_output, write_svg, ChartSink, FileSink,
};
use chord_bench_viz::parser::BenchmarkKind;
use std::path::Path;
use tempfile::NamedTempFile;

const VALID_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <rect x="0" y="0" width="100" height="100" fill="red"/>
</svg>"#;

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_and_read_raw_output() {
    let temp_file = NamedTempFile::new().unwrap();
    let raw = "=== Benchmark 5: Latency CDF ===\nLatency_us\n12\n";

    write_raw_output(raw, temp_file.path()).unwrap();

    assert_eq!(read_raw_output(temp_file.path()).unwrap(), raw);
}

#[test]
fn test_svg_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/chart.svg");

    write_svg(VALID_SVG, &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_file_sink_overwrites_previous_chart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(temp_dir.path());

    sink.write_chart(BenchmarkKind::Scalability, "<svg>old</svg>").unwrap();
    let path = sink.write_chart(BenchmarkKind::Scalability, VALID_SVG).unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), VALID_SVG);
}
