//! Run and render command implementations.
//!
//! The run command:
//! 1. Invokes the benchmark harness and buffers its output
//! 2. Persists the output verbatim
//! 3. Extracts, normalizes and charts every benchmark kind
//!
//! The render command skips steps 1 and 2 and reads a saved dump instead.

use super::models::RunReport;
use super::pipeline::render_all;
use crate::harness::BenchmarkHarness;
use crate::output::{read_raw_output, write_raw_output, FileSink};
use crate::utils::config::RunConfig;
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the full run
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `config` - Output and harness locations
/// * `harness` - Source of the raw benchmark output
///
/// # Errors
/// * Harness could not be started
/// * Output directory or raw dump could not be written
///
/// Chart failures do not end the run; they are listed in the report.
pub fn execute_run(config: &RunConfig, harness: &dyn BenchmarkHarness) -> Result<RunReport> {
    let start_time = Instant::now();

    let output_dir = prepare_output_dir(&config.output_dir)?;

    info!("Step 1/3: Running benchmark harness...");
    let raw = harness.run().context("Failed to run benchmark harness")?;

    info!("Step 2/3: Saving raw output...");
    let raw_path = config.raw_output_path();
    write_raw_output(&raw, &raw_path).context("Failed to write raw harness output")?;

    info!("Step 3/3: Extracting benchmarks and rendering charts...");
    let mut sink = FileSink::new(&output_dir);
    let kinds = render_all(&raw, &mut sink);

    info!("Run completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(RunReport {
        output_dir,
        raw_output: Some(raw_path),
        kinds,
    })
}

/// Render charts from a previously saved dump
///
/// **Public** - entry point for the render subcommand
pub fn execute_render(config: &RunConfig, input: &Path) -> Result<RunReport> {
    let output_dir = prepare_output_dir(&config.output_dir)?;

    info!("Step 1/2: Reading raw output from {}...", input.display());
    let raw = read_raw_output(input)
        .with_context(|| format!("Failed to read raw output {}", input.display()))?;

    info!("Step 2/2: Extracting benchmarks and rendering charts...");
    let mut sink = FileSink::new(&output_dir);
    let kinds = render_all(&raw, &mut sink);

    Ok(RunReport {
        output_dir,
        raw_output: None,
        kinds,
    })
}

/// Create the results directory if absent and return its absolute path
///
/// **Private** - idempotent, shared by both commands
fn prepare_output_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    std::fs::canonicalize(dir)
        .with_context(|| format!("Failed to resolve output directory {}", dir.display()))
}
