//! Chord Benchmark Visualizer CLI
//!
//! Runs the Chord DHT benchmark suite, saves its output and renders one
//! chart per benchmark kind.

use anyhow::{bail, Result};
use chord_bench_viz::commands::{
    display_version, execute_render, execute_run, format_summary_table, RunReport,
};
use chord_bench_viz::harness::CommandHarness;
use chord_bench_viz::utils::config::{RunConfig, DEFAULT_OUTPUT_DIR};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::warn;
use std::path::PathBuf;

/// Chord Benchmark Visualizer - charts for the DHT benchmark suite
#[derive(Parser, Debug)]
#[command(name = "chord-bench-viz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to a full run)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory receiving the raw output and the charts
    #[arg(short, long, global = true, env = "CHORD_BENCH_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Directory the benchmark suite is run from
    #[arg(long, global = true, env = "CHORD_BENCH_HARNESS_DIR", default_value = ".")]
    harness_dir: PathBuf,

    /// Print a summary table after the run
    #[arg(long, global = true)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the benchmark suite, save its output and render charts
    Run,

    /// Render charts from a previously saved raw output file
    Render {
        /// Raw output file to read
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = RunConfig::new(cli.output_dir)
        .with_harness_dir(cli.harness_dir)
        .with_summary(cli.summary);

    // No subcommand is a full run with the defaults
    let report = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let harness = CommandHarness::cargo_benchmarks(&config.harness_dir);
            let report = execute_run(&config, &harness)?;
            finish(&config, report)?
        }

        Commands::Render { input } => {
            let report = execute_render(&config, &input)?;
            finish(&config, report)?
        }

        Commands::Version => {
            display_version();
            return Ok(());
        }
    };

    println!("Charts saved to {}", report.output_dir.display());
    Ok(())
}

/// Print the optional summary and turn chart failures into an error
///
/// **Private** - shared tail of run and render
fn finish(config: &RunConfig, report: RunReport) -> Result<RunReport> {
    if config.print_summary {
        println!("\n{}", format_summary_table(&report));
    }

    let failed_count = {
        let failed = report.failed();
        for (kind, message) in &failed {
            warn!("{}: {}", kind, message);
        }
        failed.len()
    };
    if failed_count > 0 {
        bail!(
            "{} of {} charts failed; output in {}",
            failed_count,
            report.kinds.len(),
            report.output_dir.display()
        );
    }

    Ok(report)
}
