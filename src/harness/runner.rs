//! Blocking runner for the benchmark test suite.
//!
//! The harness is started once, its whole stdout is buffered, and only then
//! does parsing begin. A process that cannot be started aborts the run; a
//! process that exits non-zero still has its stdout processed.

use crate::utils::config::{HARNESS_ARGS, HARNESS_PROGRAM, STDERR_TAIL_LINES};
use crate::utils::error::HarnessError;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Source of raw benchmark output
pub trait BenchmarkHarness {
    /// Run the benchmarks to completion and return everything they printed
    fn run(&self) -> Result<String, HarnessError>;
}

/// Runs an external command and captures its stdout
#[derive(Debug, Clone)]
pub struct CommandHarness {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandHarness {
    pub fn new(program: impl Into<String>, args: &[&str], working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// The node crate's benchmark test target, run single-threaded
    pub fn cargo_benchmarks(working_dir: impl Into<PathBuf>) -> Self {
        Self::new(HARNESS_PROGRAM, HARNESS_ARGS, working_dir)
    }

    /// Command line as it would be typed
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl BenchmarkHarness for CommandHarness {
    fn run(&self) -> Result<String, HarnessError> {
        if !self.working_dir.is_dir() {
            return Err(HarnessError::MissingWorkingDir(
                self.working_dir.display().to_string(),
            ));
        }

        info!("Running benchmarks... this may take a minute.");
        debug!("Harness: `{}` in {}", self.command_line(), self.working_dir.display());

        let start = Instant::now();
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "Harness exited with {}; processing captured output anyway. stderr tail:\n{}",
                output.status,
                tail_lines(&stderr, STDERR_TAIL_LINES)
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "Harness finished in {:.2}s ({} bytes of output)",
            start.elapsed().as_secs_f64(),
            stdout.len()
        );

        Ok(stdout)
    }
}

/// Replays fixed text, for tests and offline rendering
#[derive(Debug, Clone, Default)]
pub struct StaticHarness {
    output: String,
}

impl StaticHarness {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl BenchmarkHarness for StaticHarness {
    fn run(&self) -> Result<String, HarnessError> {
        Ok(self.output.clone())
    }
}

/// Last `count` lines of `text`
///
/// **Private** - keeps harness failure notices short
fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
