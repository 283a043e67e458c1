//! Configuration and constants for the CLI.

use std::path::PathBuf;

/// Default results directory, relative to the invocation directory
pub const DEFAULT_OUTPUT_DIR: &str = "benchmark_results";

/// File name of the verbatim harness output inside the results directory
pub const RAW_OUTPUT_FILE: &str = "raw_output.txt";

// The harness is the node crate's benchmark test target. Single-threaded so
// the sections are printed one after another instead of interleaved.
pub const HARNESS_PROGRAM: &str = "cargo";
pub const HARNESS_ARGS: &[&str] = &[
    "test",
    "--test",
    "benchmarks",
    "--",
    "--nocapture",
    "--test-threads=1",
];

/// Number of identifier characters kept in load-balancing axis labels
pub const LABEL_PREFIX_LEN: usize = 8;
pub const LABEL_ELLIPSIS: &str = "...";

/// Every line starting with this marker closes the current section
pub const SECTION_MARKER: &str = "===";

// Chart geometry in pixels
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;
pub const WIDE_CHART_WIDTH: u32 = 1200;

/// Number of lines of harness stderr echoed when it exits non-zero
pub const STDERR_TAIL_LINES: usize = 20;

/// Run-wide settings, built once in main and passed down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory receiving the raw dump and the chart artifacts
    pub output_dir: PathBuf,

    /// Working directory the harness is started in
    pub harness_dir: PathBuf,

    /// Print the dataset summary table after the run
    pub print_summary: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            harness_dir: PathBuf::from("."),
            print_summary: false,
        }
    }
}

impl RunConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_harness_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.harness_dir = dir.into();
        self
    }

    pub fn with_summary(mut self, print_summary: bool) -> Self {
        self.print_summary = print_summary;
        self
    }

    /// Location of the raw dump for this run
    pub fn raw_output_path(&self) -> PathBuf {
        self.output_dir.join(RAW_OUTPUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = RunConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("benchmark_results"));
        assert_eq!(
            config.raw_output_path(),
            PathBuf::from("benchmark_results").join("raw_output.txt")
        );
        assert!(!config.print_summary);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new("/tmp/out")
            .with_harness_dir("/tmp/node")
            .with_summary(true);
        assert_eq!(config.harness_dir, PathBuf::from("/tmp/node"));
        assert!(config.print_summary);
    }
}
