//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while invoking the benchmark harness
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to start harness `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Harness working directory does not exist: {0}")]
    MissingWorkingDir(String),
}

/// Errors that can occur while building a chart
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Dataset for {0} has no rows")]
    EmptyDataset(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
