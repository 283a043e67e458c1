//! Output writers for the raw dump and chart artifacts.
//!
//! This module handles writing data to disk:
//! - The verbatim harness output
//! - SVG chart files
//! - A replaceable chart sink so the pipeline can run without a filesystem

pub mod raw;
pub mod sink;
pub mod svg;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use raw::{read_raw_output, write_raw_output};
pub use sink::{ChartSink, FileSink, MemorySink};
pub use svg::write_svg;

/// Validate that an output path can be written
///
/// **Public** - shared by all writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet
///
/// **Private** - internal helper for the writers
fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}
