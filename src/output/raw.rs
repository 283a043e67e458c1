//! Raw harness output persistence.

use super::{ensure_parent, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;

/// Write the harness output verbatim
///
/// **Public** - called once per run, before any parsing
pub fn write_raw_output(raw: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_path(output_path)?;
    ensure_parent(output_path)?;

    std::fs::write(output_path, raw).map_err(OutputError::WriteFailed)?;

    info!("Raw output written to: {} ({} bytes)", output_path.display(), raw.len());
    Ok(())
}

/// Read a previously written raw dump
///
/// **Public** - used by the render command
pub fn read_raw_output(input_path: impl AsRef<Path>) -> Result<String, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading raw output from: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(OutputError::WriteFailed)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_output_is_verbatim() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("raw_output.txt");
        let raw = "line one\r\n=== Benchmark 1: Scalability ===\n\n  trailing  ";

        write_raw_output(raw, &path).unwrap();

        assert_eq!(read_raw_output(&path).unwrap(), raw);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(read_raw_output(temp_dir.path().join("missing.txt")).is_err());
    }
}
