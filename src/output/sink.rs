//! Destinations for rendered charts.
//!
//! The pipeline hands finished SVG text to a `ChartSink`. `FileSink` writes
//! into a results directory; `MemorySink` keeps the documents in memory.

use super::svg::write_svg;
use crate::parser::BenchmarkKind;
use crate::utils::error::OutputError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Receiver of rendered chart documents
pub trait ChartSink {
    /// Store one chart, returning where it went
    fn write_chart(&mut self, kind: BenchmarkKind, svg: &str) -> Result<PathBuf, OutputError>;
}

/// Writes each chart into a directory under its kind's artifact name
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChartSink for FileSink {
    fn write_chart(&mut self, kind: BenchmarkKind, svg: &str) -> Result<PathBuf, OutputError> {
        let path = self.dir.join(kind.artifact_name());
        write_svg(svg, &path)?;
        Ok(path)
    }
}

/// Keeps charts in memory, keyed by artifact name
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub charts: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: BenchmarkKind) -> Option<&str> {
        self.charts.get(kind.artifact_name()).map(String::as_str)
    }
}

impl ChartSink for MemorySink {
    fn write_chart(&mut self, kind: BenchmarkKind, svg: &str) -> Result<PathBuf, OutputError> {
        let name = kind.artifact_name();
        self.charts.insert(name.to_string(), svg.to_string());
        Ok(PathBuf::from(name))
    }
}
