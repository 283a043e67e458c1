//! Section extraction from raw harness output.
//!
//! This module handles:
//! - Describing the benchmark kinds and their section layout
//! - Locating a section by its anchor line
//! - Filtering the section body down to the header and data rows

pub mod schema;
pub mod section;

// Re-export main types
pub use schema::{BenchmarkKind, Payload, RowStart, SectionSpec};
pub use section::{extract_section, is_section_boundary, scan_anchors, Anchor};
