//! Conversion of extracted payloads into typed datasets.
//!
//! This module turns filtered section text into:
//! - Typed records, one per valid data row
//! - Kind-specific ordering and display labels
//! - Summary statistics for logging

pub mod metrics;
pub mod records;
pub mod table;

// Re-export main types and functions
pub use metrics::{summarize, DatasetSummary};
pub use records::{
    compare_node_ids, truncate_label, BenchmarkRecord, LatencySample, LoadRecord,
    ReplicationTrial, ScalabilityPoint,
};
pub use table::{normalize, normalize_payload, Dataset};
