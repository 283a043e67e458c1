//! Typed record definitions, one per benchmark kind.
//!
//! Field names map onto the harness header columns through serde renames,
//! so a row is coerced by deserializing it against the header.

use crate::parser::BenchmarkKind;
use crate::utils::config::{LABEL_ELLIPSIS, LABEL_PREFIX_LEN};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A row type produced by the normalizer
pub trait BenchmarkRecord: DeserializeOwned + Clone + PartialEq + Debug {
    /// Kind whose section this record is read from
    const KIND: BenchmarkKind;

    /// Checks that coercion alone cannot express (finite floats, id shape)
    fn is_valid(&self) -> bool {
        true
    }

    /// Ordering and derived fields applied to the retained rows
    fn post_process(_rows: &mut [Self]) {}

    /// Field values in header order, as the harness would print them
    fn fields(&self) -> Vec<String>;

    /// The measured quantity summarised for this kind
    fn measured_value(&self) -> f64;
}

/// One network size of the scalability benchmark
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScalabilityPoint {
    #[serde(rename = "Nodes")]
    pub nodes: u32,

    #[serde(rename = "Avg_Hops")]
    pub avg_hops: f64,
}

impl BenchmarkRecord for ScalabilityPoint {
    const KIND: BenchmarkKind = BenchmarkKind::Scalability;

    fn is_valid(&self) -> bool {
        self.avg_hops.is_finite()
    }

    fn fields(&self) -> Vec<String> {
        vec![self.nodes.to_string(), self.avg_hops.to_string()]
    }

    fn measured_value(&self) -> f64 {
        self.avg_hops
    }
}

/// Key count held by one node after the load-balancing run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadRecord {
    #[serde(rename = "Node_ID")]
    pub node_id: String,

    #[serde(rename = "Key_Count")]
    pub key_count: u64,

    /// Truncated identifier used as the axis category
    #[serde(skip)]
    pub label: String,
}

impl LoadRecord {
    pub fn new(node_id: impl Into<String>, key_count: u64) -> Self {
        let node_id = node_id.into();
        let label = truncate_label(&node_id);
        Self {
            node_id,
            key_count,
            label,
        }
    }
}

impl BenchmarkRecord for LoadRecord {
    const KIND: BenchmarkKind = BenchmarkKind::LoadBalancing;

    fn is_valid(&self) -> bool {
        !self.node_id.is_empty() && self.node_id.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn post_process(rows: &mut [Self]) {
        rows.sort_by(|a, b| compare_node_ids(&a.node_id, &b.node_id));
        for row in rows.iter_mut() {
            row.label = truncate_label(&row.node_id);
        }
    }

    fn fields(&self) -> Vec<String> {
        vec![self.node_id.clone(), self.key_count.to_string()]
    }

    fn measured_value(&self) -> f64 {
        self.key_count as f64
    }
}

/// Time for one write to reach the primary's successor
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplicationTrial {
    #[serde(rename = "Trial")]
    pub trial: u32,

    #[serde(rename = "Delay_ms")]
    pub delay_ms: f64,
}

impl BenchmarkRecord for ReplicationTrial {
    const KIND: BenchmarkKind = BenchmarkKind::ReplicationDelay;

    fn is_valid(&self) -> bool {
        self.delay_ms.is_finite()
    }

    fn fields(&self) -> Vec<String> {
        vec![self.trial.to_string(), self.delay_ms.to_string()]
    }

    fn measured_value(&self) -> f64 {
        self.delay_ms
    }
}

/// One GET round-trip in microseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatencySample {
    #[serde(rename = "Latency_us")]
    pub latency_us: f64,
}

impl BenchmarkRecord for LatencySample {
    const KIND: BenchmarkKind = BenchmarkKind::LatencyCdf;

    fn is_valid(&self) -> bool {
        self.latency_us.is_finite()
    }

    fn fields(&self) -> Vec<String> {
        vec![self.latency_us.to_string()]
    }

    fn measured_value(&self) -> f64 {
        self.latency_us
    }
}

/// Order node identifiers for the load-balancing chart.
///
/// Identifiers that parse as unsigned integers compare numerically and come
/// first; everything else compares as text.
pub fn compare_node_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Axis label for a node identifier: first 8 characters plus an ellipsis.
///
/// The ellipsis is appended even when the identifier is shorter than the
/// prefix. Distinct identifiers sharing a prefix get the same label; the
/// label is for display only.
pub fn truncate_label(node_id: &str) -> String {
    let mut label: String = node_id.chars().take(LABEL_PREFIX_LEN).collect();
    label.push_str(LABEL_ELLIPSIS);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_long() {
        assert_eq!(truncate_label("12345678901234567890"), "12345678...");
        assert_eq!(truncate_label("a1b2c3d4e5"), "a1b2c3d4...");
    }

    #[test]
    fn test_truncate_label_short_keeps_ellipsis() {
        assert_eq!(truncate_label("42"), "42...");
        assert_eq!(truncate_label("abcdefgh"), "abcdefgh...");
    }

    #[test]
    fn test_compare_node_ids_numeric() {
        // Numeric, not lexicographic
        assert_eq!(compare_node_ids("9", "10"), Ordering::Less);
        assert_eq!(compare_node_ids("18446744073709551615", "2"), Ordering::Greater);
    }

    #[test]
    fn test_compare_node_ids_mixed() {
        assert_eq!(compare_node_ids("99", "a1"), Ordering::Less);
        assert_eq!(compare_node_ids("z9", "a1"), Ordering::Greater);
    }

    #[test]
    fn test_load_record_validity() {
        assert!(LoadRecord::new("a1b2", 3).is_valid());
        assert!(!LoadRecord::new("", 3).is_valid());
        assert!(!LoadRecord::new("a-b", 3).is_valid());
    }

    #[test]
    fn test_load_post_process_sorts_and_labels() {
        let mut rows = vec![
            LoadRecord::new("300000000000", 5),
            LoadRecord::new("20000000000", 7),
        ];
        LoadRecord::post_process(&mut rows);
        assert_eq!(rows[0].node_id, "20000000000");
        assert_eq!(rows[0].label, "20000000...");
        assert_eq!(rows[1].label, "30000000...");
    }
}
