//! Anchor scanning and section body filtering.
//!
//! The raw output is walked line by line. A section starts at its anchor
//! line and ends right before the next line opening with `===`, or at the
//! end of the text. Inside the body the header row is located first; every
//! later line is kept only if it looks like a data row for the kind.
//!
//! Nothing here fails: a missing anchor or header yields `None`.

use super::schema::{Payload, SectionSpec};
use crate::utils::config::SECTION_MARKER;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^===\s*Benchmark\s+(\d+):\s*(.*?)\s*===$").expect("anchor pattern is valid")
});

/// A benchmark anchor line found in the raw output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Zero-based line index
    pub line: usize,
    pub number: u32,
    pub title: String,
}

/// Parse a single line as a benchmark anchor
fn parse_anchor(line: &str) -> Option<(u32, String)> {
    let caps = ANCHOR_RE.captures(line.trim())?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    let title = caps.get(2).map_or("", |m| m.as_str()).to_string();
    Some((number, title))
}

/// Whether a line closes the section currently being read
///
/// **Public** - exposed so boundary handling can be tested on its own
pub fn is_section_boundary(line: &str) -> bool {
    line.starts_with(SECTION_MARKER)
}

/// List every benchmark anchor in source order
///
/// **Public** - used by the orchestrator to report sections without a chart
pub fn scan_anchors(raw: &str) -> Vec<Anchor> {
    raw.lines()
        .enumerate()
        .filter_map(|(line, text)| {
            parse_anchor(text).map(|(number, title)| Anchor { line, number, title })
        })
        .collect()
}

/// Extract the payload of one benchmark section
///
/// **Public** - main entry point for section extraction
///
/// # Arguments
/// * `raw` - Complete harness output
/// * `spec` - Layout of the section to look for
///
/// # Returns
/// The header line and the retained data rows, or `None` when either the
/// anchor or the header row is missing. Only the first matching anchor
/// is considered.
pub fn extract_section(raw: &str, spec: &SectionSpec) -> Option<Payload> {
    let mut lines = raw.lines().map(str::trim_end);

    let anchor = lines.by_ref().find(|line| {
        parse_anchor(line).is_some_and(|(number, title)| spec.matches_anchor(number, &title))
    });
    if anchor.is_none() {
        debug!("No anchor found for {}", spec.kind);
        return None;
    }

    let header = spec.header_line();
    let mut body = lines.take_while(|line| !is_section_boundary(line));

    // Console chatter may precede the header inside the section
    if !body.by_ref().any(|line| line.trim() == header) {
        debug!("Anchor for {} found but header `{}` is missing", spec.kind, header);
        return None;
    }

    let rows: Vec<String> = body
        .filter(|line| spec.row_start.accepts(line))
        .map(str::to_string)
        .collect();

    debug!("Extracted {} candidate rows for {}", rows.len(), spec.kind);

    Some(Payload::new(spec.kind, header, rows))
}
