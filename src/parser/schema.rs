//! Static description of the benchmark sections the harness prints.
//!
//! Each kind has a fixed anchor (benchmark number and title), a fixed
//! header row and a rule for which lines count as data rows.

use std::fmt;

/// The benchmark kinds that are turned into charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkKind {
    Scalability,
    LoadBalancing,
    ReplicationDelay,
    LatencyCdf,
}

impl BenchmarkKind {
    /// All kinds, in processing order
    pub const ALL: [BenchmarkKind; 4] = [
        BenchmarkKind::Scalability,
        BenchmarkKind::LoadBalancing,
        BenchmarkKind::ReplicationDelay,
        BenchmarkKind::LatencyCdf,
    ];

    /// Section layout for this kind
    pub fn spec(self) -> SectionSpec {
        match self {
            BenchmarkKind::Scalability => SectionSpec {
                kind: self,
                number: 1,
                title: "Scalability",
                columns: &["Nodes", "Avg_Hops"],
                row_start: RowStart::Digit,
            },
            BenchmarkKind::LoadBalancing => SectionSpec {
                kind: self,
                number: 2,
                title: "Load Balancing",
                columns: &["Node_ID", "Key_Count"],
                row_start: RowStart::Alphanumeric,
            },
            BenchmarkKind::ReplicationDelay => SectionSpec {
                kind: self,
                number: 4,
                title: "Replication Delay",
                columns: &["Trial", "Delay_ms"],
                row_start: RowStart::Digit,
            },
            BenchmarkKind::LatencyCdf => SectionSpec {
                kind: self,
                number: 5,
                title: "Latency CDF",
                columns: &["Latency_us"],
                row_start: RowStart::Digit,
            },
        }
    }

    /// Human-readable name used in log notices
    pub fn display_name(self) -> &'static str {
        match self {
            BenchmarkKind::Scalability => "Scalability",
            BenchmarkKind::LoadBalancing => "Load Balancing",
            BenchmarkKind::ReplicationDelay => "Replication Delay",
            BenchmarkKind::LatencyCdf => "Latency CDF",
        }
    }

    /// Deterministic artifact file name
    pub fn artifact_name(self) -> &'static str {
        match self {
            BenchmarkKind::Scalability => "scalability.svg",
            BenchmarkKind::LoadBalancing => "load_balancing.svg",
            BenchmarkKind::ReplicationDelay => "replication_delay.svg",
            BenchmarkKind::LatencyCdf => "latency_cdf.svg",
        }
    }
}

impl fmt::Display for BenchmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which lines inside a section body are kept as data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStart {
    /// First character is an ASCII digit
    Digit,
    /// First character is an ASCII letter or digit (hash-like identifiers)
    Alphanumeric,
}

impl RowStart {
    pub fn accepts(self, line: &str) -> bool {
        match line.chars().next() {
            Some(c) => match self {
                RowStart::Digit => c.is_ascii_digit(),
                RowStart::Alphanumeric => c.is_ascii_alphanumeric(),
            },
            None => false,
        }
    }
}

/// Layout of one benchmark section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub kind: BenchmarkKind,

    /// Benchmark number printed in the anchor ("=== Benchmark N: ...")
    pub number: u32,

    /// Title the anchor must start with
    pub title: &'static str,

    /// Header row column names, order-significant
    pub columns: &'static [&'static str],

    pub row_start: RowStart,
}

impl SectionSpec {
    /// Header row as printed by the harness
    pub fn header_line(&self) -> String {
        self.columns.join(",")
    }

    /// Whether an anchor with this number and title introduces this section.
    ///
    /// The title may carry a free-form suffix after a space, e.g.
    /// "Scalability (Average Hops vs Network Size)".
    pub fn matches_anchor(&self, number: u32, title: &str) -> bool {
        if number != self.number {
            return false;
        }
        match title.strip_prefix(self.title) {
            Some(rest) => rest.is_empty() || rest.starts_with(' '),
            None => false,
        }
    }
}

/// Filtered section body: the header line plus the retained data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub kind: BenchmarkKind,
    pub header: String,
    pub rows: Vec<String>,
}

impl Payload {
    pub fn new(kind: BenchmarkKind, header: impl Into<String>, rows: Vec<String>) -> Self {
        Self {
            kind,
            header: header.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows joined as delimited text, without the header
    pub fn rows_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Header and data rows as one delimited text block
    pub fn to_csv(&self) -> String {
        let mut out = self.header.clone();
        for row in &self.rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }
}
