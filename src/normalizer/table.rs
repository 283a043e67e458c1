//! Delimited-table coercion of payload rows into typed datasets.
//!
//! Rows are read with the `csv` crate against the payload's header and
//! deserialized into the kind's record type. A row is dropped when its field
//! count differs from the header, when any field fails coercion, or when the
//! record fails its own validity check. Drops are never reported per row.

use super::records::BenchmarkRecord;
use crate::parser::{BenchmarkKind, Payload};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

/// Ordered, typed rows of one benchmark kind
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<R> {
    pub kind: BenchmarkKind,
    pub rows: Vec<R>,
}

impl<R: BenchmarkRecord> Dataset<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { kind: R::KIND, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Print the dataset back as a payload with the kind's header.
    ///
    /// Normalizing the result yields this dataset again.
    pub fn to_payload(&self) -> Payload {
        let rows = self.rows.iter().map(|row| row.fields().join(",")).collect();
        Payload::new(self.kind, R::KIND.spec().header_line(), rows)
    }
}

/// Normalize a payload, propagating absence
///
/// **Public** - main entry point for normalization
///
/// # Returns
/// `None` when the section was absent, otherwise a dataset that may be empty
pub fn normalize<R: BenchmarkRecord>(payload: Option<&Payload>) -> Option<Dataset<R>> {
    payload.map(normalize_payload)
}

/// Coerce the rows of a present payload
///
/// **Public** - used directly when the payload is known to exist
pub fn normalize_payload<R: BenchmarkRecord>(payload: &Payload) -> Dataset<R> {
    let header: StringRecord = payload.header.split(',').map(str::trim).collect();

    // One record per line: quoting off so a stray quote cannot swallow rows
    let text = payload.rows_text();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::with_capacity(payload.rows.len());
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };

        if record.len() != header.len() {
            dropped += 1;
            continue;
        }

        match record.deserialize::<R>(Some(&header)) {
            Ok(row) if row.is_valid() => rows.push(row),
            _ => dropped += 1,
        }
    }

    R::post_process(&mut rows);

    debug!(
        "Normalized {}: {} rows kept, {} dropped",
        R::KIND,
        rows.len(),
        dropped
    );

    Dataset::new(rows)
}
