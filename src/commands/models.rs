use crate::normalizer::DatasetSummary;
use crate::parser::BenchmarkKind;
use std::path::PathBuf;

/// What happened to one benchmark kind during a run
#[derive(Debug, Clone, PartialEq)]
pub enum KindOutcome {
    /// No section for this kind in the output
    Absent,

    /// Section found but no row survived normalization
    Empty,

    /// Chart written to the given location
    Written(PathBuf),

    /// Chart could not be built or written
    Failed(String),
}

/// Result of the per-kind pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct KindReport {
    pub kind: BenchmarkKind,
    pub outcome: KindOutcome,
    pub summary: Option<DatasetSummary>,
}

/// Result of a whole run
///
/// **Public** - returned from execute_run and execute_render
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Absolute results directory
    pub output_dir: PathBuf,

    /// Raw dump location, when this run wrote one
    pub raw_output: Option<PathBuf>,

    /// One entry per benchmark kind, in processing order
    pub kinds: Vec<KindReport>,
}

impl RunReport {
    pub fn outcome(&self, kind: BenchmarkKind) -> Option<&KindOutcome> {
        self.kinds.iter().find(|k| k.kind == kind).map(|k| &k.outcome)
    }

    /// Paths of every chart written
    pub fn written(&self) -> Vec<&PathBuf> {
        self.kinds
            .iter()
            .filter_map(|k| match &k.outcome {
                KindOutcome::Written(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Kinds skipped for lack of data
    pub fn skipped(&self) -> Vec<BenchmarkKind> {
        self.kinds
            .iter()
            .filter(|k| matches!(k.outcome, KindOutcome::Absent | KindOutcome::Empty))
            .map(|k| k.kind)
            .collect()
    }

    /// Kinds whose chart failed, with the error text
    pub fn failed(&self) -> Vec<(BenchmarkKind, &str)> {
        self.kinds
            .iter()
            .filter_map(|k| match &k.outcome {
                KindOutcome::Failed(message) => Some((k.kind, message.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> Vec<&DatasetSummary> {
        self.kinds.iter().filter_map(|k| k.summary.as_ref()).collect()
    }
}
