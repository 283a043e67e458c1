//! Per-kind chart specifications.

use crate::normalizer::{
    BenchmarkRecord, Dataset, LatencySample, LoadRecord, ReplicationTrial, ScalabilityPoint,
};
use crate::parser::BenchmarkKind;
use crate::utils::config::{CHART_HEIGHT, CHART_WIDTH, WIDE_CHART_WIDTH};
use crate::utils::error::ChartError;
use log::debug;

/// Default series color
pub const LINE_COLOR: &str = "rgb(31, 119, 180)";

/// Uniform bar color
pub const BAR_COLOR: &str = "rgb(135, 206, 235)";

/// Plotted data of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Points joined in order, optionally marked
    Line { points: Vec<(f64, f64)>, markers: bool },

    /// One bar per category, categories in dataset order
    Bars {
        categories: Vec<String>,
        values: Vec<f64>,
        color: &'static str,
    },

    /// Right-continuous step function, e.g. an empirical CDF
    Step { points: Vec<(f64, f64)> },
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Line { points, .. } | Series::Step { points } => points.len(),
            Series::Bars { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: BenchmarkKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub series: Series,
    pub grid: bool,

    /// Lower bound pinned on the y axis
    pub y_floor: Option<f64>,

    /// Category label rotation in degrees (counter-clockwise)
    pub label_rotation: f64,
}

impl ChartSpec {
    fn new(kind: BenchmarkKind, title: &str, x_label: &str, y_label: &str, series: Series) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            series,
            grid: true,
            y_floor: None,
            label_rotation: 0.0,
        }
    }
}

/// A record type with a fixed chart layout
pub trait Chartable: BenchmarkRecord {
    fn chart_spec(dataset: &Dataset<Self>) -> ChartSpec;
}

impl Chartable for ScalabilityPoint {
    fn chart_spec(dataset: &Dataset<Self>) -> ChartSpec {
        let points = dataset
            .rows
            .iter()
            .map(|r| (r.nodes as f64, r.avg_hops))
            .collect();
        ChartSpec::new(
            Self::KIND,
            "Scalability: Average Hops vs Network Size",
            "Number of Nodes",
            "Average Hops",
            Series::Line { points, markers: true },
        )
    }
}

impl Chartable for LoadRecord {
    fn chart_spec(dataset: &Dataset<Self>) -> ChartSpec {
        let mut spec = ChartSpec::new(
            Self::KIND,
            "Load Balancing: Key Distribution Across Nodes",
            "Node ID",
            "Number of Keys",
            Series::Bars {
                categories: dataset.rows.iter().map(|r| r.label.clone()).collect(),
                values: dataset.rows.iter().map(|r| r.key_count as f64).collect(),
                color: BAR_COLOR,
            },
        );
        spec.width = WIDE_CHART_WIDTH;
        spec.grid = false;
        spec.y_floor = Some(0.0);
        spec.label_rotation = 45.0;
        spec
    }
}

impl Chartable for ReplicationTrial {
    fn chart_spec(dataset: &Dataset<Self>) -> ChartSpec {
        let points = dataset
            .rows
            .iter()
            .map(|r| (r.trial as f64, r.delay_ms))
            .collect();
        let mut spec = ChartSpec::new(
            Self::KIND,
            "Replication Delay per Trial",
            "Trial Number",
            "Delay (milliseconds)",
            Series::Line { points, markers: true },
        );
        spec.y_floor = Some(0.0);
        spec
    }
}

impl Chartable for LatencySample {
    fn chart_spec(dataset: &Dataset<Self>) -> ChartSpec {
        let values: Vec<f64> = dataset.rows.iter().map(|r| r.latency_us).collect();
        ChartSpec::new(
            Self::KIND,
            "Latency Cumulative Distribution Function (CDF)",
            "Latency (microseconds)",
            "Cumulative Probability (Proportion of Requests <= x)",
            Series::Step {
                points: ecdf_points(&values),
            },
        )
    }
}

/// Build the chart for a dataset
///
/// **Public** - main entry point for chart construction
///
/// # Errors
/// * `ChartError::EmptyDataset` - the dataset has no rows
pub fn build_chart<R: Chartable>(dataset: &Dataset<R>) -> Result<ChartSpec, ChartError> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset(R::KIND.to_string()));
    }

    let spec = R::chart_spec(dataset);
    debug!("Built {} chart with {} data points", R::KIND, spec.series.len());
    Ok(spec)
}

/// Empirical CDF: one point per distinct value, y = share of samples <= x
pub fn ecdf_points(values: &[f64]) -> Vec<(f64, f64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mut points: Vec<(f64, f64)> = Vec::new();
    for (i, value) in sorted.iter().enumerate() {
        let share = (i + 1) as f64 / n;
        match points.last_mut() {
            Some(last) if last.0 == *value => last.1 = share,
            _ => points.push((*value, share)),
        }
    }
    points
}
