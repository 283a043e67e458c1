//! Chart construction and SVG rendering.
//!
//! Building a chart is pure: a dataset maps onto a `ChartSpec` with a fixed
//! layout per benchmark kind. Rendering turns a spec into SVG text. Writing
//! the text anywhere is left to `output`.

pub mod axis;
pub mod spec;
pub mod svg;

// Re-export main types
pub use axis::Axis;
pub use spec::{build_chart, ecdf_points, ChartSpec, Chartable, Series};
pub use svg::render_svg;
