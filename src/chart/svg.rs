//! SVG rendering of chart specifications.
//!
//! Hand-built SVG, no drawing backend:
//! - Title, axis labels and tick labels as plain text nodes
//! - Optional gridlines at every tick
//! - Polyline plus circle markers, bars, or a step path for the series

use super::axis::Axis;
use super::spec::{ChartSpec, Series, LINE_COLOR};
use log::info;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Extra bottom space for rotated category labels
const ROTATED_LABEL_SPACE: f64 = 50.0;

const GRID_COLOR: &str = "rgb(224, 224, 224)";
const MARKER_RADIUS: f64 = 4.0;

/// Pixel rectangle the data is drawn into
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlotArea {
    fn for_spec(spec: &ChartSpec) -> Self {
        let extra = if spec.label_rotation != 0.0 {
            ROTATED_LABEL_SPACE
        } else {
            0.0
        };
        Self {
            left: MARGIN_LEFT,
            right: spec.width as f64 - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: spec.height as f64 - MARGIN_BOTTOM - extra,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn x(&self, axis: &Axis, value: f64) -> f64 {
        self.left + axis.fraction(value) * self.width()
    }

    fn y(&self, axis: &Axis, value: f64) -> f64 {
        self.bottom - axis.fraction(value) * self.height()
    }
}

/// Render a chart specification to an SVG document
///
/// **Public** - main entry point for rendering
///
/// Output is deterministic for a given spec.
pub fn render_svg(spec: &ChartSpec) -> String {
    let area = PlotArea::for_spec(spec);
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        spec.width, spec.height, spec.width, spec.height
    ));
    out.push_str(r#"<style>text { font: 12px sans-serif; } .title { font-size: 16px; font-weight: bold; }</style>"#);
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        spec.width, spec.height
    ));

    // Title
    out.push_str(&format!(
        r#"<text x="{}" y="28" text-anchor="middle" class="title">{}</text>"#,
        spec.width / 2,
        escape_xml(&spec.title)
    ));

    match &spec.series {
        Series::Line { points, markers } => {
            let (x_axis, y_axis) = point_axes(points, spec.y_floor);
            render_value_axes(&mut out, &area, &x_axis, &y_axis, spec.grid);
            render_line(&mut out, &area, &x_axis, &y_axis, points, *markers);
        }
        Series::Step { points } => {
            let (x_axis, _) = point_axes(points, None);
            let y_axis = Axis::fixed(0.0, 1.0, 0.2);
            render_value_axes(&mut out, &area, &x_axis, &y_axis, spec.grid);
            render_step(&mut out, &area, &x_axis, &y_axis, points);
        }
        Series::Bars {
            categories,
            values,
            color,
        } => {
            let max = values.iter().copied().fold(0.0, f64::max);
            let y_axis = Axis::fit(0.0, max, Some(spec.y_floor.unwrap_or(0.0)));
            render_y_axis(&mut out, &area, &y_axis, spec.grid);
            render_bars(&mut out, &area, &y_axis, categories, values, color, spec.label_rotation);
        }
    }

    render_frame(&mut out, &area);
    render_axis_labels(&mut out, spec, &area);

    out.push_str("</svg>");

    info!("{} chart rendered ({} bytes)", spec.kind, out.len());
    out
}

fn point_axes(points: &[(f64, f64)], y_floor: Option<f64>) -> (Axis, Axis) {
    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1));
    (Axis::fit(x_min, x_max, None), Axis::fit(y_min, y_max, y_floor))
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}

fn render_value_axes(out: &mut String, area: &PlotArea, x_axis: &Axis, y_axis: &Axis, grid: bool) {
    for tick in x_axis.ticks() {
        let x = area.x(x_axis, tick);
        if grid {
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
                x, area.top, x, area.bottom, GRID_COLOR
            ));
        }
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            x,
            area.bottom + 18.0,
            x_axis.format_tick(tick)
        ));
    }
    render_y_axis(out, area, y_axis, grid);
}

fn render_y_axis(out: &mut String, area: &PlotArea, y_axis: &Axis, grid: bool) {
    for tick in y_axis.ticks() {
        let y = area.y(y_axis, tick);
        if grid {
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
                area.left, y, area.right, y, GRID_COLOR
            ));
        }
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            area.left - 8.0,
            y + 4.0,
            y_axis.format_tick(tick)
        ));
    }
}

fn render_line(
    out: &mut String,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    points: &[(f64, f64)],
    markers: bool,
) {
    let coords: Vec<String> = points
        .iter()
        .map(|&(x, y)| format!("{:.2},{:.2}", area.x(x_axis, x), area.y(y_axis, y)))
        .collect();
    out.push_str(&format!(
        r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
        LINE_COLOR,
        coords.join(" ")
    ));

    if markers {
        for &(x, y) in points {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"><title>({}, {})</title></circle>"#,
                area.x(x_axis, x),
                area.y(y_axis, y),
                MARKER_RADIUS,
                LINE_COLOR,
                x,
                y
            ));
        }
    }
}

fn render_step(out: &mut String, area: &PlotArea, x_axis: &Axis, y_axis: &Axis, points: &[(f64, f64)]) {
    let Some(&(first_x, _)) = points.first() else {
        return;
    };

    // Start on the zero line, then rise at every distinct value
    let mut d = format!("M {:.2} {:.2}", area.x(x_axis, first_x), area.y(y_axis, 0.0));
    for &(x, share) in points {
        d.push_str(&format!(
            " H {:.2} V {:.2}",
            area.x(x_axis, x),
            area.y(y_axis, share)
        ));
    }
    out.push_str(&format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        d, LINE_COLOR
    ));
}

fn render_bars(
    out: &mut String,
    area: &PlotArea,
    y_axis: &Axis,
    categories: &[String],
    values: &[f64],
    color: &str,
    rotation: f64,
) {
    if values.is_empty() {
        return;
    }
    let band = area.width() / values.len() as f64;
    let bar_width = band * 0.8;

    for (i, (label, value)) in categories.iter().zip(values).enumerate() {
        let x = area.left + band * i as f64 + (band - bar_width) / 2.0;
        let top = area.y(y_axis, *value);
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
            x,
            top,
            bar_width,
            area.bottom - top,
            color,
            escape_xml(label),
            value
        ));

        let cx = area.left + band * (i as f64 + 0.5);
        let ly = area.bottom + 16.0;
        if rotation != 0.0 {
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" transform="rotate(-{} {:.2} {:.2})">{}</text>"#,
                cx,
                ly,
                rotation,
                cx,
                ly,
                escape_xml(label)
            ));
        } else {
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                cx,
                ly,
                escape_xml(label)
            ));
        }
    }
}

fn render_frame(out: &mut String, area: &PlotArea) {
    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        area.left,
        area.top,
        area.width(),
        area.height()
    ));
}

fn render_axis_labels(out: &mut String, spec: &ChartSpec, area: &PlotArea) {
    let center_x = area.left + area.width() / 2.0;
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
        center_x,
        spec.height as f64 - 20.0,
        escape_xml(&spec.x_label)
    ));

    let center_y = area.top + area.height() / 2.0;
    out.push_str(&format!(
        r#"<text x="20" y="{:.2}" text-anchor="middle" transform="rotate(-90 20 {:.2})">{}</text>"#,
        center_y,
        center_y,
        escape_xml(&spec.y_label)
    ));
}

/// Escape text for use inside SVG text nodes and attributes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
