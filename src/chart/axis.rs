//! Linear axis ranges with rounded tick steps.

/// Target number of tick intervals per axis
const TARGET_TICKS: usize = 5;

/// A linear axis spanning `lo..=hi` with ticks every `step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub lo: f64,
    pub hi: f64,
    pub step: f64,
}

impl Axis {
    /// Fit an axis around the data range.
    ///
    /// `floor` pins the lower bound regardless of the data.
    pub fn fit(min: f64, max: f64, floor: Option<f64>) -> Self {
        let (mut min, mut max) = (min, max);
        if let Some(floor) = floor {
            min = floor;
            max = max.max(floor);
        }
        if max - min <= f64::EPSILON {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            if floor.is_none() {
                min -= pad;
            }
            max += pad;
        }

        let step = nice_step(max - min);
        let lo = floor.unwrap_or((min / step).floor() * step);
        let hi = (max / step).ceil() * step;

        Self { lo, hi, step }
    }

    /// Fixed axis with an explicit step
    pub fn fixed(lo: f64, hi: f64, step: f64) -> Self {
        Self { lo, hi, step }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Tick positions from `lo` to `hi` inclusive
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.span() / self.step).round() as usize;
        (0..=count).map(|i| self.lo + i as f64 * self.step).collect()
    }

    /// Position of `value` as a fraction of the axis span
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.lo) / self.span()
    }

    /// Tick label with as many decimals as the step needs
    pub fn format_tick(&self, value: f64) -> String {
        let decimals = if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10().floor()) as usize
        };
        let text = format!("{:.*}", decimals, value);
        // Avoid "-0" style labels from rounding
        if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            text.trim_start_matches('-').to_string()
        } else {
            text
        }
    }
}

/// Round a span divided into `TARGET_TICKS` up to 1, 2 or 5 times a power of ten
fn nice_step(span: f64) -> f64 {
    let raw = span / TARGET_TICKS as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(50.0), 10.0);
        assert_eq!(nice_step(7.0), 2.0);
        assert!((nice_step(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_covers_data() {
        let axis = Axis::fit(10.0, 50.0, None);
        assert!(axis.lo <= 10.0);
        assert!(axis.hi >= 50.0);
        assert_eq!(axis.ticks().first(), Some(&axis.lo));
    }

    #[test]
    fn test_fit_with_floor() {
        let axis = Axis::fit(12.0, 18.0, Some(0.0));
        assert_eq!(axis.lo, 0.0);
        assert!(axis.hi >= 18.0);
    }

    #[test]
    fn test_fit_single_value() {
        let axis = Axis::fit(5.0, 5.0, None);
        assert!(axis.lo < 5.0);
        assert!(axis.hi > 5.0);

        let zero = Axis::fit(0.0, 0.0, Some(0.0));
        assert_eq!(zero.lo, 0.0);
        assert!(zero.hi >= 1.0);
    }

    #[test]
    fn test_format_tick() {
        let axis = Axis::fixed(0.0, 1.0, 0.2);
        assert_eq!(axis.format_tick(0.4), "0.4");
        assert_eq!(axis.format_tick(-0.0), "0.0");
        let coarse = Axis::fixed(0.0, 50.0, 10.0);
        assert_eq!(coarse.format_tick(30.0), "30");
    }
}
