// File: crates/chart-core/src/view.rs
// Summary: Visible ranges for a chart: data extents padded like matplotlib's autoscale.

use crate::Chart;

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        for &x in &chart.x {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (lo, hi) in chart.series.iter().filter_map(|s| s.min_max()) {
            y_min = y_min.min(lo);
            y_max = y_max.max(hi);
        }

        let (x_min, x_max) = pad(x_min, x_max);
        let (y_min, y_max) = pad(y_min, y_max);
        let (x_min, x_max) = chart.x_axis.resolve(x_min, x_max);
        let (y_min, y_max) = chart.y_axis.resolve(y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span.abs() < 1e-12 {
        // single value: center it in a unit-ish window
        let half = if lo.abs() > 1e-12 { lo.abs() * AUTOSCALE_MARGIN } else { 0.5 };
        return (lo - half, hi + half);
    }
    let m = span * AUTOSCALE_MARGIN;
    (lo - m, hi + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Series};

    #[test]
    fn pads_both_axes() {
        let mut chart = Chart::new("t", "out.png");
        chart.x = vec![1.0, 2.0, 3.0, 4.0, 10.0, 15.0];
        chart.add_series(Series::new("s", vec![0.0, 1.0, 2.0, 3.0, 4.0, 10.0]));
        let v = ViewState::from_chart(&chart);
        assert!((v.x_min - 0.3).abs() < 1e-9);
        assert!((v.x_max - 15.7).abs() < 1e-9);
        assert!((v.y_min + 0.5).abs() < 1e-9);
        assert!((v.y_max - 10.5).abs() < 1e-9);
    }

    #[test]
    fn fixed_limits_override() {
        let mut chart = Chart::new("t", "out.png");
        chart.x = vec![1.0, 2.0];
        chart.y_axis = Axis::new("pct").with_limits(0.0, 100.0);
        chart.add_series(Series::new("s", vec![30.0, 40.0]));
        let v = ViewState::from_chart(&chart);
        assert_eq!((v.y_min, v.y_max), (0.0, 100.0));
    }

    #[test]
    fn flat_series_gets_a_window() {
        let mut chart = Chart::new("t", "out.png");
        chart.x = vec![1.0, 2.0];
        chart.add_series(Series::new("s", vec![0.0, 0.0]));
        let v = ViewState::from_chart(&chart);
        assert!(v.y_max > v.y_min);
    }
}
