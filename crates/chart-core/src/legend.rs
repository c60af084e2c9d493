// File: crates/chart-core/src/legend.rs
// Summary: Legend placement inside the plot area, parsed from matplotlib-style names.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    #[default]
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    UpperCenter,
    LowerCenter,
    Center,
}

impl LegendPosition {
    pub const ALL: [LegendPosition; 7] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
        Self::UpperCenter,
        Self::LowerCenter,
        Self::Center,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpperRight => "upper right",
            Self::UpperLeft => "upper left",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
            Self::UpperCenter => "upper center",
            Self::LowerCenter => "lower center",
            Self::Center => "center",
        }
    }

    /// Top-left corner of a `w` x `h` legend box inside the plot rect `(l, t, r, b)`,
    /// keeping `margin` pixels from the plot edges.
    pub fn place(&self, plot: (f32, f32, f32, f32), w: f32, h: f32, margin: f32) -> (f32, f32) {
        let (l, t, r, b) = plot;
        let left = l + margin;
        let right = r - margin - w;
        let hcenter = (l + r - w) * 0.5;
        let top = t + margin;
        let bottom = b - margin - h;
        let vcenter = (t + b - h) * 0.5;
        match self {
            Self::UpperRight => (right, top),
            Self::UpperLeft => (left, top),
            Self::LowerLeft => (left, bottom),
            Self::LowerRight => (right, bottom),
            Self::UpperCenter => (hcenter, top),
            Self::LowerCenter => (hcenter, bottom),
            Self::Center => (hcenter, vcenter),
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegendPosition {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == norm)
            .ok_or_else(|| ChartError::UnknownLegend(s.to_string()))
    }
}
