// File: crates/chart-core/src/error.rs
// Summary: Error types for chart validation, rendering, output and presentation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart '{chart}': series '{series}' has {actual} values but the x-axis has {expected}")]
    LengthMismatch {
        chart: String,
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("chart '{chart}' has an empty x-axis")]
    EmptyAxis { chart: String },

    #[error("chart '{chart}' has no series to plot")]
    NoSeries { chart: String },

    #[error("chart '{chart}': {what} has a non-finite value at index {index}")]
    NonFinite {
        chart: String,
        what: String,
        index: usize,
    },

    #[error("unknown legend position '{0}'")]
    UnknownLegend(String),

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    /// True for errors caused by the chart definition rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::EmptyAxis { .. }
                | Self::NoSeries { .. }
                | Self::NonFinite { .. }
                | Self::UnknownLegend(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("no display available: {0}")]
    Unavailable(String),

    #[error("display backend failed: {0}")]
    Backend(String),
}
