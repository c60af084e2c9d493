// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and optional fixed limits.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    /// Fixed `(min, max)`; `None` autoscales to the data.
    pub limits: Option<(f64, f64)>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), limits: None }
    }

    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.limits = Some((min.min(max), min.max(max)));
        self
    }

    /// Resolve the displayed range: fixed limits win over the data range.
    pub fn resolve(&self, data_min: f64, data_max: f64) -> (f64, f64) {
        match self.limits {
            Some((lo, hi)) if (hi - lo).abs() > 1e-12 => (lo, hi),
            Some((lo, _)) => (lo, lo + 1.0),
            None => (data_min, data_max),
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("")
    }
}
