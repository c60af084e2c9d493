// File: crates/bench-plots/src/lib.rs
// Summary: Benchmark datasets, chart catalog, chart book loading and the render driver.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod logger;
pub mod presenter;
#[cfg(feature = "window")]
pub mod window;

pub use config::{ChartBook, ConfigError};
pub use driver::{plan, render_all, run};
