// File: crates/bench-plots/src/driver.rs
// Summary: Builds the ordered chart list for a run and renders it chart by chart.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, Presenter, RenderOptions, RenderReport};

use crate::catalog;
use crate::config::{ChartBook, ConfigError};

/// Built-in catalog (unless disabled) followed by the book's own charts.
/// Every chart is validated and two charts writing the same file are rejected
/// here, so a bad book fails before anything is rendered.
pub fn plan(book: &ChartBook) -> Result<Vec<Chart>, ConfigError> {
    let mut charts = if book.include_builtin {
        catalog::catalog(&book.output_dir)
    } else {
        Vec::new()
    };
    charts.extend(book.charts()?);

    let mut seen = HashSet::new();
    for chart in &charts {
        chart
            .validate()
            .map_err(|source| ConfigError::Chart { chart: chart.display_name(), source })?;
        if !seen.insert(normalize(&chart.output)) {
            return Err(ConfigError::DuplicateOutput { path: chart.output.clone() });
        }
    }
    Ok(charts)
}

/// Lexically drop `.` and fold `..` into its parent so equivalent spellings
/// of one output path compare equal. Leading `..` components are kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Render every chart in order. The first failure aborts the run.
pub fn render_all(charts: &[Chart], opts: &RenderOptions, presenter: &mut dyn Presenter) -> Result<Vec<RenderReport>> {
    let mut reports = Vec::with_capacity(charts.len());
    for chart in charts {
        let report = chart_core::render(chart, opts, presenter)
            .with_context(|| format!("failed to render chart '{}'", chart.display_name()))?;
        tracing::info!("Wrote {}", report.path.display());
        reports.push(report);
    }
    Ok(reports)
}

/// Load the book (if any), plan and render. Returns what was written.
pub fn run(book_path: Option<&Path>) -> Result<Vec<RenderReport>> {
    let book = match book_path {
        Some(path) => ChartBook::load(path)?,
        None => ChartBook::default(),
    };
    let charts = plan(&book)?;
    tracing::info!(charts = charts.len(), output_dir = %book.output_dir.display(), "rendering charts");

    let opts = book.render_options();
    let mut presenter = crate::presenter::select(book.show);
    render_all(&charts, &opts, presenter.as_mut())
}
