// File: crates/bench-plots/src/catalog.rs
// Summary: Ordered chart definitions built from the benchmark datasets.

use std::path::Path;

use chart_core::{Chart, LegendPosition, Series};

use crate::dataset::{self, Command, Dataset, Host, Resource};

pub const X_LABEL: &str = "num clients";
pub const THROUGHPUT_LABEL: &str = "avg throughput (req/s)";
pub const RESPONSE_LABEL: &str = "avg response time (ms)";
pub const UTILIZATION_LABEL: &str = "percentage utilization";

/// Subdirectory of the output dir holding the charts drawn from the recorded tables.
pub const RECORDED_DIR: &str = "recorded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Throughput,
    ResponseTime,
}

impl Metric {
    fn title(&self) -> &'static str {
        match self {
            Self::Throughput => "avg throughput",
            Self::ResponseTime => "avg response time",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::Throughput => "avg_thp",
            Self::ResponseTime => "avg_resptime",
        }
    }

    fn y_label(&self) -> &'static str {
        match self {
            Self::Throughput => THROUGHPUT_LABEL,
            Self::ResponseTime => RESPONSE_LABEL,
        }
    }

    fn values(&self, ds: &Dataset, command: Command) -> Option<Vec<f64>> {
        match self {
            Self::Throughput => ds.throughput(command),
            Self::ResponseTime => ds.response_time(command),
        }
    }
}

/// `avg_thp_<cmd>.png` / `avg_resptime_<cmd>.png`: one command, one line.
pub fn load_chart(ds: &Dataset, metric: Metric, command: Command, dir: &Path) -> Option<Chart> {
    let values = metric.values(ds, command)?;
    let chart = Chart::new(
        format!("{} ({command} command)", metric.title()),
        dir.join(format!("{}_{command}.png", metric.file_stem())),
    )
    .with_x(ds.clients.clone())
    .with_labels(X_LABEL, metric.y_label())
    .with_series(Series::new(format!("{command}_all"), values));
    Some(chart)
}

/// `avg_thp_all.png` / `avg_resptime_all.png`: every command with load figures, with a legend.
pub fn comparison_chart(ds: &Dataset, metric: Metric, dir: &Path) -> Option<Chart> {
    let mut chart = Chart::new(
        format!("{} (all commands)", metric.title()),
        dir.join(format!("{}_all.png", metric.file_stem())),
    )
    .with_x(ds.clients.clone())
    .with_labels(X_LABEL, metric.y_label())
    .with_legend(LegendPosition::UpperRight);
    for command in ds.load_commands() {
        if let Some(values) = metric.values(ds, command) {
            chart.add_series(Series::new(format!("{command}_all"), values));
        }
    }
    (!chart.series.is_empty()).then_some(chart)
}

/// `utilization for <cmd> command at <host>.png`: cpu, disk and ram together.
pub fn utilization_chart(ds: &Dataset, host: Host, command: Command, dir: &Path) -> Option<Chart> {
    let title = format!("utilization for {command} command at {host}");
    let mut chart = Chart::new(title.clone(), dir.join(format!("{title}.png")))
        .with_x(ds.clients.clone())
        .with_labels(X_LABEL, UTILIZATION_LABEL)
        .with_legend(LegendPosition::UpperRight);
    for resource in Resource::ALL {
        chart.add_series(Series::new(resource.label(), ds.utilization(host, command, resource)?));
    }
    Some(chart)
}

/// The charts the plotting script has always produced, with their file names unchanged:
/// the two commented-out rotate variants, then the active utilization chart.
pub fn legacy(dir: &Path) -> Vec<Chart> {
    let ds = dataset::plotted();
    [
        load_chart(&ds, Metric::Throughput, Command::Rotate, dir),
        load_chart(&ds, Metric::ResponseTime, Command::Rotate, dir),
        utilization_chart(&ds, Host::Database, Command::Rotate, dir),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Every chart the recorded tables support, under `<dir>/recorded/`.
pub fn recorded(dir: &Path) -> Vec<Chart> {
    let ds = dataset::recorded();
    let dir = dir.join(RECORDED_DIR);
    let mut charts = Vec::new();
    for metric in [Metric::Throughput, Metric::ResponseTime] {
        for command in ds.load_commands() {
            charts.extend(load_chart(&ds, metric, command, &dir));
        }
        charts.extend(comparison_chart(&ds, metric, &dir));
    }
    for (host, command) in ds.usage_keys() {
        charts.extend(utilization_chart(&ds, host, command, &dir));
    }
    charts
}

/// The built-in charts in render order.
pub fn catalog(dir: &Path) -> Vec<Chart> {
    let mut charts = legacy(dir);
    charts.extend(recorded(dir));
    charts
}
