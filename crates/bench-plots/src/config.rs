// File: crates/bench-plots/src/config.rs
// Summary: Optional TOML chart book: run settings plus extra chart definitions (inline or CSV).

use std::path::{Path, PathBuf};

use chart_core::{Axis, Chart, ChartError, LegendPosition, RenderOptions, Series};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read chart book '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chart book '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid image size {width}x{height}")]
    Size { width: i32, height: i32 },

    #[error("chart '{chart}': {reason}")]
    Definition { chart: String, reason: String },

    #[error("chart '{chart}': failed to load '{}'", path.display())]
    Csv {
        chart: String,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("chart '{chart}'")]
    Chart {
        chart: String,
        #[source]
        source: ChartError,
    },

    #[error("more than one chart writes '{}'", path.display())]
    DuplicateOutput { path: PathBuf },
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_true() -> bool { true }
fn default_theme() -> String { "light".to_string() }
fn default_width() -> i32 { chart_core::types::WIDTH }
fn default_height() -> i32 { chart_core::types::HEIGHT }

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartBook {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default, rename = "chart")]
    pub charts: Vec<ChartEntry>,
    /// Directory CSV paths are resolved against; the book's own directory.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartEntry {
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    pub output: PathBuf,
    pub legend: Option<String>,
    pub y_limits: Option<[f64; 2]>,
    pub x: Option<Vec<f64>>,
    pub series: Option<Vec<SeriesEntry>>,
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesEntry {
    pub name: String,
    pub values: Vec<f64>,
}

impl Default for ChartBook {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            include_builtin: true,
            show: true,
            theme: default_theme(),
            width: default_width(),
            height: default_height(),
            charts: Vec::new(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl ChartBook {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let book = Self::from_toml_str(&text, base_dir)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        book.validate()?;
        tracing::debug!(path = %path.display(), charts = book.charts.len(), "loaded chart book");
        Ok(book)
    }

    pub fn from_toml_str(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self, toml::de::Error> {
        let mut book: ChartBook = toml::from_str(text)?;
        book.base_dir = base_dir.into();
        Ok(book)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Size { width: self.width, height: self.height });
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: chart_core::theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }

    /// The book's own charts, outputs resolved under `output_dir`.
    pub fn charts(&self) -> Result<Vec<Chart>, ConfigError> {
        self.charts
            .iter()
            .map(|entry| entry.to_chart(&self.base_dir, &self.output_dir))
            .collect()
    }
}

impl ChartEntry {
    pub fn to_chart(&self, base_dir: &Path, output_dir: &Path) -> Result<Chart, ConfigError> {
        let name = self.title.clone();
        let definition = |reason: &str| ConfigError::Definition { chart: name.clone(), reason: reason.to_string() };

        let (x, series) = match (&self.x, &self.series, &self.csv) {
            (Some(x), Some(series), None) => {
                let series = series.iter().map(|s| Series::new(s.name.clone(), s.values.clone())).collect::<Vec<_>>();
                (x.clone(), series)
            }
            (None, None, Some(csv_path)) => {
                let path = base_dir.join(csv_path);
                load_csv(&path).map_err(|e| match e {
                    CsvLoad::Csv(source) => ConfigError::Csv { chart: name.clone(), path: path.clone(), source },
                    CsvLoad::Invalid(reason) => ConfigError::Definition {
                        chart: name.clone(),
                        reason: format!("{}: {reason}", path.display()),
                    },
                })?
            }
            (_, _, Some(_)) => return Err(definition("use either `csv` or inline `x`/`series`, not both")),
            _ => return Err(definition("needs inline `x` and `series`, or a `csv` file")),
        };

        let mut chart = Chart::new(self.title.clone(), output_dir.join(&self.output))
            .with_x(x)
            .with_labels(self.x_label.clone(), self.y_label.clone());
        chart.series = series;
        if let Some([lo, hi]) = self.y_limits {
            chart.y_axis = Axis::new(self.y_label.clone()).with_limits(lo, hi);
        }
        if let Some(legend) = &self.legend {
            let position = legend
                .parse::<LegendPosition>()
                .map_err(|source| ConfigError::Chart { chart: name.clone(), source })?;
            chart.legend = Some(position);
        }
        Ok(chart)
    }
}

enum CsvLoad {
    Csv(csv::Error),
    Invalid(String),
}

impl From<csv::Error> for CsvLoad {
    fn from(e: csv::Error) -> Self {
        CsvLoad::Csv(e)
    }
}

/// First column is the x-axis; every other column becomes a series named by its header.
fn load_csv(path: &Path) -> Result<(Vec<f64>, Vec<Series>), CsvLoad> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers.len() < 2 {
        return Err(CsvLoad::Invalid("needs an x column and at least one series column".into()));
    }

    let mut x = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Result<f64, CsvLoad> {
            let cell = rec.get(i).unwrap_or("");
            cell.parse::<f64>().map_err(|_| {
                CsvLoad::Invalid(format!("row {}, column '{}': '{}' is not a number", row + 1, headers[i], cell))
            })
        };
        x.push(parse(0)?);
        for (i, col) in columns.iter_mut().enumerate() {
            col.push(parse(i + 1)?);
        }
    }

    let series = headers[1..]
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.clone(), values))
        .collect();
    Ok((x, series))
}
