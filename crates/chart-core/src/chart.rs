// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, validation and headless rendering using Skia CPU raster surfaces.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::error::ChartError;
use crate::grid::{format_tick, nice_ticks};
use crate::legend::LegendPosition;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 17.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, labels, ticks, legend names). Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// One figure: named series sharing an x-axis of client counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x: Vec<f64>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Placement of the legend; drawn only when more than one series is present.
    pub legend: Option<LegendPosition>,
    pub output: PathBuf,
}

impl Chart {
    pub fn new(title: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            x: Vec::new(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            legend: None,
            output: output.into(),
        }
    }

    pub fn with_x(mut self, x: impl Into<Vec<f64>>) -> Self {
        self.x = x.into();
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_axis.label = x_label.into();
        self.y_axis.label = y_label.into();
        self
    }

    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend = Some(position);
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Name used in diagnostics: the title, or the output path for untitled charts.
    pub fn display_name(&self) -> String {
        if self.title.trim().is_empty() {
            self.output.display().to_string()
        } else {
            self.title.clone()
        }
    }

    /// Where the legend goes, if one is drawn at all.
    pub fn legend_position(&self) -> Option<LegendPosition> {
        (self.series.len() > 1).then(|| self.legend.unwrap_or_default())
    }

    /// Check the chart can be drawn: non-empty finite x-axis, at least one series,
    /// and every series exactly as long as the x-axis.
    pub fn validate(&self) -> Result<(), ChartError> {
        let chart = self.display_name();
        if self.x.is_empty() {
            return Err(ChartError::EmptyAxis { chart });
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries { chart });
        }
        if let Some(index) = self.x.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFinite { chart, what: "x-axis".into(), index });
        }
        for s in &self.series {
            if s.len() != self.x.len() {
                return Err(ChartError::LengthMismatch {
                    chart,
                    series: s.name.clone(),
                    expected: self.x.len(),
                    actual: s.len(),
                });
            }
            if let Some(index) = s.first_non_finite() {
                return Err(ChartError::NonFinite { chart, what: format!("series '{}'", s.name), index });
            }
        }
        Ok(())
    }

    /// Render the chart to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = self.draw(opts)?;
        encode_png(&mut surface)
    }

    /// Render the chart to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        let mut surface = self.draw(opts)?;
        read_rgba8(&mut surface, opts.width, opts.height)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// Returns the number of bytes written.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<u64, ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    /// Validate, then draw onto a fresh raster surface owned by the caller.
    pub(crate) fn draw(&self, opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
        self.validate()?;

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;

        let view = ViewState::from_chart(self);
        let (l, t, r, b) = opts.insets.plot_ltrb(opts.width, opts.height);
        let map = PlotMap { l, t, r, b, view };
        let (x_ticks, x_step) = nice_ticks(view.x_min, view.x_max, 10);
        let (y_ticks, y_step) = nice_ticks(view.y_min, view.y_max, 8);
        let theme = &opts.theme;
        let shaper = opts.draw_labels.then(TextShaper::new);

        let canvas = surface.canvas();
        canvas.clear(theme.background);

        draw_grid(canvas, &map, &x_ticks, &y_ticks, theme);

        // Series are clipped to the plot so fixed limits cannot spill into the margins.
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &map, &self.x, s, theme.series_color(i));
        }
        canvas.restore();

        draw_axes(canvas, &map, &x_ticks, &y_ticks, theme);

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &map, &x_ticks, x_step, &y_ticks, y_step, theme);
            draw_titles(canvas, shaper, &map, self, opts);
        }

        if let Some(position) = self.legend_position() {
            draw_legend(canvas, shaper.as_ref(), &map, position, &self.series, theme);
        }

        Ok(surface)
    }
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>, ChartError> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn read_rgba8(
    surface: &mut skia::Surface,
    width: i32,
    height: i32,
) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::ReadPixels);
    }
    Ok((pixels, width as u32, height as u32, stride))
}

pub(crate) fn write_png(path: &Path, bytes: &[u8]) -> Result<u64, ChartError> {
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    Ok(bytes.len() as u64)
}

// ---- helpers ----------------------------------------------------------------

/// Data-to-pixel mapping for the plot rectangle.
struct PlotMap {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    view: ViewState,
}

impl PlotMap {
    fn sx(&self, x: f64) -> f32 {
        let span = (self.view.x_max - self.view.x_min).max(1e-12);
        self.l + ((x - self.view.x_min) / span) as f32 * (self.r - self.l)
    }

    fn sy(&self, y: f64) -> f32 {
        let span = (self.view.y_max - self.view.y_min).max(1e-12);
        self.b - ((y - self.view.y_min) / span) as f32 * (self.b - self.t)
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, map: &PlotMap, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke(theme.grid, 1.0);
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, map.t), (px, map.b), &paint);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((map.l, py), (map.r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, map: &PlotMap, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let frame = stroke(theme.axis_line, 1.2);
    canvas.draw_rect(skia::Rect::from_ltrb(map.l, map.t, map.r, map.b), &frame);

    let tick = stroke(theme.tick, 1.0);
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, map.b), (px, map.b + TICK_LEN), &tick);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((map.l - TICK_LEN, py), (map.l, py), &tick);
    }
}

fn draw_line_series(canvas: &skia::Canvas, map: &PlotMap, x: &[f64], series: &Series, color: skia::Color) {
    let mut points = series.points(x);
    let Some((x0, y0)) = points.next() else { return };

    let mut path = skia::Path::new();
    path.move_to((map.sx(x0), map.sy(y0)));
    for (x, y) in points {
        path.line_to((map.sx(x), map.sy(y)));
    }

    let mut paint = stroke(color, 2.0);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    if series.len() == 1 {
        // a lone point has no segment; draw it as a dot
        paint.set_style(skia::paint::Style::Fill);
        canvas.draw_circle((map.sx(x0), map.sy(y0)), 3.0, &paint);
    } else {
        canvas.draw_path(&path, &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    map: &PlotMap,
    x_ticks: &[f64],
    x_step: f64,
    y_ticks: &[f64],
    y_step: f64,
    theme: &Theme,
) {
    for &x in x_ticks {
        let label = format_tick(x, x_step);
        shaper.draw_centered(canvas, &label, map.sx(x), map.b + TICK_LEN + TICK_SIZE + 3.0, TICK_SIZE, theme.tick);
    }
    for &y in y_ticks {
        let label = format_tick(y, y_step);
        shaper.draw_right(canvas, &label, map.l - TICK_LEN - 4.0, map.sy(y) + TICK_SIZE * 0.4, TICK_SIZE, theme.tick, true);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, map: &PlotMap, chart: &Chart, opts: &RenderOptions) {
    let color = opts.theme.axis_label;
    let cx = (map.l + map.r) * 0.5;
    if !chart.title.is_empty() {
        shaper.draw_centered(canvas, &chart.title, cx, map.t - 16.0, TITLE_SIZE, color);
    }
    if !chart.x_axis.label.is_empty() {
        let y = (map.b + opts.height as f32) * 0.5 + LABEL_SIZE;
        shaper.draw_centered(canvas, &chart.x_axis.label, cx, y, LABEL_SIZE, color);
    }
    if !chart.y_axis.label.is_empty() {
        let x = LABEL_SIZE;
        shaper.draw_vertical(canvas, &chart.y_axis.label, x, (map.t + map.b) * 0.5, LABEL_SIZE, color);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    map: &PlotMap,
    position: LegendPosition,
    series: &[Series],
    theme: &Theme,
) {
    const PAD: f32 = 8.0;
    const SWATCH: f32 = 26.0;
    const GAP: f32 = 8.0;
    const ROW: f32 = LEGEND_SIZE + 8.0;

    let text_w = shaper
        .map(|s| series.iter().map(|x| s.measure_width(&x.name, LEGEND_SIZE, false)).fold(0.0f32, f32::max))
        .unwrap_or(0.0);
    let w = PAD * 2.0 + SWATCH + if text_w > 0.0 { GAP + text_w } else { 0.0 };
    let h = PAD * 2.0 + ROW * series.len() as f32;
    let (x0, y0) = position.place((map.l, map.t, map.r, map.b), w, h, 10.0);
    let rect = skia::Rect::from_xywh(x0, y0, w, h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke(theme.legend_border, 1.0));

    for (i, s) in series.iter().enumerate() {
        let cy = y0 + PAD + ROW * (i as f32 + 0.5);
        let sx = x0 + PAD;
        canvas.draw_line((sx, cy), (sx + SWATCH, cy), &stroke(theme.series_color(i), 2.0));
        if let Some(shaper) = shaper {
            shaper.draw_left(canvas, &s.name, sx + SWATCH + GAP, cy + LEGEND_SIZE * 0.4, LEGEND_SIZE, theme.axis_label, false);
        }
    }
}
