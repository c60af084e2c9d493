// File: crates/chart-core/src/render.rs
// Summary: Render-save-present entry point used by drivers; one fresh surface per chart.

use std::path::PathBuf;

use crate::chart::{encode_png, read_rgba8, write_png};
use crate::error::ChartError;
use crate::present::{Frame, Presenter};
use crate::{Chart, RenderOptions};

/// What a successful `render` produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub bytes: u64,
    pub width: u32,
    pub height: u32,
}

/// Validate `chart`, draw it, write the PNG to `chart.output` (replacing any
/// existing file), then hand the frame to `presenter`.
///
/// Nothing is written when validation fails. Presentation errors are logged
/// and do not fail the call.
pub fn render(chart: &Chart, opts: &RenderOptions, presenter: &mut dyn Presenter) -> Result<RenderReport, ChartError> {
    let mut surface = chart.draw(opts)?;
    let png = encode_png(&mut surface)?;
    let bytes = write_png(&chart.output, &png)?;
    tracing::debug!(chart = %chart.display_name(), path = %chart.output.display(), bytes, "wrote chart");

    if presenter.wants_frames() {
        match read_rgba8(&mut surface, opts.width, opts.height) {
            Ok((pixels, width, height, stride)) => {
                let frame = Frame { pixels, width, height, stride };
                if let Err(e) = presenter.present(chart, &frame) {
                    tracing::warn!(chart = %chart.display_name(), error = %e, "could not display chart");
                }
            }
            Err(e) => tracing::warn!(chart = %chart.display_name(), error = %e, "could not read back frame"),
        }
    }

    Ok(RenderReport {
        path: chart.output.clone(),
        bytes,
        width: opts.width as u32,
        height: opts.height as u32,
    })
}
