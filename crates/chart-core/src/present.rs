// File: crates/chart-core/src/present.rs
// Summary: Presenter seam for interactive viewing of rendered frames; headless default.

use crate::error::PresentError;
use crate::Chart;

/// Unpremultiplied RGBA8 pixels of a rendered chart.
#[derive(Clone, Debug)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl Frame {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Pack pixels as `0x00RRGGBB` words, the layout window blitters expect.
    pub fn to_xrgb(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for row in self.pixels.chunks_exact(self.stride).take(self.height as usize) {
            for px in row.chunks_exact(4).take(self.width as usize) {
                out.push(((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32);
            }
        }
        out
    }
}

/// Shows a rendered chart to a user. Failures are reported, never fatal to rendering.
pub trait Presenter {
    /// Whether the renderer should read back pixels for this presenter at all.
    fn wants_frames(&self) -> bool { true }

    fn present(&mut self, chart: &Chart, frame: &Frame) -> Result<(), PresentError>;
}

/// Presenter for non-interactive runs: nothing is shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Presenter for Headless {
    fn wants_frames(&self) -> bool { false }

    fn present(&mut self, chart: &Chart, _frame: &Frame) -> Result<(), PresentError> {
        tracing::debug!(chart = %chart.display_name(), "headless: skipping display");
        Ok(())
    }
}
