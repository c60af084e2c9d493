// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot rectangle `(left, top, right, bottom)` inside a `width` x `height` surface.
    /// Degenerate surfaces collapse to a one-pixel plot instead of inverting.
    pub fn plot_ltrb(&self, width: i32, height: i32) -> (f32, f32, f32, f32) {
        let l = self.left as f32;
        let t = self.top as f32;
        let r = (width as f32 - self.right as f32).max(l + 1.0);
        let b = (height as f32 - self.bottom as f32).max(t + 1.0);
        (l, t, r, b)
    }
}

impl Default for Insets {
    // Room for the title above and tick labels on the left/bottom.
    fn default() -> Self {
        Self::new(84, 28, 52, 64)
    }
}
