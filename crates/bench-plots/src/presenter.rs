// File: crates/bench-plots/src/presenter.rs
// Summary: Chooses how rendered charts are shown: a native window when possible, otherwise nothing.

use chart_core::{Headless, Presenter};

/// Whether a display server is reachable. Only X11/Wayland sessions can be
/// missing one; other platforms always have a desktop.
pub fn display_available() -> bool {
    if cfg!(all(unix, not(target_os = "macos"))) {
        std::env::var_os("DISPLAY").is_some_and(|v| !v.is_empty())
            || std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
    } else {
        true
    }
}

/// Pick the presenter for a run. `show = false` always gives `Headless`.
pub fn select(show: bool) -> Box<dyn Presenter> {
    if !show {
        return Box::new(Headless);
    }

    #[cfg(feature = "window")]
    {
        match crate::window::WindowPresenter::new() {
            Ok(p) => return Box::new(p),
            Err(e) => tracing::warn!(error = %e, "charts will be saved but not displayed"),
        }
    }

    #[cfg(not(feature = "window"))]
    tracing::info!("built without the `window` feature; charts are saved but not displayed");

    Box::new(Headless)
}
