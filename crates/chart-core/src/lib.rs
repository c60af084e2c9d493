// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod legend;
pub mod present;
pub mod render;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::{ChartError, PresentError};
pub use legend::LegendPosition;
pub use present::{Frame, Headless, Presenter};
pub use render::{render, RenderReport};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
