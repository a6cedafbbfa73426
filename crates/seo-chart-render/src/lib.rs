// File: crates/seo-chart-render/src/lib.rs
// Summary: Renderer crate entry point; lays `ChartGeometry` out as a frame and paints it to SVG or PNG via Skia.

pub mod grid;
pub mod theme;
pub mod frame;
pub mod paint;
pub mod svg;
pub mod png;

pub use frame::{build_frame, tooltip_origin, ChartFrame, RenderOptions};
pub use png::{render_png, write_png};
pub use svg::{render_svg, write_svg};
pub use theme::{Rgba, Theme};
