// File: crates/seo-chart-render/src/svg.rs
// Summary: SVG output through Skia's SVG canvas, sharing the raster paint routine.

use std::path::Path;

use anyhow::{Context, Result};
use seo_chart_core::ChartGeometry;
use skia_safe as skia;
use tracing::debug;

use crate::frame::{build_frame, RenderOptions};
use crate::paint::{paint_frame, TextPainter};

/// Render `geo` to a standalone SVG document.
pub fn render_svg(geo: &ChartGeometry, opts: &RenderOptions) -> Result<String> {
    let frame = build_frame(geo, opts);
    let bounds = skia::Rect::from_wh(frame.width as f32, frame.height as f32);
    let canvas = skia::svg::Canvas::new(bounds, None);
    paint_frame(&canvas, &frame, &TextPainter::new());
    let data = canvas.end();
    debug!(bytes = data.len(), "svg document finished");
    String::from_utf8(data.as_bytes().to_vec()).context("svg canvas produced non-UTF-8 output")
}

/// Render and write to `path`, creating parent directories.
pub fn write_svg(geo: &ChartGeometry, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(geo, opts)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
