// File: crates/seo-chart-render/src/png.rs
// Summary: Headless PNG rendering of chart geometry using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use seo_chart_core::ChartGeometry;
use skia_safe as skia;

use crate::frame::{build_frame, RenderOptions};
use crate::paint::{paint_frame, TextPainter};

/// Render `geo` to PNG bytes.
pub fn render_png(geo: &ChartGeometry, opts: &RenderOptions) -> Result<Vec<u8>> {
    let frame = build_frame(geo, opts);
    let width = frame.width.round() as i32;
    let height = frame.height.round() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
    paint_frame(surface.canvas(), &frame, &TextPainter::new());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render and write a PNG to `path`, creating parent directories.
pub fn write_png(geo: &ChartGeometry, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_png(geo, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
