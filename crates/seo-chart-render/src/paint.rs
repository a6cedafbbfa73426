// File: crates/seo-chart-render/src/paint.rs
// Summary: Paints a `ChartFrame` onto any Skia canvas (raster surface or SVG canvas).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::frame::{ChartFrame, LabelPrimitive, StrokePrimitive, TextAlign};
use crate::theme::Rgba;

const DASH: [f32; 2] = [3.0, 3.0];

/// Paragraph-based text drawing with system font fallback.
pub struct TextPainter {
    fonts: FontCollection,
}

impl Default for TextPainter {
    fn default() -> Self { Self::new() }
}

impl TextPainter {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn layout(&self, label: &LabelPrimitive) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size((label.size as f32).max(1.0));
        style.set_color(label.color.to_skia());
        style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&style);
        builder.add_text(&label.text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `label` with its baseline at `(x, y)`; `End` labels finish at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, label: &LabelPrimitive) {
        let mut paragraph = self.layout(label);
        let size = label.size as f32;
        let x = match label.align {
            TextAlign::Start => label.x as f32,
            TextAlign::End => label.x as f32 - paragraph.longest_line(),
        };
        // paragraphs paint from their top-left corner
        paragraph.paint(canvas, (x, label.y as f32 - size * 0.8));
    }
}

/// Paint every layer of `frame` in order: background, rules, areas, lines, dots, panels, labels.
pub fn paint_frame(canvas: &skia::Canvas, frame: &ChartFrame, text: &TextPainter) {
    let bounds = skia::Rect::from_wh(frame.width as f32, frame.height as f32);
    canvas.draw_rect(bounds, &fill_paint(frame.background));

    for rule in &frame.rules {
        stroke(canvas, rule);
    }
    for area in &frame.areas {
        if let Some(mut path) = path_through(&area.vertices) {
            path.close();
            canvas.draw_path(&path, &fill_paint(area.color));
        }
    }
    for line in &frame.lines {
        stroke(canvas, line);
    }
    for dot in &frame.dots {
        canvas.draw_circle((dot.x as f32, dot.y as f32), dot.radius as f32, &fill_paint(dot.color));
    }
    for panel in &frame.panels {
        let rect = skia::Rect::from_xywh(panel.x as f32, panel.y as f32, panel.width as f32, panel.height as f32);
        let r = panel.radius as f32;
        canvas.draw_round_rect(rect, r, r, &fill_paint(panel.color));
    }
    for label in &frame.labels {
        text.draw(canvas, label);
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color.to_skia());
    paint
}

fn stroke(canvas: &skia::Canvas, prim: &StrokePrimitive) {
    let Some(path) = path_through(&prim.points) else { return };
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(prim.width as f32);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(prim.color.to_skia());
    if prim.dashed {
        paint.set_path_effect(skia::PathEffect::dash(&DASH, 0.0));
    }
    canvas.draw_path(&path, &paint);
}

fn path_through(vertices: &[(f64, f64)]) -> Option<skia::Path> {
    let (&(x0, y0), rest) = vertices.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((x0 as f32, y0 as f32));
    for &(x, y) in rest {
        path.line_to((x as f32, y as f32));
    }
    Some(path)
}
