// File: crates/seo-chart-render/src/frame.rs
// Summary: Backend-neutral draw list for one chart: rules, areas, lines, dots, tooltip panel and labels.

use std::fmt;

use seo_chart_core::{ChartGeometry, ChartPoint, RankOrientation, Tooltip};
use tracing::{debug, trace};

use crate::grid::{rule_positions, RULES};
use crate::theme::{Rgba, Theme};

pub const TOOLTIP_WIDTH: f64 = 150.0;
pub const TOOLTIP_LINE_HEIGHT: f64 = 16.0;
const TOOLTIP_GAP: f64 = 12.0;
const LABEL_SIZE: f64 = 11.0;
const DOT_RADIUS: f64 = 3.0;
const HIGHLIGHT_RADIUS: f64 = 5.0;

/// What to draw on top of the geometry and how to color it.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub draw_grid: bool,
    pub draw_dots: bool,
    /// Axis extremes and first/last date labels. The hover tooltip is drawn regardless.
    pub draw_labels: bool,
    /// Cursor x in canvas pixels; when it lands near a point that point is highlighted.
    pub cursor_x: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            draw_grid: true,
            draw_dots: true,
            draw_labels: true,
            cursor_x: None,
        }
    }
}

/// Open stroke through `points`.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePrimitive {
    pub points: Vec<(f64, f64)>,
    pub width: f64,
    pub color: Rgba,
    pub dashed: bool,
}

/// Closed polygon filled with a translucent color.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
}

/// Rounded rectangle; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    End,
}

/// Text run anchored at its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba,
    pub align: TextAlign,
}

/// Everything to paint, grouped by layer. Layers are painted in field order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub rules: Vec<StrokePrimitive>,
    pub areas: Vec<AreaPrimitive>,
    pub lines: Vec<StrokePrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub panels: Vec<PanelPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl ChartFrame {
    fn new(width: f64, height: f64, background: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            rules: Vec::new(),
            areas: Vec::new(),
            lines: Vec::new(),
            dots: Vec::new(),
            panels: Vec::new(),
            labels: Vec::new(),
        }
    }

    fn stroke(&mut self, points: Vec<(f64, f64)>, width: f64, color: Rgba) {
        self.lines.push(StrokePrimitive { points, width, color, dashed: false });
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.dots.push(DotPrimitive { x, y, radius, color });
    }

    fn label(&mut self, text: impl Into<String>, (x, y): (f64, f64), color: Rgba, align: TextAlign) {
        self.labels.push(LabelPrimitive { text: text.into(), x, y, size: LABEL_SIZE, color, align });
    }
}

/// Lay out `geo` for painting.
pub fn build_frame(geo: &ChartGeometry, opts: &RenderOptions) -> ChartFrame {
    let cfg = &geo.config;
    let theme = &opts.theme;
    let left = cfg.padding.left;
    let right = cfg.width - cfg.padding.right;
    let top = cfg.padding.top;
    let floor = geo.floor_y();

    let mut frame = ChartFrame::new(cfg.width, cfg.height, theme.background);

    if opts.draw_grid {
        frame.rules = rule_positions(top, floor, RULES)
            .into_iter()
            .map(|y| StrokePrimitive { points: vec![(left, y), (right, y)], width: 1.0, color: theme.grid, dashed: false })
            .collect();
    }

    for (area, color) in [(&geo.impression_area, theme.impressions_fill), (&geo.rank_area, theme.rank_fill)] {
        if !area.is_empty() {
            frame.areas.push(AreaPrimitive { vertices: area.vertices.clone(), color });
        }
    }

    for (line, color) in [(&geo.impression_line, theme.impressions_stroke), (&geo.rank_line, theme.rank_stroke)] {
        if !line.is_empty() {
            frame.stroke(line.points.clone(), 2.0, color);
        }
    }

    if opts.draw_dots {
        for p in &geo.points {
            frame.dot(p.x, p.y_impressions, DOT_RADIUS, theme.impressions_stroke);
            if p.is_ranked() {
                frame.dot(p.x, p.y_rank, DOT_RADIUS, theme.rank_stroke);
            }
        }
    }

    if opts.draw_labels {
        push_axis_labels(&mut frame, geo, theme);
    }

    if let Some(tip) = opts.cursor_x.and_then(|cx| geo.hover(cx)) {
        debug!(index = tip.index, date = %tip.date, "highlighting hovered point");
        push_highlight(&mut frame, geo, &tip, theme);
    }

    trace!(
        rules = frame.rules.len(),
        lines = frame.lines.len(),
        dots = frame.dots.len(),
        labels = frame.labels.len(),
        "chart frame built"
    );
    frame
}

/// Left edge of the tooltip panel for a point at `anchor_x`.
///
/// The panel sits right of the point and flips left when it would cross the
/// plot's right edge; the result is then clamped to the canvas.
pub fn tooltip_origin(anchor_x: f64, plot_right: f64, canvas_width: f64) -> f64 {
    let beside = anchor_x + TOOLTIP_GAP;
    let x = if beside + TOOLTIP_WIDTH > plot_right {
        anchor_x - TOOLTIP_GAP - TOOLTIP_WIDTH
    } else {
        beside
    };
    x.clamp(0.0, (canvas_width - TOOLTIP_WIDTH).max(0.0))
}

fn push_axis_labels(frame: &mut ChartFrame, geo: &ChartGeometry, theme: &Theme) {
    let cfg = &geo.config;
    let left = cfg.padding.left;
    let right = cfg.width - cfg.padding.right;
    let top = cfg.padding.top;
    let floor = geo.floor_y();
    let c = theme.axis_label;

    // impressions on the left, rank on the right
    frame.label(geo.max_impressions.to_string(), (left - 8.0, top + 4.0), c, TextAlign::End);
    frame.label("0", (left - 8.0, floor + 4.0), c, TextAlign::End);
    let (rank_top, rank_bottom) = match cfg.rank_orientation {
        RankOrientation::Raw => ("#1".to_string(), format!("#{}", geo.max_rank)),
        RankOrientation::Inverted => (format!("#{}", geo.max_rank), "#1".to_string()),
    };
    frame.label(rank_top, (right + 8.0, top + 4.0), c, TextAlign::Start);
    frame.label(rank_bottom, (right + 8.0, floor + 4.0), c, TextAlign::Start);

    if let (Some(first), Some(last)) = (geo.points.first(), geo.points.last()) {
        let day = |p: &ChartPoint| p.record.date.format("%b %-d").to_string();
        frame.label(day(first), (first.x, floor + 18.0), c, TextAlign::Start);
        frame.label(day(last), (last.x, floor + 18.0), c, TextAlign::End);
    }
}

fn push_highlight(frame: &mut ChartFrame, geo: &ChartGeometry, tip: &Tooltip, theme: &Theme) {
    let cfg = &geo.config;
    let top = cfg.padding.top;
    let x = tip.anchor_x;

    frame.lines.push(StrokePrimitive {
        points: vec![(x, top), (x, geo.floor_y())],
        width: 1.0,
        color: theme.highlight,
        dashed: true,
    });
    frame.dot(x, tip.anchor_y, HIGHLIGHT_RADIUS, theme.highlight);
    if let Some(p) = geo.points.get(tip.index).filter(|p| p.is_ranked()) {
        frame.dot(p.x, p.y_rank, HIGHLIGHT_RADIUS, theme.highlight);
    }

    let lines = tip.lines();
    let panel_x = tooltip_origin(x, cfg.width - cfg.padding.right, cfg.width);
    frame.panels.push(PanelPrimitive {
        x: panel_x,
        y: top,
        width: TOOLTIP_WIDTH,
        height: TOOLTIP_LINE_HEIGHT * lines.len() as f64 + 8.0,
        radius: 4.0,
        color: theme.tooltip_background,
    });
    for (i, line) in lines.into_iter().enumerate() {
        let baseline = top + TOOLTIP_LINE_HEIGHT * (i as f64 + 1.0);
        frame.label(line, (panel_x + 8.0, baseline), theme.tooltip_text, TextAlign::Start);
    }
}

// ---- listing ----------------------------------------------------------------

fn color(c: Rgba) -> String {
    if c.a == 255 { c.hex() } else { format!("{}/{}", c.hex(), c.a) }
}

fn coords(points: &[(f64, f64)]) -> String {
    points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect::<Vec<_>>().join(" ")
}

/// One primitive per line, coordinates to one decimal. Used for logging and golden tests.
impl fmt::Display for ChartFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "canvas {}x{} {}", self.width, self.height, color(self.background))?;
        for r in &self.rules {
            writeln!(f, "rule {} w{} {}", coords(&r.points), r.width, color(r.color))?;
        }
        for a in &self.areas {
            writeln!(f, "area {} {}", coords(&a.vertices), color(a.color))?;
        }
        for l in &self.lines {
            let kind = if l.dashed { "dash" } else { "line" };
            writeln!(f, "{kind} {} w{} {}", coords(&l.points), l.width, color(l.color))?;
        }
        for d in &self.dots {
            writeln!(f, "dot {:.1},{:.1} r{} {}", d.x, d.y, d.radius, color(d.color))?;
        }
        for p in &self.panels {
            writeln!(
                f,
                "panel {:.1},{:.1} {}x{} r{} {}",
                p.x, p.y, p.width, p.height, p.radius, color(p.color)
            )?;
        }
        for t in &self.labels {
            let align = match t.align {
                TextAlign::Start => "start",
                TextAlign::End => "end",
            };
            writeln!(f, "text {:?} {:.1},{:.1} {align} {} {}", t.text, t.x, t.y, t.size, color(t.color))?;
        }
        Ok(())
    }
}
