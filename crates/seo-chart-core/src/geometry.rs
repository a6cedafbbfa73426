// File: crates/seo-chart-core/src/geometry.rs
// Summary: Builds pixel-space polylines, filled areas and the hit-test point index for a metric series.

use serde::Serialize;
use tracing::{debug, trace};

use crate::locate::locate;
use crate::metrics::{MetricRecord, MetricSeries};
use crate::scale::{IndexScale, RankScale, ValueScale};
use crate::tooltip::Tooltip;
use crate::types::ChartConfig;

/// Lower bound for the impressions scale; keeps an all-zero series off a zero divisor.
pub const MIN_IMPRESSIONS_SCALE: u64 = 1;
/// Lower bound for the rank scale.
pub const MIN_RANK_SCALE: u32 = 100;

/// One record placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub record: MetricRecord,
    /// Position in chronological order.
    pub index: usize,
    pub x: f64,
    pub y_impressions: f64,
    pub y_rank: f64,
}

impl ChartPoint {
    pub fn is_ranked(&self) -> bool { self.record.rank.is_ranked() }
}

/// Ordered `(x, y)` vertices of an open line.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self { points: points.into_iter().collect() }
    }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<(f64, f64)> { self.points.first().copied() }
    pub fn last(&self) -> Option<(f64, f64)> { self.points.last().copied() }

    /// Space-separated `x,y` pairs, as used by an SVG `<polyline points=..>` attribute.
    pub fn to_points_attr(&self) -> String {
        self.points
            .iter()
            .map(|&(x, y)| format!("{},{}", fmt_coord(x), fmt_coord(y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Closed outline under a line: down to the floor at the first x, along the
/// line, back down to the floor at the last x.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AreaPath {
    pub vertices: Vec<(f64, f64)>,
}

impl AreaPath {
    pub fn under(line: &Polyline, floor_y: f64) -> Self {
        let (Some((x0, _)), Some((xn, _))) = (line.first(), line.last()) else {
            return Self::default();
        };
        let mut vertices = Vec::with_capacity(line.len() + 2);
        vertices.push((x0, floor_y));
        vertices.extend_from_slice(&line.points);
        vertices.push((xn, floor_y));
        Self { vertices }
    }

    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// SVG path data (`M .. L .. Z`); empty string for an empty area.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::new();
        for (i, &(x, y)) in self.vertices.iter().enumerate() {
            if i > 0 { out.push(' '); }
            out.push(if i == 0 { 'M' } else { 'L' });
            out.push_str(&format!("{},{}", fmt_coord(x), fmt_coord(y)));
        }
        if !out.is_empty() { out.push_str(" Z"); }
        out
    }
}

/// Everything a renderer needs to draw the impressions/rank chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub impression_line: Polyline,
    /// Built from ranked points only, so it can be shorter than `points`.
    pub rank_line: Polyline,
    pub impression_area: AreaPath,
    pub rank_area: AreaPath,
    pub max_impressions: u64,
    pub max_rank: u32,
    pub config: ChartConfig,
}

impl ChartGeometry {
    pub fn floor_y(&self) -> f64 { self.config.floor_y() }

    /// Nearest point within this chart's hover threshold.
    pub fn locate(&self, cursor_x: f64) -> Option<&ChartPoint> {
        locate(&self.points, cursor_x, self.config.hover_threshold_px)
    }

    /// Tooltip payload for the point under the cursor, if any.
    pub fn hover(&self, cursor_x: f64) -> Option<Tooltip> {
        self.locate(cursor_x).map(Tooltip::from_point)
    }
}

/// Map a series onto the canvas described by `config`.
///
/// Returns `None` when the series has fewer than two records; callers show a
/// "not enough data" message instead of a chart. Input order is irrelevant,
/// records are sorted by date first.
pub fn build_geometry(series: &MetricSeries, config: &ChartConfig) -> Option<ChartGeometry> {
    if series.len() < 2 {
        debug!(records = series.len(), "not enough records to draw a line");
        return None;
    }

    let records = series.sorted_by_date();
    let max_impressions = records
        .iter()
        .map(|r| r.impressions)
        .max()
        .unwrap_or(0)
        .max(MIN_IMPRESSIONS_SCALE);
    let max_rank = records
        .iter()
        .filter_map(|r| r.rank.position())
        .max()
        .unwrap_or(0)
        .max(MIN_RANK_SCALE);

    let pad = config.padding;
    let floor = config.floor_y();
    let xs = IndexScale::new(pad.left, config.width - pad.right, records.len())?;
    let ys_impressions = ValueScale::new(pad.top, floor, max_impressions as f64);
    let ys_rank = RankScale::new(pad.top, floor, max_rank as f64, config.rank_orientation);

    let points: Vec<ChartPoint> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| ChartPoint {
            record,
            index,
            x: xs.to_px(index),
            y_impressions: ys_impressions.to_px(record.impressions as f64),
            y_rank: ys_rank.to_px(record.rank),
        })
        .collect();

    let impression_line = Polyline::from_points(points.iter().map(|p| (p.x, p.y_impressions)));
    let rank_line = Polyline::from_points(
        points.iter().filter(|p| p.is_ranked()).map(|p| (p.x, p.y_rank)),
    );
    let impression_area = AreaPath::under(&impression_line, floor);
    let rank_area = AreaPath::under(&rank_line, floor);

    trace!(
        points = points.len(),
        ranked = rank_line.len(),
        max_impressions,
        max_rank,
        "built chart geometry"
    );

    Some(ChartGeometry {
        points,
        impression_line,
        rank_line,
        impression_area,
        rank_area,
        max_impressions,
        max_rank,
        config: *config,
    })
}

/// Two decimals, trailing zeros dropped (`60`, `286.67`).
fn fmt_coord(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
