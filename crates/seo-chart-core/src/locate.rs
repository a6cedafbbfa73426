// File: crates/seo-chart-core/src/locate.rs
// Summary: Nearest-point lookup along X for tooltip hit-testing.

use tracing::trace;

use crate::geometry::ChartPoint;

/// Return the point whose `x` is closest to `cursor_x`, provided that distance is
/// strictly below `threshold_px`.
///
/// Linear scan; the best candidate is only replaced on a strictly smaller
/// distance, so the chronologically earlier point wins a tie.
pub fn locate(points: &[ChartPoint], cursor_x: f64, threshold_px: f64) -> Option<&ChartPoint> {
    let mut best: Option<(f64, &ChartPoint)> = None;
    for point in points {
        let dist = (point.x - cursor_x).abs();
        match best {
            Some((current, _)) if current <= dist => {}
            _ => best = Some((dist, point)),
        }
    }

    let hit = best.filter(|&(dist, _)| dist < threshold_px).map(|(_, p)| p);
    trace!(cursor_x, threshold_px, hit = ?hit.map(|p| p.index), "locate");
    hit
}
