// File: crates/seo-chart-core/src/cache.rs
// Summary: Memoizes chart geometry so pointer moves only re-run the locator.

use tracing::debug;

use crate::geometry::{build_geometry, ChartGeometry};
use crate::metrics::MetricSeries;
use crate::types::ChartConfig;

/// Holds the geometry for the last (series, config) pair seen.
/// An insufficient-data result is cached as well.
#[derive(Debug, Default)]
pub struct GeometryCache {
    key: Option<(MetricSeries, ChartConfig)>,
    geometry: Option<ChartGeometry>,
    hits: u64,
    misses: u64,
}

impl GeometryCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_build(&mut self, series: &MetricSeries, config: &ChartConfig) -> Option<&ChartGeometry> {
        let fresh = matches!(&self.key, Some((s, c)) if s == series && c == config);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            debug!(records = series.len(), "chart inputs changed; rebuilding geometry");
            self.geometry = build_geometry(series, config);
            self.key = Some((series.clone(), *config));
        }
        self.geometry.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.geometry = None;
    }

    pub fn hits(&self) -> u64 { self.hits }
    pub fn misses(&self) -> u64 { self.misses }
}
