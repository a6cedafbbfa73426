// File: crates/seo-chart-core/src/scale.rs
// Summary: Index (X) and value/rank (Y) transforms from data space to canvas pixels.

use crate::metrics::Rank;
use crate::types::RankOrientation;

/// Horizontal scale that spaces `count` slots evenly between two pixel edges.
/// Position depends on the index alone, not on the elapsed time between records.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub right_px: f64,
    pub count: usize,
}

impl IndexScale {
    /// `None` when fewer than two slots exist; a single slot has no span to divide.
    pub fn new(left_px: f64, right_px: f64, count: usize) -> Option<Self> {
        (count >= 2).then_some(Self { left_px, right_px, count })
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        let t = index as f64 / (self.count - 1) as f64;
        self.left_px + t * (self.right_px - self.left_px)
    }
    pub fn spacing(&self) -> f64 {
        (self.right_px - self.left_px) / (self.count - 1) as f64
    }
}

/// Linear scale mapping `[0, vmax]` onto `[bottom_px, top_px]`: larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, bottom_px: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.top_px + (self.bottom_px - self.top_px) * (1.0 - v / self.vmax)
    }
}

/// Rank scale over `[0, max_rank]`. Unranked values land on the floor (`bottom_px`).
#[derive(Clone, Copy, Debug)]
pub struct RankScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub max_rank: f64,
    pub orientation: RankOrientation,
}

impl RankScale {
    pub fn new(top_px: f64, bottom_px: f64, max_rank: f64, orientation: RankOrientation) -> Self {
        Self { top_px, bottom_px, max_rank, orientation }
    }
    #[inline]
    pub fn to_px(&self, rank: Rank) -> f64 {
        let Some(position) = rank.position() else {
            return self.bottom_px;
        };
        let r = position as f64;
        let frac = match self.orientation {
            RankOrientation::Raw => r / self.max_rank,
            RankOrientation::Inverted => (self.max_rank - r) / self.max_rank,
        };
        self.top_px + (self.bottom_px - self.top_px) * frac
    }
}
