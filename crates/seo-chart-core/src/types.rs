// File: crates/seo-chart-core/src/types.rs
// Summary: Shared chart configuration (canvas size, padding, rank axis orientation, hover radius).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default canvas width in pixels.
pub const WIDTH: f64 = 800.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 250.0;
/// Default horizontal hit radius for tooltips, in pixels.
pub const HOVER_THRESHOLD_PX: f64 = 50.0;

/// Canvas padding, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal padding (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical padding (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20.0, 60.0, 30.0, 60.0)
    }
}

/// How a numeric rank maps onto the vertical axis.
///
/// `Raw` places `top + plot_h * rank / max_rank`, so rank 1 sits just under the
/// top edge. `Inverted` places `top + plot_h * (max_rank - rank) / max_rank`,
/// mirroring the scale. Unranked records sit on the chart floor either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrientation {
    #[default]
    Raw,
    Inverted,
}

/// Fixed layout parameters for one chart instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub rank_orientation: RankOrientation,
    pub hover_threshold_px: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Padding::default(),
            rank_orientation: RankOrientation::default(),
            hover_threshold_px: HOVER_THRESHOLD_PX,
        }
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self { width, height, padding, ..Self::default() }
    }

    pub fn with_rank_orientation(mut self, orientation: RankOrientation) -> Self {
        self.rank_orientation = orientation;
        self
    }

    pub fn with_hover_threshold(mut self, px: f64) -> Self {
        self.hover_threshold_px = px;
        self
    }

    pub fn plot_width(&self) -> f64 { self.width - self.padding.hsum() }
    pub fn plot_height(&self) -> f64 { self.height - self.padding.vsum() }

    /// Y coordinate of the chart floor (bottom edge of the plot area).
    pub fn floor_y(&self) -> f64 { self.height - self.padding.bottom }

    /// Reject layouts with no drawable plot area or a non-positive hover radius.
    pub fn validate(&self) -> ChartResult<()> {
        let all = [
            self.width,
            self.height,
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
            self.padding.left,
            self.hover_threshold_px,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidConfig("dimensions must be finite".into()));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding leaves no plot area in a {}x{} canvas",
                self.width, self.height
            )));
        }
        if self.hover_threshold_px <= 0.0 {
            return Err(ChartError::InvalidConfig("hover threshold must be positive".into()));
        }
        Ok(())
    }
}
