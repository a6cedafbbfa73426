// File: crates/seo-chart-core/src/lib.rs
// Summary: Core library entry point; exports the metric series model, chart geometry and hit-testing.

pub mod error;
pub mod types;
pub mod metrics;
pub mod scale;
pub mod geometry;
pub mod locate;
pub mod tooltip;
pub mod cache;
pub mod load;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use types::{ChartConfig, Padding, RankOrientation};
pub use metrics::{MetricRecord, MetricSeries, Rank, SeriesSummary};
pub use geometry::{build_geometry, AreaPath, ChartGeometry, ChartPoint, Polyline};
pub use locate::locate;
pub use tooltip::Tooltip;
pub use cache::GeometryCache;
pub use load::{load_csv, load_json, load_path};
