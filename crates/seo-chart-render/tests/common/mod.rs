// File: crates/seo-chart-render/tests/common/mod.rs
// Purpose: Shared fixture: the first three weeks of the experiment.

#![allow(dead_code)]

use chrono::NaiveDate;
use seo_chart_core::{build_geometry, ChartConfig, ChartGeometry, MetricRecord, MetricSeries, Rank};

pub fn launch_geometry(config: &ChartConfig) -> ChartGeometry {
    let day = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date");
    let series = MetricSeries::new(vec![
        MetricRecord::new(day("2024-07-28"), Rank::Unranked, 0, 0),
        MetricRecord::new(day("2024-08-04"), Rank::Ranked(87), 0, 15),
        MetricRecord::new(day("2024-08-11"), Rank::Ranked(62), 1, 78),
    ]);
    build_geometry(&series, config).expect("geometry")
}
