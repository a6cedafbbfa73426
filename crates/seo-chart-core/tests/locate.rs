// File: crates/seo-chart-core/tests/locate.rs
// Purpose: Nearest-point hit-testing and tooltip payloads.

use chrono::NaiveDate;
use seo_chart_core::{build_geometry, locate, ChartConfig, ChartPoint, MetricRecord, MetricSeries, Rank};

fn point(index: usize, x: f64) -> ChartPoint {
    let date = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date") + chrono::Days::new(index as u64);
    ChartPoint {
        record: MetricRecord::new(date, Rank::Ranked(50), 0, 10),
        index,
        x,
        y_impressions: 100.0,
        y_rank: 120.0,
    }
}

fn three_points() -> Vec<ChartPoint> {
    vec![point(0, 60.0), point(1, 200.0), point(2, 340.0)]
}

#[test]
fn returns_nearest_within_threshold() {
    let pts = three_points();
    let hit = locate(&pts, 210.0, 50.0).expect("hit");
    assert_eq!(hit.x, 200.0);
    assert_eq!(locate(&pts, 55.0, 50.0).map(|p| p.index), Some(0));
    assert_eq!(locate(&pts, 400.0, 70.0).map(|p| p.index), Some(2));
}

#[test]
fn returns_none_outside_threshold() {
    let pts = three_points();
    assert!(locate(&pts, 280.0, 50.0).is_none());
    // Distance equal to the threshold is not a hit.
    assert!(locate(&pts, 250.0, 50.0).is_none());
    assert!(locate(&[], 60.0, 50.0).is_none());
}

#[test]
fn equidistant_points_prefer_the_earlier_one() {
    let pts = three_points();
    let hit = locate(&pts, 130.0, 100.0).expect("hit");
    assert_eq!(hit.index, 0);

    // Two records on the same date share an x slot.
    let tied = vec![point(0, 100.0), point(1, 100.0)];
    assert_eq!(locate(&tied, 104.0, 25.0).map(|p| p.index), Some(0));
}

#[test]
fn geometry_hover_uses_configured_threshold() {
    let series: MetricSeries = [
        ("2024-07-28", Rank::Unranked, 0, 0),
        ("2024-08-04", Rank::Ranked(87), 0, 15),
        ("2024-08-11", Rank::Ranked(62), 1, 78),
    ]
    .into_iter()
    .map(|(d, r, c, i)| {
        MetricRecord::new(NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("valid date"), r, c, i)
    })
    .collect();

    let wide = ChartConfig::default().with_hover_threshold(50.0);
    let geo = build_geometry(&series, &wide).expect("geometry");
    // Points at x = 60, 400, 740.
    let tip = geo.hover(430.0).expect("tooltip");
    assert_eq!(tip.date, "Aug 4, 2024");
    assert_eq!(tip.rank, "#87");
    assert_eq!(tip.anchor_x, 400.0);

    let tight = ChartConfig::default().with_hover_threshold(25.0);
    let geo = build_geometry(&series, &tight).expect("geometry");
    assert!(geo.hover(430.0).is_none());
    assert_eq!(geo.hover(50.0).map(|t| t.rank), Some("Not Indexed".to_string()));
}
