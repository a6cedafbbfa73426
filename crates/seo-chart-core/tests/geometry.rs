// File: crates/seo-chart-core/tests/geometry.rs
// Purpose: Chart geometry construction: ordering, scaling, floors and the unranked sentinel.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use seo_chart_core::{
    build_geometry, ChartConfig, MetricRecord, MetricSeries, Padding, Rank, RankOrientation,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn rec(date: &str, rank: Rank, clicks: u64, impressions: u64) -> MetricRecord {
    MetricRecord::new(day(date), rank, clicks, impressions)
}

fn dashboard_config() -> ChartConfig {
    ChartConfig::new(800.0, 250.0, Padding::new(20.0, 60.0, 30.0, 60.0))
}

fn launch_series() -> MetricSeries {
    MetricSeries::new(vec![
        rec("2024-07-28", Rank::Unranked, 0, 0),
        rec("2024-08-04", Rank::Ranked(87), 0, 15),
        rec("2024-08-11", Rank::Ranked(62), 1, 78),
    ])
}

#[test]
fn fewer_than_two_records_yield_none() {
    let cfg = dashboard_config();
    assert!(build_geometry(&MetricSeries::default(), &cfg).is_none());
    let one = MetricSeries::new(vec![rec("2024-08-04", Rank::Ranked(87), 0, 15)]);
    assert!(build_geometry(&one, &cfg).is_none());
    let two = MetricSeries::new(vec![
        rec("2024-08-04", Rank::Ranked(87), 0, 15),
        rec("2024-08-11", Rank::Ranked(62), 1, 78),
    ]);
    assert!(build_geometry(&two, &cfg).is_some());
}

#[test]
fn launch_week_end_to_end() {
    let geo = build_geometry(&launch_series(), &dashboard_config()).expect("geometry");
    assert_eq!(geo.max_impressions, 78);
    assert_eq!(geo.max_rank, 100);
    assert_eq!(geo.points.len(), 3);
    assert_eq!(geo.rank_line.len(), 2);
    assert_eq!(geo.impression_line.len(), 3);

    let first = &geo.points[0];
    assert_eq!(first.y_impressions, 220.0);
    assert_eq!(first.y_rank, 220.0);
    assert_eq!(first.y_impressions, geo.floor_y());

    // Raw orientation: 20 + 200 * 87/100.
    assert_relative_eq!(geo.points[1].y_rank, 194.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[2].y_rank, 144.0, epsilon = 1e-9);
    assert_eq!(geo.points[2].y_impressions, 20.0);
    assert_eq!(geo.rank_line.points[0], (geo.points[1].x, geo.points[1].y_rank));
}

#[test]
fn unsorted_input_is_sorted_by_date() {
    let series = MetricSeries::new(vec![
        rec("2024-08-11", Rank::Ranked(62), 1, 78),
        rec("2024-07-28", Rank::Unranked, 0, 0),
        rec("2024-08-04", Rank::Ranked(87), 0, 15),
    ]);
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    let dates: Vec<_> = geo.points.iter().map(|p| p.record.date).collect();
    assert_eq!(dates, vec![day("2024-07-28"), day("2024-08-04"), day("2024-08-11")]);
    let indices: Vec<_> = geo.points.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(geo, build_geometry(&launch_series(), &dashboard_config()).expect("geometry"));
}

#[test]
fn x_is_evenly_spaced_between_paddings() {
    let series: MetricSeries = (0..7)
        .map(|i| rec(&format!("2024-08-{:02}", 1 + i * 3), Rank::Ranked(50), 0, 10))
        .collect();
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    let n = geo.points.len();
    assert_eq!(geo.points[0].x, 60.0);
    assert_eq!(geo.points[n - 1].x, 740.0);
    for (i, p) in geo.points.iter().enumerate() {
        assert_relative_eq!(p.x, 60.0 + i as f64 * (680.0 / (n - 1) as f64), epsilon = 1e-9);
    }
}

#[test]
fn all_zero_impressions_sit_on_the_floor() {
    let series = MetricSeries::new(vec![
        rec("2024-07-28", Rank::Unranked, 0, 0),
        rec("2024-07-29", Rank::Unranked, 0, 0),
        rec("2024-07-30", Rank::Ranked(95), 0, 0),
    ]);
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    assert_eq!(geo.max_impressions, 1);
    assert!(geo.points.iter().all(|p| p.y_impressions == 220.0));
    assert!(geo.points.iter().all(|p| p.y_impressions.is_finite()));
}

#[test]
fn unranked_points_skip_the_rank_line() {
    let series = MetricSeries::new(vec![
        rec("2024-07-28", Rank::Ranked(98), 0, 2),
        rec("2024-08-04", Rank::Unranked, 0, 3),
        rec("2024-08-11", Rank::Ranked(70), 0, 9),
    ]);
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    assert_eq!(geo.points.len(), 3);
    assert_eq!(geo.points[1].y_rank, 220.0);
    let xs: Vec<f64> = geo.rank_line.points.iter().map(|&(x, _)| x).collect();
    assert_eq!(xs, vec![geo.points[0].x, geo.points[2].x]);
}

#[test]
fn no_ranked_points_gives_empty_rank_line_and_area() {
    let series = MetricSeries::new(vec![
        rec("2024-07-28", Rank::Unranked, 0, 0),
        rec("2024-07-29", Rank::Unranked, 0, 4),
    ]);
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    assert!(geo.rank_line.is_empty());
    assert!(geo.rank_area.is_empty());
    assert_eq!(geo.max_rank, 100);
    assert_eq!(geo.impression_area.vertices.len(), 4);
}

#[test]
fn rank_scale_grows_past_one_hundred() {
    let series = MetricSeries::new(vec![
        rec("2024-07-28", Rank::Ranked(180), 0, 1),
        rec("2024-08-04", Rank::Ranked(90), 0, 2),
    ]);
    let geo = build_geometry(&series, &dashboard_config()).expect("geometry");
    assert_eq!(geo.max_rank, 180);
    assert_eq!(geo.points[0].y_rank, 220.0);
    assert_relative_eq!(geo.points[1].y_rank, 120.0, epsilon = 1e-9);
}

#[test]
fn inverted_orientation_mirrors_rank() {
    let cfg = dashboard_config().with_rank_orientation(RankOrientation::Inverted);
    let geo = build_geometry(&launch_series(), &cfg).expect("geometry");
    // 20 + 200 * (100 - 87)/100
    assert_relative_eq!(geo.points[1].y_rank, 46.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[2].y_rank, 96.0, epsilon = 1e-9);
    // Unranked stays on the floor in both orientations.
    assert_eq!(geo.points[0].y_rank, 220.0);
}

#[test]
fn areas_close_on_the_floor() {
    let geo = build_geometry(&launch_series(), &dashboard_config()).expect("geometry");
    let v = &geo.rank_area.vertices;
    assert_eq!(v.first().copied(), Some((geo.rank_line.points[0].0, 220.0)));
    assert_eq!(v.last().copied(), Some((740.0, 220.0)));
    assert_eq!(v.len(), geo.rank_line.len() + 2);
    assert!(geo.impression_area.to_svg_d().starts_with("M60,220 L60,220"));
    assert!(geo.impression_area.to_svg_d().ends_with("L740,220 Z"));
}

#[test]
fn building_twice_is_deterministic() {
    let cfg = dashboard_config();
    let a = build_geometry(&launch_series(), &cfg);
    let b = build_geometry(&launch_series(), &cfg);
    assert_eq!(a, b);
}
