// File: crates/demo/src/main.rs
// Summary: Demo loads a metric series (CSV/JSON), builds chart geometry, prints hovered tooltips and writes SVG/JSON/PNG.
// Usage: seo-chart-demo [series.csv|series.json] [config.json] [cursor_x[,cursor_x...]]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seo_chart_core::{load_csv, load_path, telemetry, ChartConfig, GeometryCache, MetricSeries};
use seo_chart_render::{theme, write_png, write_svg, RenderOptions};
use tracing::{debug, info, warn};

const SAMPLE_CSV: &str = include_str!("../data/metrics.csv");

fn main() -> Result<()> {
    if !telemetry::init_default_tracing() {
        eprintln!("note: tracing subscriber already installed; demo logs go there");
    }

    let mut args = std::env::args().skip(1);
    let series_arg = args.next();
    let config_arg = args.next();
    let cursors = match args.next() {
        Some(list) => parse_cursors(&list)?,
        None => Vec::new(),
    };

    let series = match &series_arg {
        Some(p) => load_path(p).with_context(|| format!("failed to load series '{p}'"))?,
        None => {
            info!("no series given; using bundled sample");
            load_csv(SAMPLE_CSV.as_bytes()).context("bundled sample is malformed")?
        }
    };
    let config = match &config_arg {
        Some(p) => load_config(Path::new(p))?,
        None => ChartConfig::default(),
    };
    config.validate()?;

    match series.summary() {
        Some(s) => info!(
            first = %s.first_date,
            last = %s.last_date,
            days = s.days_tracked,
            best_rank = ?s.best_rank,
            latest_rank = %s.latest_rank,
            clicks = s.total_clicks,
            impressions = s.total_impressions,
            "series summary"
        ),
        None => warn!("series is empty"),
    }

    let mut cache = GeometryCache::new();
    let Some(geo) = cache.get_or_build(&series, &config).cloned() else {
        println!(
            "Not enough data to draw a chart yet ({} record(s)); check back after the next post.",
            series.len()
        );
        return Ok(());
    };
    info!(
        points = geo.points.len(),
        ranked = geo.rank_line.len(),
        max_impressions = geo.max_impressions,
        max_rank = geo.max_rank,
        "geometry ready"
    );

    for line in describe_hovers(&mut cache, &series, &config, &cursors) {
        println!("{line}");
    }
    debug!(hits = cache.hits(), misses = cache.misses(), "geometry cache");

    // the rendered chart highlights the first cursor
    let theme = std::env::var("CHART_THEME").map(|n| theme::find(&n)).unwrap_or_default();
    let opts = RenderOptions { theme, cursor_x: cursors.first().copied(), ..RenderOptions::default() };

    let out = out_name(series_arg.as_deref(), "svg");
    write_svg(&geo, &opts, &out)?;
    println!("Wrote {}", out.display());

    let geo_json = out.with_extension("json");
    std::fs::write(&geo_json, serde_json::to_string_pretty(&geo)?)
        .with_context(|| format!("writing {}", geo_json.display()))?;
    println!("Wrote {}", geo_json.display());

    let png = out.with_extension("png");
    write_png(&geo, &opts, &png)?;
    println!("Wrote {}", png.display());

    Ok(())
}

/// Comma-separated cursor x positions, e.g. `400,735`.
fn parse_cursors(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().with_context(|| format!("cursor_x '{s}' must be a number")))
        .collect()
}

/// Tooltip text for each cursor position. Pointer moves reuse the cached
/// geometry and only run the locator.
fn describe_hovers(
    cache: &mut GeometryCache,
    series: &MetricSeries,
    config: &ChartConfig,
    cursors: &[f64],
) -> Vec<String> {
    let mut out = Vec::new();
    for &cx in cursors {
        let Some(geo) = cache.get_or_build(series, config) else { break };
        match geo.hover(cx) {
            Some(tip) => {
                out.push(format!("Hovered point at x={:.1}:", tip.anchor_x));
                out.extend(tip.lines().into_iter().map(|line| format!("  {line}")));
            }
            None => out.push(format!("No point within {}px of x={cx}", geo.config.hover_threshold_px)),
        }
    }
    out
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let cfg: ChartConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing chart config {}", path.display()))?;
    Ok(cfg)
}

/// Produce output file name like target/out/seo_chart_<stem>.<ext>
fn out_name(input: Option<&str>, ext: &str) -> PathBuf {
    let stem = input
        .and_then(|p| Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    let mut out = PathBuf::from("target/out");
    out.push(format!("seo_chart_{stem}.{ext}"));
    out
}
