// File: crates/seo-chart-core/src/load.rs
// Summary: Loads metric series from CSV exports or JSON row dumps.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::metrics::{MetricRecord, MetricSeries, Rank};

/// Load a series from a CSV file with a header row.
///
/// Column names are matched case-insensitively: `date`, `rank` (or `position`),
/// and optional `clicks` / `impressions`. Missing or blank counts read as zero.
pub fn load_csv<R: Read>(reader: R) -> ChartResult<MetricSeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "metric csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "day", "published_at"]).ok_or(ChartError::MissingColumn("date"))?;
    let i_rank = idx(&["rank", "position", "ranking"]).ok_or(ChartError::MissingColumn("rank"))?;
    let i_clicks = idx(&["clicks"]);
    let i_impressions = idx(&["impressions", "views"]);
    if i_clicks.is_none() || i_impressions.is_none() {
        warn!("clicks/impressions column not found; missing counts read as zero");
    }

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let count = |i: Option<usize>, column: &'static str| -> ChartResult<u64> {
            let raw = i.map(field).unwrap_or("");
            parse_count(raw, column)
        };
        records.push(MetricRecord {
            date: parse_date(field(i_date))?,
            rank: field(i_rank).parse::<Rank>()?,
            clicks: count(i_clicks, "clicks")?,
            impressions: count(i_impressions, "impressions")?,
        });
    }
    debug!(rows = records.len(), "loaded metric csv");
    Ok(MetricSeries::new(records))
}

/// Load a series from a JSON array of row objects. Extra fields are ignored,
/// `rank` may be a number, a label, or `null`.
pub fn load_json<R: Read>(reader: R) -> ChartResult<MetricSeries> {
    let records: Vec<MetricRecord> = serde_json::from_reader(reader)?;
    debug!(rows = records.len(), "loaded metric json");
    Ok(MetricSeries::new(records))
}

/// Dispatch on file extension (`.csv` or `.json`).
pub fn load_path(path: impl AsRef<Path>) -> ChartResult<MetricSeries> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => load_csv(BufReader::new(File::open(path)?)),
        "json" => load_json(BufReader::new(File::open(path)?)),
        _ => Err(ChartError::UnsupportedFormat(ext)),
    }
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date is kept as written.
fn parse_date(raw: &str) -> ChartResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|e| DateTime::parse_from_rfc3339(raw).map(|d| d.date_naive()).map_err(|_| e))
        .map_err(|source| ChartError::InvalidDate { value: raw.to_string(), source })
}

fn parse_count(raw: &str, column: &'static str) -> ChartResult<u64> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned
        .parse::<u64>()
        .map_err(|_| ChartError::InvalidCount { column, value: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_accepts_plain_and_timestamp() {
        let d = NaiveDate::from_ymd_opt(2024, 8, 4).unwrap();
        assert_eq!(parse_date("2024-08-04").unwrap(), d);
        assert_eq!(parse_date("2024-08-04T09:30:00+00:00").unwrap(), d);
        assert!(matches!(parse_date("Aug 4"), Err(ChartError::InvalidDate { .. })));
    }

    #[test]
    fn counts_allow_blank_and_grouping() {
        assert_eq!(parse_count("", "clicks").unwrap(), 0);
        assert_eq!(parse_count("1,204", "impressions").unwrap(), 1204);
        assert!(matches!(parse_count("-3", "clicks"), Err(ChartError::InvalidCount { column: "clicks", .. })));
    }
}
