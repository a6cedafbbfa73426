// File: crates/seo-chart-core/src/metrics.rs
// Summary: Metric series model: dated records with search rank, clicks and impressions.
// Notes:
// - Stored order is never trusted; `sorted_by_date` is the single chronological view.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// Search results position. Lower is better; `Unranked` is its own state, not zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rank {
    Ranked(u32),
    #[default]
    Unranked,
}

impl Rank {
    pub const UNRANKED_LABEL: &'static str = "Not Indexed";

    pub fn position(&self) -> Option<u32> {
        match *self {
            Rank::Ranked(p) => Some(p),
            Rank::Unranked => None,
        }
    }

    pub fn is_ranked(&self) -> bool { self.position().is_some() }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(p) => write!(f, "#{p}"),
            Rank::Unranked => f.write_str(Self::UNRANKED_LABEL),
        }
    }
}

impl FromStr for Rank {
    type Err = ChartError;

    /// Accepts `"87"`, `"#87"`, and the usual "not ranked" labels (`"Not Indexed"`,
    /// `"N/A"`, `"-"`, empty).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if matches!(
            lower.as_str(),
            "" | "-" | "n/a" | "na" | "none" | "not indexed" | "not ranked" | "unranked"
        ) {
            return Ok(Rank::Unranked);
        }
        s.trim_start_matches('#')
            .parse::<u32>()
            .map(Rank::Ranked)
            .map_err(|_| ChartError::InvalidRank(s.to_string()))
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Rank::Ranked(p) => serializer.serialize_u32(p),
            Rank::Unranked => serializer.serialize_str(Self::UNRANKED_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRank {
            Position(u32),
            Label(String),
        }

        match Option::<RawRank>::deserialize(deserializer)? {
            None => Ok(Rank::Unranked),
            Some(RawRank::Position(p)) => Ok(Rank::Ranked(p)),
            Some(RawRank::Label(s)) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One dated observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub impressions: u64,
}

impl MetricRecord {
    pub fn new(date: NaiveDate, rank: Rank, clicks: u64, impressions: u64) -> Self {
        Self { date, rank, clicks, impressions }
    }
}

/// Collection of metric records, built fresh per fetch and not mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSeries {
    records: Vec<MetricRecord>,
}

impl MetricSeries {
    pub fn new(records: Vec<MetricRecord>) -> Self { Self { records } }

    pub fn records(&self) -> &[MetricRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> { self.records.iter() }

    /// Records in ascending date order. The sort is stable, so records sharing a
    /// date keep their stored order.
    pub fn sorted_by_date(&self) -> Vec<MetricRecord> {
        let mut out = self.records.clone();
        out.sort_by_key(|r| r.date);
        out
    }

    /// Headline numbers for the results page; `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let sorted = self.sorted_by_date();
        let first = sorted.first()?;
        let last = sorted.last()?;
        Some(SeriesSummary {
            first_date: first.date,
            last_date: last.date,
            best_rank: sorted.iter().filter_map(|r| r.rank.position()).min(),
            latest_rank: last.rank,
            total_clicks: sorted.iter().map(|r| r.clicks).sum(),
            total_impressions: sorted.iter().map(|r| r.impressions).sum(),
            days_tracked: (last.date - first.date).num_days() + 1,
        })
    }
}

impl FromIterator<MetricRecord> for MetricSeries {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MetricSeries {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Aggregate view over a series. Totals sum per-record counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesSummary {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub best_rank: Option<u32>,
    pub latest_rank: Rank,
    pub total_clicks: u64,
    pub total_impressions: u64,
    pub days_tracked: i64,
}
