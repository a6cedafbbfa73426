// File: crates/seo-chart-core/src/tooltip.rs
// Summary: Display payload for the hovered data point.

use serde::Serialize;

use crate::geometry::ChartPoint;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    /// Chronological index of the source point.
    pub index: usize,
    pub date: String,
    pub rank: String,
    pub clicks: String,
    pub impressions: String,
    /// Pixel anchor of the highlighted dot (on the impressions line).
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Tooltip {
    pub fn from_point(point: &ChartPoint) -> Self {
        let r = &point.record;
        Self {
            index: point.index,
            date: r.date.format("%b %-d, %Y").to_string(),
            rank: r.rank.to_string(),
            clicks: group_thousands(r.clicks),
            impressions: group_thousands(r.impressions),
            anchor_x: point.x,
            anchor_y: point.y_impressions,
        }
    }

    /// Text rows in display order.
    pub fn lines(&self) -> [String; 4] {
        [
            self.date.clone(),
            format!("Rank: {}", self.rank),
            format!("Clicks: {}", self.clicks),
            format!("Impressions: {}", self.impressions),
        ]
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricRecord, Rank};
    use chrono::NaiveDate;

    #[test]
    fn thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn tooltip_formats_record() {
        let point = ChartPoint {
            record: MetricRecord::new(
                NaiveDate::from_ymd_opt(2024, 8, 4).unwrap(),
                Rank::Ranked(87),
                0,
                1_500,
            ),
            index: 1,
            x: 400.0,
            y_impressions: 120.0,
            y_rank: 194.0,
        };
        let tip = Tooltip::from_point(&point);
        assert_eq!(tip.date, "Aug 4, 2024");
        assert_eq!(
            tip.lines(),
            [
                "Aug 4, 2024".to_string(),
                "Rank: #87".to_string(),
                "Clicks: 0".to_string(),
                "Impressions: 1,500".to_string(),
            ]
        );
        assert_eq!((tip.anchor_x, tip.anchor_y), (400.0, 120.0));
    }
}
