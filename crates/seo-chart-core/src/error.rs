// File: crates/seo-chart-core/src/error.rs
// Summary: Error type for series loading and configuration checks.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid rank value: {0:?}")]
    InvalidRank(String),

    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid {column} count {value:?}")]
    InvalidCount { column: &'static str, value: String },

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("unsupported series file extension: {0:?}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
