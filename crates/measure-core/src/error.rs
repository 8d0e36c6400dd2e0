// File: crates/measure-core/src/error.rs
// Summary: Error type shared by record loading, validation, and serialization.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown measurement '{0}' (expected one of: weight, abdomen, thigh, arm)")]
    UnknownMeasurement(String),

    #[error("record set is empty")]
    EmptyRecordSet,

    #[error("record {index}: invalid date label '{label}' (expected YYYY-MM-DD)")]
    InvalidDate {
        index: usize,
        label: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("record {index}: date {current} is not after {previous}")]
    OutOfOrder {
        index: usize,
        previous: String,
        current: String,
    },

    #[error("CSV header has no '{0}' column")]
    MissingColumn(String),

    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
