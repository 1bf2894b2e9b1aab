//! Error types for readings, tables, and history.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while producing, saving, or exporting readings.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// Filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// No history entry with this id.
    #[error("no reading with id {0}")]
    ReadingNotFound(u32),

    /// Export format other than json, text, or csv.
    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),

    /// Oracle core error.
    #[error("{0}")]
    Oracle(#[from] qg_oracle::OracleError),
}
