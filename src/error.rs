use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests or renders a tracker workbook.
///
/// Malformed sheet *content* never produces an error: missing or empty cells
/// degrade to the `"N/A"` sentinel and a bound sheet that is absent from the
/// workbook simply contributes zero records. The variants below cover the
/// boundaries around that pipeline.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Wrapper for IO failures such as reading files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    Excel(#[from] calamine::XlsxError),

    /// Raised when JSON serialization of normalized records fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
