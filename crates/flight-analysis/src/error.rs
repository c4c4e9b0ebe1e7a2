//! Analysis error types.

use thiserror::Error;

/// Errors from report serialization and export.
///
/// Normalization and sequence analysis themselves are infallible; error
/// states there are represented in the returned data instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
