//! Error types for KPI operations.

use thiserror::Error;

/// A specialized Result type for KPI operations.
pub type KpiResult<T> = Result<T, KpiError>;

/// The error type shared by providers, feeds and handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KpiError {
    /// Reading a snapshot source failed.
    #[error("IO error: {0}")]
    Io(String),

    /// A snapshot document could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A snapshot or envelope could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A remote KPI endpoint could not be reached or answered badly.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The configured source cannot serve snapshots.
    #[error("source not available: {0}")]
    SourceNotAvailable(String),
}

impl From<std::io::Error> for KpiError {
    fn from(e: std::io::Error) -> Self {
        KpiError::Io(e.to_string())
    }
}
