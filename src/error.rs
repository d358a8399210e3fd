//! Infrastructure errors.
//!
//! Validation outcomes are not errors and never appear here; see
//! [`crate::types::AgeVerdict`] and [`crate::types::ChoiceVerdict`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter {directive:?}: {reason}")]
    LogFilter { directive: String, reason: String },

    #[error("logging already initialized")]
    LoggingInitialized,

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
