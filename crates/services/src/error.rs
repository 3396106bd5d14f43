//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while copying text to the clipboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("legacy copy command failed")]
    LegacyCopyFailed,
}

/// Errors emitted by submission sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("submission endpoint answered with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("submission endpoint reported a failed save")]
    Rejected,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
