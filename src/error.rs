//! Error types for fittrack

use thiserror::Error;

/// Errors that can occur outside the pure calculator: parsing records,
/// resolving them against a profile, and encoding reports.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Failed to parse training record: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
