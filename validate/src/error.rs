//! Errors for records assembled from external input.

use thiserror::Error;

/// Result type for record construction.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur when reading a record from JSON.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

impl RecordError {
    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }
}
