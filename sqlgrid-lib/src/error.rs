//! Error types

use thiserror::Error;

/// Failure to interpret a raw output payload.
///
/// Always degrades to a visible fallback view; nothing here is ever
/// surfaced to the host as a panic or an unhandled error.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The raw payload was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
