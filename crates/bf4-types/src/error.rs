//! Error types for bf4.

use thiserror::Error;

/// Result type alias for bf4 operations.
pub type Result<T> = std::result::Result<T, Bf4Error>;

/// Errors that can occur while querying the remote API.
///
/// The library performs no retry or translation: whatever fails during a
/// request surfaces here unchanged. A failure on page N of a chunked fetch
/// discards the pages already accumulated in that call.
#[derive(Error, Debug)]
pub enum Bf4Error {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body decoded, but a required field is missing or has the
    /// wrong type.
    #[error("Unexpected response shape: missing or invalid `{field}`")]
    UnexpectedShape {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A paged query carried a zero page size.
    #[error("Page size must be nonzero")]
    ZeroPageSize,
}
