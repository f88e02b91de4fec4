use std::time::Duration;

use thiserror::Error;

/// Result type for simplex API client operations
pub type Result<T> = std::result::Result<T, SimplexError>;

/// Errors that can occur when using the simplex API client
#[derive(Error, Debug)]
pub enum SimplexError {
    /// Base URL missing or unusable; raised before any network I/O
    #[error("configuration error: {0}")]
    Config(String),

    /// Problem shape rejected locally, before any network I/O
    #[error("invalid problem: {0}")]
    Validation(String),

    /// The request did not complete within the allowed time and was aborted
    #[error("solver request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a non-success status
    #[error("HTTP {status} from solver: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body is not valid JSON
    #[error("solver response is not valid JSON: {body}")]
    Parse { body: String },

    /// The response parsed as JSON but does not match the solver schema
    #[error("unexpected solver response structure ({detail})")]
    Schema { detail: String, body: String },

    /// Transport-level failure (connection refused, DNS, broken stream)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}
