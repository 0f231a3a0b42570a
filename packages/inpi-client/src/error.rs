//! Error types for the INPI crawler client.

use thiserror::Error;

/// Result type for INPI client operations.
pub type Result<T> = std::result::Result<T, InpiError>;

/// INPI crawler client errors.
#[derive(Debug, Error)]
pub enum InpiError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the crawler
    #[error("INPI crawler error (status {status}): {message}")]
    Api { status: u16, message: String },
}
