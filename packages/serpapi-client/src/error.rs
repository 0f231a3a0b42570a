//! Error types for the SerpAPI client and key pool.

use thiserror::Error;

/// Result type for SerpAPI client operations.
pub type Result<T> = std::result::Result<T, SerpApiError>;

/// SerpAPI client errors.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("SerpAPI error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Key pool errors.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Storage backend failed to load or persist the pool state
    #[error("pool store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The pool was constructed with no credentials
    #[error("credential pool is empty")]
    Empty,
}

/// Result type for pool operations.
pub type PoolResult<T> = std::result::Result<T, PoolError>;
