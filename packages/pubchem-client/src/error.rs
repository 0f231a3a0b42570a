//! Error types for the PubChem client.

use thiserror::Error;

/// Result type for PubChem client operations.
pub type Result<T> = std::result::Result<T, PubChemError>;

/// PubChem client errors.
#[derive(Debug, Error)]
pub enum PubChemError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("PubChem API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
