//! Typed errors for the discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Provider failures are
//! boxed at the trait seam so concrete client error types stay out of the
//! core.

use thiserror::Error;

/// Errors that can occur during discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// An external provider call failed (transport, non-2xx, bad body)
    #[error("provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The credential source failed to issue a key
    #[error("credential source error: {0}")]
    Credentials(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DiscoveryError {
    /// Wrap any provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Box::new(err))
    }

    /// Wrap any credential-source error.
    pub fn credentials(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Credentials(Box::new(err))
    }
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
