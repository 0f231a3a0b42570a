//! Credential source seam.
//!
//! The search and family stages acquire one credential per provider call.
//! The source never blocks: on a spent pool it still issues a key, flagged
//! `exhausted`, and the caller decides whether to proceed (family expansion
//! does) or stop (web search does — a query without quota cannot succeed).

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;

/// One issued credential.
#[derive(Debug, Clone)]
pub struct IssuedKey {
    pub key: String,
    /// Set when the whole pool was at cap and this key is a soft fallback.
    pub exhausted: bool,
}

/// Issues rotating credentials for the quota-limited search provider.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn acquire(&self) -> Result<IssuedKey>;
}

/// Mock key source for testing. Counts acquisitions.
pub struct MockKeySource {
    key: String,
    exhausted: bool,
    acquired: AtomicUsize,
}

impl Default for MockKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockKeySource {
    pub fn new() -> Self {
        Self {
            key: "test-key".to_string(),
            exhausted: false,
            acquired: AtomicUsize::new(0),
        }
    }

    /// A source whose pool is already spent.
    pub fn exhausted() -> Self {
        Self {
            exhausted: true,
            ..Self::new()
        }
    }

    /// How many keys were handed out.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeySource for MockKeySource {
    async fn acquire(&self) -> Result<IssuedKey> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(IssuedKey {
            key: self.key.clone(),
            exhausted: self.exhausted,
        })
    }
}
