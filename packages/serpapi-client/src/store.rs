//! Storage backends for the key pool state.
//!
//! The pool reads and fully rewrites its state on every acquisition, so the
//! backend contract is just load/save. Persistence is last-writer-wins:
//! concurrent writers across processes can clobber each other's counter
//! updates, which the pool accepts (see `pool` module docs).

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{PoolError, PoolResult};
use crate::pool::PoolState;

/// Load/save contract for pool state.
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Load the persisted state, or `None` if nothing was persisted yet.
    async fn load(&self) -> PoolResult<Option<PoolState>>;

    /// Persist the full state, replacing whatever was there.
    async fn save(&self, state: &PoolState) -> PoolResult<()>;
}

#[async_trait]
impl<S: PoolStore + ?Sized> PoolStore for Arc<S> {
    async fn load(&self) -> PoolResult<Option<PoolState>> {
        (**self).load().await
    }

    async fn save(&self, state: &PoolState) -> PoolResult<()> {
        (**self).save(state).await
    }
}

/// JSON file at a well-known path. The production backend.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PoolStore for JsonFileStore {
    async fn load(&self) -> PoolResult<Option<PoolState>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PoolError::Store(Box::new(e))),
        };
        let state = serde_json::from_str(&raw).map_err(|e| PoolError::Store(Box::new(e)))?;
        Ok(Some(state))
    }

    async fn save(&self, state: &PoolState) -> PoolResult<()> {
        let raw = serde_json::to_string(state).map_err(|e| PoolError::Store(Box::new(e)))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| PoolError::Store(Box::new(e)))?;
        Ok(())
    }
}

/// In-memory backend for tests and development.
///
/// Data is lost on restart, so quota tracking does not survive the process;
/// use `JsonFileStore` in production.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<Option<PoolState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PoolStore for MemoryStore {
    async fn load(&self) -> PoolResult<Option<PoolState>> {
        Ok(self.state.read().unwrap().clone())
    }

    async fn save(&self, state: &PoolState) -> PoolResult<()> {
        *self.state.write().unwrap() = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Credential;

    #[tokio::test]
    async fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("pool.json"));

        assert!(store.load().await.unwrap().is_none());

        let state = PoolState {
            keys: vec![Credential::new("alpha", "k1")],
            month: "2026-08".to_string(),
        };
        store.save(&state).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.month, "2026-08");
        assert_eq!(loaded.keys[0].name, "alpha");
    }

    #[tokio::test]
    async fn file_store_rejects_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().await.is_err());
    }
}
