//! Rotating SerpAPI key pool with persistent monthly quotas.
//!
//! Every key carries a fixed monthly search quota. The pool hands out the
//! first key that still has quota left, bumping and persisting its counter
//! before returning. When every key is spent it still returns the first key
//! (flagged) so callers degrade into the provider's own rate-limit error
//! instead of blocking.
//!
//! The load/modify/persist cycle is not transactional. Two processes racing
//! on the same store can both observe the same under-cap key and push its
//! logical usage past the cap by a small margin. Accepted; the cap is
//! best-effort, not an invariant.

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};
use crate::store::PoolStore;

/// Searches allowed per key per calendar month.
pub const MONTHLY_CAP: u32 = 250;

/// One API key with its usage counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub used: u32,
}

impl Credential {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            used: 0,
        }
    }
}

/// Persisted pool state: the credential list plus the quota month it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolState {
    pub keys: Vec<Credential>,
    pub month: String,
}

/// What to do with usage counters when the month rolls over.
///
/// The historical behavior only resets keys that hit the cap, leaving
/// partially-used counters alone. That asymmetry is kept as the default;
/// `All` is the obvious alternative for deployments that want a clean slate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Reset only credentials whose counter reached the cap.
    #[default]
    CappedOnly,
    /// Reset every counter to zero.
    All,
}

/// An issued key. `exhausted` is set when the whole pool was at cap and the
/// first key was returned as a soft fallback.
#[derive(Debug, Clone, Serialize)]
pub struct Issued {
    pub name: String,
    pub key: String,
    pub used: u32,
    pub cap: u32,
    pub exhausted: bool,
}

/// Read-only pool rollup.
#[derive(Debug, Clone, Serialize)]
pub struct PoolStatus {
    pub keys: Vec<Credential>,
    pub available: usize,
    pub used_total: u32,
    pub capacity: u32,
}

pub struct KeyPool<S: PoolStore> {
    store: S,
    seed: Vec<Credential>,
    policy: ResetPolicy,
}

impl<S: PoolStore> KeyPool<S> {
    /// Create a pool over a storage backend. `seed` is materialized into the
    /// store on first use.
    pub fn new(store: S, seed: Vec<Credential>) -> Self {
        Self {
            store,
            seed,
            policy: ResetPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ResetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Issue one key. Never blocks on exhaustion.
    pub async fn acquire(&self) -> PoolResult<Issued> {
        self.acquire_in(&current_month()).await
    }

    /// Current pool rollup. Rollover is applied to the view only; nothing is
    /// persisted.
    pub async fn status(&self) -> PoolResult<PoolStatus> {
        self.status_in(&current_month()).await
    }

    pub(crate) async fn acquire_in(&self, month: &str) -> PoolResult<Issued> {
        let mut state = self.load_or_seed(month).await?;
        if self.roll_over(&mut state, month) {
            self.store.save(&state).await?;
        }

        if let Some(index) = state.keys.iter().position(|c| c.used < MONTHLY_CAP) {
            state.keys[index].used += 1;
            let credential = &state.keys[index];
            let issued = Issued {
                name: credential.name.clone(),
                key: credential.key.clone(),
                used: credential.used,
                cap: MONTHLY_CAP,
                exhausted: false,
            };
            self.store.save(&state).await?;
            tracing::info!(
                name = %issued.name,
                used = issued.used,
                cap = MONTHLY_CAP,
                "Issued SerpAPI key"
            );
            return Ok(issued);
        }

        // Every key is spent. Hand out the first one anyway and let the
        // provider answer with its own rate-limit error.
        let first = state.keys.first().ok_or(PoolError::Empty)?;
        tracing::warn!("SerpAPI pool exhausted, falling back to first key");
        Ok(Issued {
            name: first.name.clone(),
            key: first.key.clone(),
            used: first.used,
            cap: MONTHLY_CAP,
            exhausted: true,
        })
    }

    pub(crate) async fn status_in(&self, month: &str) -> PoolResult<PoolStatus> {
        let mut state = self.load_or_seed(month).await?;
        self.roll_over(&mut state, month);

        let available = state
            .keys
            .iter()
            .filter(|c| c.used < MONTHLY_CAP)
            .count();
        let used_total = state.keys.iter().map(|c| c.used).sum();
        let capacity = state.keys.len() as u32 * MONTHLY_CAP;
        Ok(PoolStatus {
            keys: state.keys,
            available,
            used_total,
            capacity,
        })
    }

    async fn load_or_seed(&self, month: &str) -> PoolResult<PoolState> {
        match self.store.load().await? {
            Some(state) => Ok(state),
            None => Ok(PoolState {
                keys: self.seed.clone(),
                month: month.to_string(),
            }),
        }
    }

    /// Apply the monthly reset if the stored month is stale. Returns whether
    /// anything changed.
    fn roll_over(&self, state: &mut PoolState, month: &str) -> bool {
        if state.month == month {
            return false;
        }
        for credential in state.keys.iter_mut() {
            match self.policy {
                ResetPolicy::CappedOnly => {
                    if credential.used == MONTHLY_CAP {
                        credential.used = 0;
                    }
                }
                ResetPolicy::All => credential.used = 0,
            }
        }
        state.month = month.to_string();
        true
    }
}

fn current_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}
