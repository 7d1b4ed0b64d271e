//! Last-request-wins snapshot cell.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// One view's published snapshot, guarded by a request generation.
///
/// A refresh claims a generation token before its fetches start; claiming
/// immediately supersedes any refresh still in flight for the same view.
/// When results come back, the commit only lands if no newer token was
/// claimed since, so superseded responses are dropped instead of racing
/// writes into the published slot. Readers always see a complete snapshot,
/// never a partial mix of two refreshes.
pub struct RefreshCell<T> {
    generation: AtomicU64,
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> RefreshCell<T> {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            slot: RwLock::new(None),
        }
    }

    /// Claim a generation token for a refresh that is about to start.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish `value` if `token` is still the newest claim.
    ///
    /// Returns the published snapshot, or `None` when a newer refresh
    /// superseded this one and the value was discarded.
    pub fn commit(&self, token: u64, value: T) -> Option<Arc<T>> {
        let mut slot = self.slot.write().unwrap();
        if self.generation.load(Ordering::SeqCst) != token {
            return None;
        }
        let snapshot = Arc::new(value);
        *slot = Some(snapshot.clone());
        Some(snapshot)
    }

    /// The newest published snapshot, if any refresh has completed.
    pub fn latest(&self) -> Option<Arc<T>> {
        self.slot.read().unwrap().clone()
    }
}

impl<T> Default for RefreshCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
