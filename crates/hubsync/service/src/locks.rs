//! Per-name call serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Serializes remote calls per registration name.
///
/// A second call for a name already in flight queues behind it; calls for
/// distinct names proceed concurrently. `unregister_all` takes the
/// exclusive side so it never interleaves with per-name operations.
///
/// Lock entries are kept for the lifetime of the reconciler; the table is
/// bounded by the number of distinct names ever used.
#[derive(Default)]
pub(crate) struct NameLocks {
    all: RwLock<()>,
    names: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl NameLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for one name, shared with other names.
    pub(crate) async fn name(&self, name: &str) -> (RwLockReadGuard<'_, ()>, OwnedMutexGuard<()>) {
        let shared = self.all.read().await;
        let lock = {
            let mut names = self.names.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(names.entry(name.to_owned()).or_default())
        };
        let guard = lock.lock_owned().await;
        (shared, guard)
    }

    /// Acquire exclusive access over every name.
    pub(crate) async fn exclusive(&self) -> RwLockWriteGuard<'_, ()> {
        self.all.write().await
    }
}
