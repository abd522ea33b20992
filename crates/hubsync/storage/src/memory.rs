//! In-memory storage implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hubsync_core::RegistrationName;

use crate::{RegistrationStore, StorageError};

/// In-process registration store.
///
/// Same contract as [`crate::SqliteStore`] minus durability; used by tests
/// and by callers that do not keep registrations across restarts.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Lock poisoning only happens if a panic occurred mid-operation;
        // the map itself is always in a consistent state.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RegistrationStore for MemoryStore {
    fn put(&self, name: &RegistrationName, remote_id: &str) -> Result<(), StorageError> {
        self.entries()
            .insert(name.as_str().to_owned(), remote_id.to_owned());
        Ok(())
    }

    fn get(&self, name: &RegistrationName) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(name.as_str()).cloned())
    }

    fn remove(&self, name: &RegistrationName) -> Result<(), StorageError> {
        self.entries().remove(name.as_str());
        Ok(())
    }

    fn remove_all(&self) -> Result<(), StorageError> {
        self.entries().clear();
        Ok(())
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.entries().len())
    }

    fn names(&self) -> Result<Vec<RegistrationName>, StorageError> {
        Ok(self
            .entries()
            .keys()
            .map(|n| RegistrationName::parse(n))
            .collect())
    }
}
