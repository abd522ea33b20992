//! Storage traits.

use hubsync_core::RegistrationName;

use crate::StorageError;

/// Durable `name -> remote id` mapping for registrations this device
/// believes are live on the hub.
///
/// Writes must be durable before they return; the reconciler reports an
/// operation complete only after the corresponding store write succeeded.
pub trait RegistrationStore: Send + Sync {
    /// Upsert the remote id for a name, overwriting any prior id.
    fn put(&self, name: &RegistrationName, remote_id: &str) -> Result<(), StorageError>;

    /// Last known remote id for a name, if any.
    fn get(&self, name: &RegistrationName) -> Result<Option<String>, StorageError>;

    /// Delete the entry for a name. Absence is not an error.
    fn remove(&self, name: &RegistrationName) -> Result<(), StorageError>;

    /// Clear every entry (provider token rotation, unregister-all).
    fn remove_all(&self) -> Result<(), StorageError>;

    /// Number of tracked names.
    fn count(&self) -> Result<usize, StorageError>;

    /// All tracked names.
    fn names(&self) -> Result<Vec<RegistrationName>, StorageError>;
}
