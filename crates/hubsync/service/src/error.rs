//! Reconciler error types.

use hubsync_client::HubClientError;
use hubsync_core::TagSetError;
use hubsync_storage::StorageError;
use thiserror::Error;

/// Errors surfaced to registration callers.
///
/// Stale-id conditions from the hub never appear here; the reconciler
/// absorbs them by re-creating or treating the entry as already deleted.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Validation failed before any network or storage side effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The hub rejected the call with a non-recoverable error.
    #[error("remote hub call failed")]
    Remote(#[source] HubClientError),

    /// The local registration store failed; the outcome was not durably
    /// recorded and the operation must not be considered complete.
    #[error("local registration store failure")]
    Storage(#[from] StorageError),
}

impl From<TagSetError> for RegistrationError {
    fn from(err: TagSetError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
