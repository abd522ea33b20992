//! Hub client error classification.

use thiserror::Error;

/// Errors reported by the remote hub or its transport.
#[derive(Debug, Error)]
pub enum HubClientError {
    /// The hub no longer recognizes a registration id passed to `update`.
    ///
    /// The hub lazily purges inactive registrations, so a locally cached
    /// id can go stale without notice. Recoverable: callers downgrade to
    /// a fresh create.
    #[error("registration id {0} is no longer known to the hub")]
    StaleId(String),

    /// A `delete` targeted an id the hub has already removed.
    #[error("registration id {0} not found")]
    NotFound(String),

    /// The hub rejected the request as malformed (bad template, etc.).
    #[error("hub rejected the request: {0}")]
    Rejected(String),

    /// Transport-level failure reaching the hub.
    #[error("transport failure")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HubClientError {
    /// Whether this error means the hub does not know the id we sent —
    /// the recoverable staleness class.
    pub fn is_unknown_id(&self) -> bool {
        matches!(self, Self::StaleId(_) | Self::NotFound(_))
    }
}
