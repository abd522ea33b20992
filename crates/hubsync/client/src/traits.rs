//! Remote hub client trait.

use hubsync_core::TagSet;

use crate::HubClientError;

/// Remote push-notification hub operations.
///
/// Implemented by the actual transport; the reconciler only depends on
/// this trait. All identifiers are opaque strings assigned by the hub.
#[trait_variant::make(Send)]
pub trait HubClient: Send + Sync {
    /// Create a registration, returning the hub-assigned id.
    async fn create(
        &self,
        provider_token: &str,
        tags: &TagSet,
        body_template: Option<&str>,
    ) -> Result<String, HubClientError>;

    /// Update an existing registration in place.
    ///
    /// Returns the id the registration lives under after the update (the
    /// hub may keep or rotate it). Fails with [`HubClientError::StaleId`]
    /// when the hub no longer knows `remote_id`.
    async fn update(
        &self,
        remote_id: &str,
        provider_token: &str,
        tags: &TagSet,
        body_template: Option<&str>,
    ) -> Result<String, HubClientError>;

    /// Delete a registration by id.
    ///
    /// Fails with [`HubClientError::NotFound`] when the id is already gone.
    async fn delete(&self, remote_id: &str) -> Result<(), HubClientError>;

    /// Delete every registration bound to `provider_token`.
    async fn delete_all_for(&self, provider_token: &str) -> Result<(), HubClientError>;
}
