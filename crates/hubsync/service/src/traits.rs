//! Service traits.

use std::collections::BTreeSet;

use hubsync_core::{Registration, RegistrationName};

use crate::RegistrationError;

/// Registration management operations exposed to callers.
#[trait_variant::make(Send)]
pub trait Registrations: Send + Sync {
    /// Register (or re-register) the native registration for this device.
    async fn register(
        &self,
        provider_token: &str,
        tags: &[String],
    ) -> Result<Registration, RegistrationError>;

    /// Register (or re-register) a named template registration.
    async fn register_template(
        &self,
        provider_token: &str,
        template_name: &str,
        body_template: &str,
        tags: &[String],
    ) -> Result<Registration, RegistrationError>;

    /// Remove the native registration. A no-op success when nothing is
    /// tracked locally.
    async fn unregister(&self) -> Result<(), RegistrationError>;

    /// Remove a named template registration. A no-op success when nothing
    /// is tracked locally under that name.
    async fn unregister_template(&self, template_name: &str) -> Result<(), RegistrationError>;

    /// Remove every registration bound to `provider_token` on the hub and
    /// clear the local store.
    async fn unregister_all(&self, provider_token: &str) -> Result<(), RegistrationError>;

    /// Names currently tracked in the local store.
    fn local_names(&self) -> Result<BTreeSet<RegistrationName>, RegistrationError>;

    /// Number of names currently tracked in the local store.
    fn local_count(&self) -> Result<usize, RegistrationError>;

    /// Whether the local store tracks fewer registrations than the caller
    /// expects to exist, meaning a re-synchronization is due.
    fn refresh_needed(&self, expected: usize) -> Result<bool, RegistrationError>;
}
