//! Core registration reconciler implementation.

use std::collections::BTreeSet;
use std::sync::Arc;

use hubsync_client::HubClient;
use hubsync_core::{Registration, RegistrationName, TagSet};
use hubsync_storage::RegistrationStore;

use crate::locks::NameLocks;
use crate::{RegistrationError, Registrations};

/// Registration reconciler over a local store and a remote hub client.
///
/// Holds the device's view of which registrations exist and drives the hub
/// toward the desired state with the fewest calls: a cached remote id turns
/// a register into an update, and a cached id the hub has purged is
/// transparently replaced by a fresh create.
#[derive(Clone)]
pub struct Registrar<S, C> {
    store: S,
    hub: C,
    locks: Arc<NameLocks>,
}

impl<S, C> Registrar<S, C> {
    /// Create a new reconciler.
    pub fn new(store: S, hub: C) -> Self {
        Self {
            store,
            hub,
            locks: Arc::new(NameLocks::new()),
        }
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), RegistrationError> {
    if value.is_empty() {
        return Err(RegistrationError::InvalidArgument(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}

impl<S: RegistrationStore, C: HubClient> Registrar<S, C> {
    /// Register under `name`, reusing the cached remote id when the hub
    /// still knows it.
    ///
    /// Inputs are validated by the caller. Holds the per-name lock across
    /// the remote call and the store write, so a queued call for the same
    /// name observes the completed outcome.
    async fn reconcile_register(
        &self,
        provider_token: &str,
        name: RegistrationName,
        tags: TagSet,
        body_template: Option<String>,
    ) -> Result<Registration, RegistrationError> {
        let _guards = self.locks.name(name.as_str()).await;

        let remote_id = match self.store.get(&name)? {
            Some(current) => {
                match self
                    .hub
                    .update(&current, provider_token, &tags, body_template.as_deref())
                    .await
                {
                    Ok(id) => id,
                    Err(e) if e.is_unknown_id() => {
                        tracing::info!(
                            name = %name,
                            stale_id = %current,
                            "hub no longer knows cached id, creating fresh registration"
                        );
                        self.hub
                            .create(provider_token, &tags, body_template.as_deref())
                            .await
                            .map_err(RegistrationError::Remote)?
                    }
                    Err(e) => return Err(RegistrationError::Remote(e)),
                }
            }
            None => self
                .hub
                .create(provider_token, &tags, body_template.as_deref())
                .await
                .map_err(RegistrationError::Remote)?,
        };

        self.store.put(&name, &remote_id)?;
        tracing::info!(name = %name, remote_id = %remote_id, "registration reconciled");

        Ok(Registration {
            name,
            remote_id,
            provider_token: provider_token.to_owned(),
            tags,
            body_template,
        })
    }

    /// Remove the registration tracked under `name`, if any.
    async fn reconcile_unregister(&self, name: RegistrationName) -> Result<(), RegistrationError> {
        let _guards = self.locks.name(name.as_str()).await;

        let Some(remote_id) = self.store.get(&name)? else {
            tracing::debug!(name = %name, "no local registration to remove");
            return Ok(());
        };

        match self.hub.delete(&remote_id).await {
            Ok(()) => {}
            Err(e) if e.is_unknown_id() => {
                tracing::debug!(
                    name = %name,
                    remote_id = %remote_id,
                    "hub already dropped registration"
                );
            }
            Err(e) => return Err(RegistrationError::Remote(e)),
        }

        self.store.remove(&name)?;
        tracing::info!(name = %name, "registration removed");
        Ok(())
    }
}

impl<S: RegistrationStore, C: HubClient> Registrations for Registrar<S, C> {
    async fn register(
        &self,
        provider_token: &str,
        tags: &[String],
    ) -> Result<Registration, RegistrationError> {
        require_non_empty(provider_token, "provider token")?;
        let tags = TagSet::normalize(tags.iter().cloned())?;

        self.reconcile_register(provider_token, RegistrationName::Native, tags, None)
            .await
    }

    async fn register_template(
        &self,
        provider_token: &str,
        template_name: &str,
        body_template: &str,
        tags: &[String],
    ) -> Result<Registration, RegistrationError> {
        require_non_empty(provider_token, "provider token")?;
        require_non_empty(template_name, "template name")?;
        if body_template.trim().is_empty() {
            return Err(RegistrationError::InvalidArgument(
                "body template must not be empty".into(),
            ));
        }
        let tags = TagSet::normalize(tags.iter().cloned())?;

        self.reconcile_register(
            provider_token,
            RegistrationName::template(template_name),
            tags,
            Some(body_template.to_owned()),
        )
        .await
    }

    async fn unregister(&self) -> Result<(), RegistrationError> {
        self.reconcile_unregister(RegistrationName::Native).await
    }

    async fn unregister_template(&self, template_name: &str) -> Result<(), RegistrationError> {
        require_non_empty(template_name, "template name")?;
        self.reconcile_unregister(RegistrationName::template(template_name))
            .await
    }

    async fn unregister_all(&self, provider_token: &str) -> Result<(), RegistrationError> {
        require_non_empty(provider_token, "provider token")?;
        let _excl = self.locks.exclusive().await;

        // Delete tracked ids one by one, dropping each local entry only
        // once its remote deletion is confirmed (or already done). An
        // interruption leaves exactly the unconfirmed names behind.
        for name in self.store.names()? {
            if let Some(remote_id) = self.store.get(&name)? {
                match self.hub.delete(&remote_id).await {
                    Ok(()) => {}
                    Err(e) if e.is_unknown_id() => {}
                    Err(e) => return Err(RegistrationError::Remote(e)),
                }
            }
            self.store.remove(&name)?;
        }

        // Sweep registrations for this token the cache never knew about.
        self.hub
            .delete_all_for(provider_token)
            .await
            .map_err(RegistrationError::Remote)?;
        self.store.remove_all()?;

        tracing::info!("all registrations removed");
        Ok(())
    }

    fn local_names(&self) -> Result<BTreeSet<RegistrationName>, RegistrationError> {
        Ok(self.store.names()?.into_iter().collect())
    }

    fn local_count(&self) -> Result<usize, RegistrationError> {
        Ok(self.store.count()?)
    }

    fn refresh_needed(&self, expected: usize) -> Result<bool, RegistrationError> {
        Ok(self.store.count()? < expected)
    }
}
