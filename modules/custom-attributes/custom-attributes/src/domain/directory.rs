//! User directory wrapper applying [`CustomAttributeUser`] decoration.

use std::sync::Arc;

use async_trait::async_trait;
use custom_attributes_sdk::{DirectoryError, User, UserDirectory};

use super::service::ConfigurationService;
use super::user::CustomAttributeUser;

/// Wraps the host user directory.
///
/// - Users returned by `get` / `get_all` are decorated for reading.
/// - Users passed to `add` are decorated for writing, so the host only
///   persists writable custom attributes.
/// - Users passed to `update` are unwrapped; their attribute writes were
///   already filtered by the wrapper.
pub struct CustomAttributeDirectory {
    inner: Arc<dyn UserDirectory>,
    service: Arc<ConfigurationService>,
}

impl CustomAttributeDirectory {
    #[must_use]
    pub fn new(inner: Arc<dyn UserDirectory>, service: Arc<ConfigurationService>) -> Self {
        Self { inner, service }
    }

    fn decorate(&self, user: Arc<dyn User>) -> Arc<dyn User> {
        CustomAttributeUser::decorate(&self.service, user)
    }
}

#[async_trait]
impl UserDirectory for CustomAttributeDirectory {
    async fn get(&self, identifier: &str) -> Result<Option<Arc<dyn User>>, DirectoryError> {
        Ok(self
            .inner
            .get(identifier)
            .await?
            .map(|user| self.decorate(user)))
    }

    async fn get_all(&self, identifiers: &[String]) -> Result<Vec<Arc<dyn User>>, DirectoryError> {
        Ok(self
            .inner
            .get_all(identifiers)
            .await?
            .into_iter()
            .map(|user| self.decorate(user))
            .collect())
    }

    async fn identifiers(&self) -> Result<Vec<String>, DirectoryError> {
        self.inner.identifiers().await
    }

    async fn add(&self, user: Arc<dyn User>) -> Result<(), DirectoryError> {
        tracing::debug!(identifier = %user.identifier(), "Adding user with filtered custom attributes");
        self.inner
            .add(CustomAttributeUser::decorate_for_write(&self.service, user))
            .await
    }

    async fn update(&self, user: Arc<dyn User>) -> Result<(), DirectoryError> {
        self.inner
            .update(CustomAttributeUser::undecorate(user))
            .await
    }

    async fn remove(&self, identifier: &str) -> Result<(), DirectoryError> {
        self.inner.remove(identifier).await
    }
}
