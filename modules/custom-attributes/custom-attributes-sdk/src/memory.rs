//! Static in-memory host implementations.
//!
//! These back the host contracts with plain maps. They are used by tests and
//! local development where no real identity platform is available.
//!
//! The directory stores its own copy of every user it receives, the way a
//! database-backed directory would: `add` and `update` read the entity's
//! identifier, password and attributes and never keep the caller's object.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{SettingsSource, User, UserContext, UserDirectory};
use crate::error::{DirectoryError, SettingsError};
use crate::models::{AttributeMap, Form};

/// A user held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryUser {
    identifier: String,
    password: RwLock<Option<String>>,
    attributes: RwLock<AttributeMap>,
}

impl InMemoryUser {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attributes<K, V>(self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        *self.attributes.write() = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Snapshot another user's state into a new stored record.
    #[must_use]
    pub fn copy_of(user: &dyn User) -> Self {
        Self {
            identifier: user.identifier(),
            password: RwLock::new(user.password()),
            attributes: RwLock::new(user.attributes()),
        }
    }
}

impl User for InMemoryUser {
    fn identifier(&self) -> String {
        self.identifier.clone()
    }

    fn password(&self) -> Option<String> {
        self.password.read().clone()
    }

    fn set_password(&self, password: Option<String>) {
        *self.password.write() = password;
    }

    fn attributes(&self) -> AttributeMap {
        self.attributes.read().clone()
    }

    fn set_attributes(&self, attributes: AttributeMap) {
        self.attributes.write().extend(attributes);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A directory of [`InMemoryUser`] records.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, Arc<InMemoryUser>>>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored record directly, bypassing any decoration.
    pub fn insert(&self, user: InMemoryUser) {
        self.users.write().insert(user.identifier.clone(), Arc::new(user));
    }

    /// Access the stored record as the host sees it.
    #[must_use]
    pub fn stored(&self, identifier: &str) -> Option<Arc<InMemoryUser>> {
        self.users.read().get(identifier).cloned()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn get(&self, identifier: &str) -> Result<Option<Arc<dyn User>>, DirectoryError> {
        Ok(self
            .stored(identifier)
            .map(|user| user as Arc<dyn User>))
    }

    async fn get_all(&self, identifiers: &[String]) -> Result<Vec<Arc<dyn User>>, DirectoryError> {
        let users = self.users.read();
        Ok(identifiers
            .iter()
            .filter_map(|id| users.get(id))
            .map(|user| Arc::clone(user) as Arc<dyn User>)
            .collect())
    }

    async fn identifiers(&self) -> Result<Vec<String>, DirectoryError> {
        let mut ids: Vec<String> = self.users.read().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn add(&self, user: Arc<dyn User>) -> Result<(), DirectoryError> {
        let record = InMemoryUser::copy_of(user.as_ref());
        let mut users = self.users.write();
        if users.contains_key(&record.identifier) {
            return Err(DirectoryError::already_exists(record.identifier));
        }
        tracing::debug!(identifier = %record.identifier, "Added user to in-memory directory");
        users.insert(record.identifier.clone(), Arc::new(record));
        Ok(())
    }

    async fn update(&self, user: Arc<dyn User>) -> Result<(), DirectoryError> {
        let identifier = user.identifier();
        let stored = self
            .stored(&identifier)
            .ok_or_else(|| DirectoryError::not_found(&identifier))?;

        // The caller may hold the stored record itself; copy before writing.
        let password = user.password();
        let attributes = user.attributes();
        stored.set_password(password);
        *stored.attributes.write() = attributes;
        Ok(())
    }

    async fn remove(&self, identifier: &str) -> Result<(), DirectoryError> {
        self.users
            .write()
            .remove(identifier)
            .map(|_| ())
            .ok_or_else(|| DirectoryError::not_found(identifier))
    }
}

/// A user context exposing an [`InMemoryDirectory`] and a fixed set of forms.
pub struct InMemoryUserContext {
    identifier: String,
    directory: Arc<InMemoryDirectory>,
    forms: Vec<Form>,
}

impl InMemoryUserContext {
    #[must_use]
    pub fn new(identifier: impl Into<String>, directory: Arc<InMemoryDirectory>) -> Self {
        Self {
            identifier: identifier.into(),
            directory,
            forms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_forms(mut self, forms: Vec<Form>) -> Self {
        self.forms = forms;
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Arc<InMemoryDirectory> {
        &self.directory
    }
}

impl UserContext for InMemoryUserContext {
    fn identifier(&self) -> String {
        self.identifier.clone()
    }

    fn user_directory(&self) -> Result<Arc<dyn UserDirectory>, DirectoryError> {
        Ok(Arc::clone(&self.directory) as Arc<dyn UserDirectory>)
    }

    fn user_attributes(&self) -> Vec<Form> {
        self.forms.clone()
    }
}

/// Settings held in a map; every mutation bumps the revision.
#[derive(Default)]
pub struct StaticSettingsSource {
    properties: RwLock<HashMap<String, String>>,
    revision: AtomicU64,
}

impl StaticSettingsSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.write().insert(name.into(), value.into());
        self
    }

    pub fn set_property(&self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.write().insert(name.into(), value.into());
        self.revision.fetch_add(1, Ordering::AcqRel);
    }

    pub fn remove_property(&self, name: &str) {
        self.properties.write().remove(name);
        self.revision.fetch_add(1, Ordering::AcqRel);
    }
}

impl SettingsSource for StaticSettingsSource {
    fn get_property(&self, name: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.properties.read().get(name).cloned())
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}
