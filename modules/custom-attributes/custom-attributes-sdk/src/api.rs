//! Host platform contracts consumed by the custom attributes engine.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{DirectoryError, SettingsError};
use crate::models::{AttributeMap, Form};

/// Source of named string settings (e.g. the host's properties file).
pub trait SettingsSource: Send + Sync {
    /// Read a single property.
    ///
    /// Returns `Ok(None)` when the property is not configured.
    ///
    /// # Errors
    ///
    /// - `Retrieval` if the underlying settings could not be read
    fn get_property(&self, name: &str) -> Result<Option<String>, SettingsError>;

    /// Monotonic revision of the settings, bumped on every reload.
    ///
    /// Sources that never reload keep the default of `0`.
    fn revision(&self) -> u64 {
        0
    }
}

/// A user entity managed by the host directory.
///
/// Mutators take `&self`; implementations own their interior mutability.
pub trait User: Send + Sync {
    /// Unique identifier (username) of the user.
    fn identifier(&self) -> String;

    fn password(&self) -> Option<String>;

    fn set_password(&self, password: Option<String>);

    /// Returns an independent copy of the user's arbitrary attributes.
    fn attributes(&self) -> AttributeMap;

    /// Replaces the given attributes on the user.
    fn set_attributes(&self, attributes: AttributeMap);

    /// Access to the concrete type, used to detect decorating wrappers.
    fn as_any(&self) -> &dyn Any;
}

/// A directory of users keyed by identifier.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a single user.
    ///
    /// # Errors
    ///
    /// - `Internal` for storage failures
    async fn get(&self, identifier: &str) -> Result<Option<Arc<dyn User>>, DirectoryError>;

    /// Fetch every user among `identifiers`. Unknown identifiers are skipped.
    ///
    /// # Errors
    ///
    /// - `Internal` for storage failures
    async fn get_all(&self, identifiers: &[String]) -> Result<Vec<Arc<dyn User>>, DirectoryError>;

    /// List all identifiers in the directory.
    ///
    /// # Errors
    ///
    /// - `Internal` for storage failures
    async fn identifiers(&self) -> Result<Vec<String>, DirectoryError>;

    /// Create a new user from the given entity.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a user with the same identifier exists
    /// - `Internal` for storage failures
    async fn add(&self, user: Arc<dyn User>) -> Result<(), DirectoryError>;

    /// Persist changes made to an existing user.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no user with that identifier exists
    /// - `Internal` for storage failures
    async fn update(&self, user: Arc<dyn User>) -> Result<(), DirectoryError>;

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no user with that identifier exists
    /// - `Internal` for storage failures
    async fn remove(&self, identifier: &str) -> Result<(), DirectoryError>;
}

/// Per-session view of the host platform exposed to extensions.
pub trait UserContext: Send + Sync {
    /// Identifier of the authentication provider owning this context.
    fn identifier(&self) -> String;

    /// The directory of users visible in this context.
    ///
    /// # Errors
    ///
    /// - `Internal` if the directory cannot be opened
    fn user_directory(&self) -> Result<Arc<dyn UserDirectory>, DirectoryError>;

    /// Forms describing the user attributes this context understands.
    fn user_attributes(&self) -> Vec<Form>;
}
