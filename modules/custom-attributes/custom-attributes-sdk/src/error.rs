//! Error types for the host contracts.

use thiserror::Error;

/// Errors raised by a [`SettingsSource`](crate::SettingsSource).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The property could not be read or is not a string.
    #[error("failed to retrieve property '{name}': {reason}")]
    Retrieval { name: String, reason: String },
}

impl SettingsError {
    #[must_use]
    pub fn retrieval(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Retrieval {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a [`UserDirectory`](crate::UserDirectory).
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user '{identifier}' not found")]
    NotFound { identifier: String },

    #[error("user '{identifier}' already exists")]
    AlreadyExists { identifier: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    #[must_use]
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn already_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            identifier: identifier.into(),
        }
    }
}
