#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Custom Attributes SDK
//!
//! This crate defines the contracts between the host identity platform and the
//! `custom_attributes` policy engine:
//!
//! - [`SettingsSource`] - Named string properties read by the engine
//! - [`User`], [`UserDirectory`], [`UserContext`] - Host entities the engine decorates
//! - [`Form`], [`Field`], [`FieldKind`] - Attribute schema presented to the UI
//! - [`SettingsError`], [`DirectoryError`] - Error types
//! - [`memory`] - Static in-memory host for development and testing
//!
//! ## Usage
//!
//! ```ignore
//! use custom_attributes_sdk::{UserContext, UserDirectory};
//!
//! let directory = context.user_directory()?;
//! if let Some(user) = directory.get("alice").await? {
//!     let attributes = user.attributes();
//! }
//!
//! for form in context.user_attributes() {
//!     println!("{}: {} fields", form.name, form.fields.len());
//! }
//! ```

pub mod api;
pub mod error;
pub mod memory;
pub mod models;

pub use api::{SettingsSource, User, UserContext, UserDirectory};
pub use error::{DirectoryError, SettingsError};
pub use models::{AttributeMap, Field, FieldKind, Form};
