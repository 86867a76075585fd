#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Custom Attributes Plugin
//!
//! Attaches administrator-defined attributes to host user records without
//! touching the host schema. All attributes are declared in one settings
//! property:
//!
//! ```text
//! entry(,entry)*
//! entry := method:form:name:type[:opt1(;opt2)*]
//! ```
//!
//! - `method` - any letters; `r` grants read, `w` grants write (case-insensitive)
//! - `form` - form group shown in the host UI
//! - `name` - attribute key on the user record
//! - `type` - `boolean`, `date`, `email`, `enum`, `language`, `multiline`,
//!   `password`, `terminal-color-scheme`, `time`, `timezone`, `username` or
//!   `text` (the fallback for anything else)
//!
//! Example:
//!
//! ```text
//! rw:Profile:department:text,r:Profile:employeeId:text:EMP-,rw:Access:vpnEnabled:boolean:true
//! ```
//!
//! Malformed entries are dropped and an unreadable property disables the
//! feature; neither ever blocks a directory operation.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   custom_attributes:
//!     config:
//!       property: custom-attributes
//!       cache_definitions: false
//! ```

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::CustomAttributesConfig;
pub use domain::{
    AttributeDefinition, ConfigurationService, CustomAttributeDirectory, CustomAttributeUser,
    CustomAttributeUserContext, FieldType, Method, Permission,
};
pub use infra::FileSettingsSource;
pub use module::CustomAttributesPlugin;
