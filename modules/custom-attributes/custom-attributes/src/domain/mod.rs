//! Domain layer for the custom attributes plugin.

pub mod context;
pub mod definition;
pub mod directory;
pub mod fields;
pub mod filter;
pub mod parser;
pub mod service;
pub mod user;

pub use context::CustomAttributeUserContext;
pub use definition::{AttributeDefinition, Method, Permission};
pub use directory::CustomAttributeDirectory;
pub use fields::FieldType;
pub use service::ConfigurationService;
pub use user::CustomAttributeUser;
