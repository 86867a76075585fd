//! Configuration for the custom attributes plugin.

use serde::{Deserialize, Serialize};

/// Settings property holding the attribute definitions by default.
pub const DEFAULT_PROPERTY: &str = "custom-attributes";

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomAttributesConfig {
    /// Name of the settings property containing the definition string.
    pub property: String,

    /// Keep parsed definitions until the settings revision changes.
    ///
    /// Off by default: definitions are re-read on every access.
    pub cache_definitions: bool,
}

impl Default for CustomAttributesConfig {
    fn default() -> Self {
        Self {
            property: DEFAULT_PROPERTY.to_owned(),
            cache_definitions: false,
        }
    }
}
