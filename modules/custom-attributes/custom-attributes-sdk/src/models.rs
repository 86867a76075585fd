//! Models shared between the host platform and the custom attributes engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Arbitrary user attributes, keyed by attribute name.
pub type AttributeMap = HashMap<String, String>;

/// A named group of fields presented together in the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Form {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A single typed input field bound to an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Attribute name the field reads and writes.
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Field descriptor kinds understood by the host UI.
///
/// Serialized with a `type` tag, e.g. `{"name": "vpn", "type": "boolean", "true_value": "true"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Checkbox; stores `true_value` when checked.
    Boolean { true_value: String },
    Date,
    Email,
    /// Drop-down restricted to `options`.
    Enum { options: Vec<String> },
    Language,
    Multiline,
    Password,
    TerminalColorScheme,
    Time,
    Timezone,
    Username,
    /// Free text with optional suggestions.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
    },
}
