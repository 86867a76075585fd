//! Parsed custom attribute definitions.

use super::fields::FieldType;

/// Access direction checked against a definition's permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Read,
    Write,
}

/// Read/write flags granted by a method token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Permission {
    pub read: bool,
    pub write: bool,
}

impl Permission {
    /// Derive flags from a method token such as `rw`, `R` or `ro`.
    ///
    /// Any `r` grants read and any `w` grants write, ignoring case. Other
    /// letters are ignored.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let token = token.to_lowercase();
        Self {
            read: token.contains('r'),
            write: token.contains('w'),
        }
    }

    #[must_use]
    pub fn allows(self, method: Method) -> bool {
        match method {
            Method::Read => self.read,
            Method::Write => self.write,
        }
    }
}

/// One custom attribute declared in the settings.
///
/// Names are not unique: a repeated name yields another definition, which
/// takes part in filtering and schema generation like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub permission: Permission,
    pub form: String,
    pub name: String,
    /// Raw type token; resolved through [`FieldType::from_name`].
    pub type_name: String,
    /// `None` when no options field was configured.
    pub options: Option<Vec<String>>,
}

impl AttributeDefinition {
    #[must_use]
    pub fn new(
        method: &str,
        form: &str,
        name: &str,
        type_name: &str,
        options: Option<Vec<String>>,
    ) -> Self {
        Self {
            permission: Permission::from_token(method),
            form: form.to_owned(),
            name: name.to_owned(),
            type_name: type_name.to_owned(),
            options,
        }
    }

    #[must_use]
    pub fn can_read(&self) -> bool {
        self.permission.read
    }

    #[must_use]
    pub fn can_write(&self) -> bool {
        self.permission.write
    }

    #[must_use]
    pub fn allows(&self, method: Method) -> bool {
        self.permission.allows(method)
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        FieldType::from_name(&self.type_name)
    }
}
