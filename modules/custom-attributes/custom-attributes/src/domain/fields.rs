//! Mapping of attribute definitions to typed form fields.

use std::collections::HashMap;

use custom_attributes_sdk::{Field, FieldKind, Form};

use super::definition::AttributeDefinition;

/// Value stored by a boolean field when no option overrides it.
pub const DEFAULT_BOOLEAN_VALUE: &str = "true";

/// Attribute types understood by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Boolean,
    Date,
    Email,
    Enum,
    Language,
    Multiline,
    Password,
    TerminalColorScheme,
    Time,
    Timezone,
    Username,
    Text,
}

impl FieldType {
    /// Resolve a type token. Unknown tokens fall back to [`FieldType::Text`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "email" => Self::Email,
            "enum" => Self::Enum,
            "language" => Self::Language,
            "multiline" => Self::Multiline,
            "password" => Self::Password,
            "terminal-color-scheme" => Self::TerminalColorScheme,
            "time" => Self::Time,
            "timezone" => Self::Timezone,
            "username" => Self::Username,
            _ => Self::Text,
        }
    }
}

/// Build the field descriptor for a single definition.
#[must_use]
pub fn to_field(def: &AttributeDefinition) -> Field {
    let kind = match def.field_type() {
        FieldType::Boolean => FieldKind::Boolean {
            true_value: def
                .options
                .as_ref()
                .and_then(|options| options.first())
                .map_or_else(|| DEFAULT_BOOLEAN_VALUE.to_owned(), Clone::clone),
        },
        FieldType::Date => FieldKind::Date,
        FieldType::Email => FieldKind::Email,
        FieldType::Enum => FieldKind::Enum {
            options: def.options.clone().unwrap_or_default(),
        },
        FieldType::Language => FieldKind::Language,
        FieldType::Multiline => FieldKind::Multiline,
        FieldType::Password => FieldKind::Password,
        FieldType::TerminalColorScheme => FieldKind::TerminalColorScheme,
        FieldType::Time => FieldKind::Time,
        FieldType::Timezone => FieldKind::Timezone,
        FieldType::Username => FieldKind::Username,
        FieldType::Text => FieldKind::Text {
            options: def.options.clone(),
        },
    };

    Field::new(def.name.clone(), kind)
}

/// Group fields into forms, keeping the first-seen order of form names and
/// the declaration order of fields within each form.
#[must_use]
pub fn group_by_form(definitions: &[AttributeDefinition]) -> Vec<Form> {
    let mut forms: Vec<Form> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for def in definitions {
        let field = to_field(def);
        if let Some(&idx) = positions.get(def.form.as_str()) {
            forms[idx].fields.push(field);
        } else {
            positions.insert(def.form.as_str(), forms.len());
            forms.push(Form::new(def.form.clone(), vec![field]));
        }
    }

    forms
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::parser::parse;

    fn single(raw: &str) -> Field {
        to_field(&parse(Some(raw))[0])
    }

    #[test]
    fn boolean_defaults_to_true_sentinel() {
        assert_eq!(
            single("rw:F:flag:boolean").kind,
            FieldKind::Boolean {
                true_value: "true".to_owned()
            }
        );
    }

    #[test]
    fn boolean_uses_first_option_as_sentinel() {
        assert_eq!(
            single("rw:F:flag:boolean:yes").kind,
            FieldKind::Boolean {
                true_value: "yes".to_owned()
            }
        );
        assert_eq!(
            single("rw:F:flag:boolean:on;off").kind,
            FieldKind::Boolean {
                true_value: "on".to_owned()
            }
        );
    }

    #[test]
    fn boolean_with_trailing_separator_keeps_default_sentinel() {
        assert_eq!(
            single("rw:F:flag:boolean:").kind,
            FieldKind::Boolean {
                true_value: "true".to_owned()
            }
        );
    }

    #[test]
    fn enum_carries_choice_list() {
        assert_eq!(
            single("rw:Plan:tier:enum:gold;silver").kind,
            FieldKind::Enum {
                options: vec!["gold".to_owned(), "silver".to_owned()]
            }
        );
        assert_eq!(
            single("rw:Plan:tier:enum:gold;silver;").kind,
            FieldKind::Enum {
                options: vec!["gold".to_owned(), "silver".to_owned()]
            }
        );
        assert_eq!(
            single("rw:Plan:tier:enum").kind,
            FieldKind::Enum { options: vec![] }
        );
    }

    #[test]
    fn text_keeps_optional_suggestions() {
        assert_eq!(
            single("r:Profile:employeeId:text:EMP-").kind,
            FieldKind::Text {
                options: Some(vec!["EMP-".to_owned()])
            }
        );
        assert_eq!(
            single("r:Profile:employeeId:text").kind,
            FieldKind::Text { options: None }
        );
    }

    #[test]
    fn unknown_type_maps_to_text() {
        let field = single("rw:F:color:rgb:red;green");
        assert_eq!(field.name, "color");
        assert_eq!(
            field.kind,
            FieldKind::Text {
                options: Some(vec!["red".to_owned(), "green".to_owned()])
            }
        );
        assert_eq!(FieldType::from_name("BOOLEAN"), FieldType::Text);
    }

    #[test]
    fn simple_types_ignore_options() {
        let cases = [
            ("date", FieldKind::Date),
            ("email", FieldKind::Email),
            ("language", FieldKind::Language),
            ("multiline", FieldKind::Multiline),
            ("password", FieldKind::Password),
            ("terminal-color-scheme", FieldKind::TerminalColorScheme),
            ("time", FieldKind::Time),
            ("timezone", FieldKind::Timezone),
            ("username", FieldKind::Username),
        ];

        for (type_name, expected) in cases {
            let field = single(&format!("rw:F:attr:{type_name}:ignored"));
            assert_eq!(field.kind, expected, "type {type_name}");
            assert_ne!(FieldType::from_name(type_name), FieldType::Text);
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let defs = parse(Some(
            "rw:Profile:department:text,rw:Access:vpn:boolean,r:Profile:badge:text,rw:Access:shell:multiline",
        ));

        let forms = group_by_form(&defs);
        let names: Vec<&str> = forms.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Profile", "Access"]);

        let profile: Vec<&str> = forms[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(profile, vec!["department", "badge"]);

        let access: Vec<&str> = forms[1].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(access, vec!["vpn", "shell"]);
    }

    #[test]
    fn duplicate_names_produce_duplicate_fields() {
        let forms = group_by_form(&parse(Some("rw:F:dup:text,r:F:dup:email")));
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].fields.len(), 2);
        assert_eq!(forms[0].fields[1].kind, FieldKind::Email);
    }

    #[test]
    fn no_definitions_no_forms() {
        assert!(group_by_form(&[]).is_empty());
    }
}
