//! Parser for the custom attribute definition string.
//!
//! Entries are separated by `,`, fields by `:` and options by `;`. Trailing
//! empty fields and options are ignored, so `rw:F:flag:boolean:` has four
//! fields. Only entries with exactly four or five fields are kept; anything
//! else is dropped without failing the remaining entries.

use super::definition::AttributeDefinition;

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = ':';
const OPTION_SEPARATOR: char = ';';

/// Parse the raw settings value into definitions, in declaration order.
///
/// `None` (property not configured) yields no definitions.
#[must_use]
pub fn parse(raw: Option<&str>) -> Vec<AttributeDefinition> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(ENTRY_SEPARATOR).filter_map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Option<AttributeDefinition> {
    let fields = split_without_trailing_empty(entry, FIELD_SEPARATOR);

    match fields.as_slice() {
        [method, form, name, type_name] => Some(AttributeDefinition::new(
            method, form, name, type_name, None,
        )),
        [method, form, name, type_name, options] => Some(AttributeDefinition::new(
            method,
            form,
            name,
            type_name,
            Some(
                split_without_trailing_empty(options, OPTION_SEPARATOR)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            ),
        )),
        _ => {
            tracing::trace!(
                entry,
                field_count = fields.len(),
                "Dropping malformed custom attribute entry"
            );
            None
        }
    }
}

fn split_without_trailing_empty(value: &str, separator: char) -> Vec<&str> {
    let mut pieces: Vec<&str> = value.split(separator).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}
