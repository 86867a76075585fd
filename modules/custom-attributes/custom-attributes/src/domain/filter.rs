//! Permission filtering of user attribute maps.

use custom_attributes_sdk::AttributeMap;

use super::definition::{AttributeDefinition, Method};

/// Return a copy of `attributes` without the keys `method` may not touch.
///
/// A key is removed when any definition with that name denies `method`, so a
/// name declared twice with conflicting permissions is denied. Keys without a
/// definition pass through; missing keys are never added.
#[must_use]
pub fn apply(
    method: Method,
    definitions: &[AttributeDefinition],
    attributes: &AttributeMap,
) -> AttributeMap {
    let mut filtered = attributes.clone();
    for def in definitions.iter().filter(|def| !def.allows(method)) {
        filtered.remove(&def.name);
    }
    filtered
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::parser::parse;

    fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn read_only_key_survives_read_but_not_write() {
        let defs = parse(Some("r:General:nickname:text"));
        let input = attrs(&[("nickname", "Al"), ("age", "30")]);

        assert_eq!(apply(Method::Read, &defs, &input), input);
        assert_eq!(apply(Method::Write, &defs, &input), attrs(&[("age", "30")]));
    }

    #[test]
    fn write_only_key_is_hidden_on_read() {
        let defs = parse(Some("w:Secrets:pin:password"));
        let input = attrs(&[("pin", "1234"), ("name", "Bob")]);

        assert_eq!(apply(Method::Read, &defs, &input), attrs(&[("name", "Bob")]));
        assert_eq!(apply(Method::Write, &defs, &input), input);
    }

    #[test]
    fn key_without_any_permission_is_always_removed() {
        let defs = parse(Some("-:Hidden:internal:text"));
        let input = attrs(&[("internal", "x")]);

        assert!(apply(Method::Read, &defs, &input).is_empty());
        assert!(apply(Method::Write, &defs, &input).is_empty());
    }

    #[test]
    fn missing_keys_are_not_added() {
        let defs = parse(Some("rw:F:department:text,r:F:badge:text"));
        let input = attrs(&[("other", "1")]);

        assert_eq!(apply(Method::Read, &defs, &input), input);
        assert_eq!(apply(Method::Write, &defs, &input), input);
    }

    #[test]
    fn conflicting_duplicates_deny() {
        let defs = parse(Some("rw:F:dup:text,r:G:dup:text"));
        let input = attrs(&[("dup", "v")]);

        assert_eq!(apply(Method::Read, &defs, &input), input);
        assert!(apply(Method::Write, &defs, &input).is_empty());
    }

    #[test]
    fn input_map_is_not_mutated() {
        let defs = parse(Some("r:F:a:text"));
        let input = attrs(&[("a", "1")]);

        let _ = apply(Method::Write, &defs, &input);
        assert_eq!(input, attrs(&[("a", "1")]));
    }

    #[test]
    fn no_definitions_is_identity() {
        let input = attrs(&[("a", "1"), ("b", "2")]);
        assert_eq!(apply(Method::Read, &[], &input), input);
        assert_eq!(apply(Method::Write, &[], &input), input);
    }
}
