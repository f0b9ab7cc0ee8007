//! `$ref` resolution against the top-level definitions table
//!
//! Only local `#/definitions/<name>` pointers resolve. Anything else is left
//! to the caller's fallback policy.

use crate::schema::{Properties, Property};

/// JSON pointer prefix of the definitions table.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Name a definitions reference points at; `None` for any other string.
#[must_use]
pub fn definition_name(reference: &str) -> Option<&str> {
    reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .filter(|name| !name.is_empty())
}

/// Look `reference` up in `definitions`.
///
/// The prefix is stripped when present, otherwise the input is taken as a
/// bare name. Linear scan in document order with an exact, case-sensitive
/// match; the first hit wins. Misses yield an empty view.
#[must_use]
pub fn resolve<'a>(definitions: Properties<'a>, reference: &str) -> Property<'a> {
    let name = reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .unwrap_or(reference);
    definitions
        .iter()
        .find_map(|(key, schema)| (key == name).then_some(schema))
        .unwrap_or_default()
}

/// The `#/definitions/` pointer for `name`.
#[must_use]
pub fn definition_ref(name: &str) -> String {
    format!("{DEFINITIONS_PREFIX}{name}")
}
