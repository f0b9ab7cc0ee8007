//! Identifier sanitizing and operation name synthesis
//!
//! Every name that reaches generated code goes through [`sanitize`].

use std::collections::HashSet;

use crate::method::Method;
use crate::operation::Operation;

/// Fallback for inputs with no identifier characters at all.
const EMPTY_IDENT: &str = "unnamed";

/// Strict and reserved Rust keywords (2024 edition).
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Map an arbitrary string to a valid, non-empty Rust identifier.
///
/// Runs of characters outside `[A-Za-z0-9_]` become a single `_` between
/// identifier characters and are dropped at either end. A leading digit gets a
/// `_` prefix and keywords get a `_` suffix.
///
/// "/users/{id}" → "users_id", "2fa" → "_2fa", "type" → "type_", "" → "unnamed"
#[must_use]
pub fn sanitize(input: &str) -> String {
    compact(input).map_or_else(|| EMPTY_IDENT.to_string(), finish)
}

/// Collapse `input` to identifier characters, or `None` when nothing is left.
fn compact(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }
    // A lone "_" is a pattern, not an identifier.
    if out.is_empty() || out.chars().all(|c| c == '_') {
        None
    } else {
        Some(out)
    }
}

fn finish(mut ident: String) -> String {
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if is_keyword(&ident) {
        ident.push('_');
    }
    ident
}

#[must_use]
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.contains(&ident)
}

/// Function name for an operation without an `operationId`.
///
/// `GET /users/{id}` → `get_users_id`, `GET /` → `get_root`
#[must_use]
pub fn synthesize_operation_name(path: &str, method: Method) -> String {
    let path_part = compact(path).unwrap_or_else(|| "root".to_string());
    finish(format!("{}_{}", method.as_str(), path_part))
}

/// Sanitized `operationId` when present, else the synthesized name.
#[must_use]
pub fn operation_name(path: &str, method: Method, operation: &Operation<'_>) -> String {
    let id = operation.operation_id();
    if compact(id).is_some() {
        sanitize(id)
    } else {
        synthesize_operation_name(path, method)
    }
}

/// Derived type name for a type nested under `parent`.
#[must_use]
pub fn nested_name(parent: &str, child: &str) -> String {
    sanitize(&format!("{parent}_{child}"))
}

/// `base`, or `base_2`, `base_3`, ... when already in `used`. The result is
/// recorded in `used`.
pub fn unique(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Returns true when `s` is a valid Rust identifier that is not a keyword.
#[must_use]
pub fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s != "_"
        && !is_keyword(s)
}
