//! Identifier derivation.
//!
//! Tool names and variable keys are turned into upper snake case identifiers
//! that name make variables and Dockerfile build arguments. The same input
//! always yields the same identifier, so both artifacts agree on the name of
//! every logical value.

use std::collections::BTreeMap;

/// Suffix of the variable holding an HTTP or object-store source URL.
pub const URL_SUFFIX: &str = "_URL";
/// Suffix of the variable holding a downloaded archive, whatever its format.
pub const ARCHIVE_SUFFIX: &str = "_ZIP";
/// Suffix of the variable holding a tool's install stamp file.
pub const STAMP_SUFFIX: &str = "_STAMP";

/// Convert a human name to lower snake case.
///
/// Word boundaries are separators (anything not alphanumeric), a lower case
/// letter or digit followed by an upper case letter, and the last capital of
/// an acronym followed by a lower case letter (`HTTPServer` -> `http_server`).
/// Digits stay attached to the word they follow (`k8s` -> `k8s`).
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }

        out.extend(c.to_lowercase());
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Canonical identifier for a bare name.
pub fn identifier_of(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

/// Identifier of the variable holding a tool's download URL.
pub fn url_identifier_of(tool_name: &str) -> String {
    format!("{}{}", identifier_of(tool_name), URL_SUFFIX)
}

/// Identifier of the variable holding a tool's downloaded archive.
pub fn archive_identifier_of(tool_name: &str) -> String {
    format!("{}{}", identifier_of(tool_name), ARCHIVE_SUFFIX)
}

/// Identifier of the variable holding a tool's install stamp.
pub fn stamp_identifier_of(tool_name: &str) -> String {
    format!("{}{}", identifier_of(tool_name), STAMP_SUFFIX)
}

/// Identifier for a variable key, prefixed with its tool's identifier.
///
/// An empty tool name denotes a global variable, which carries no prefix.
pub fn scoped_identifier_of(tool_name: &str, key: &str) -> String {
    if tool_name.is_empty() {
        identifier_of(key)
    } else {
        format!("{}_{}", identifier_of(tool_name), identifier_of(key))
    }
}

/// Lower kebab case name used for Dockerfile stage names.
///
/// Derived from the identifier so that two tools get distinct stages exactly
/// when they get distinct identifiers.
pub fn stage_identifier_of(name: &str) -> String {
    to_snake_case(name).replace('_', "-")
}

/// Reference to a make variable.
pub fn make_var_ref(id: &str) -> String {
    format!("$({})", id)
}

/// Reference to a Dockerfile build argument.
pub fn make_arg_ref(id: &str) -> String {
    format!("${{{}}}", id)
}

/// Map every key to the reference of its scoped identifier.
pub fn scoped_identifier_dict<'k, I>(
    tool_name: &str,
    keys: I,
    reference: fn(&str) -> String,
) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'k str>,
{
    keys.into_iter()
        .map(|key| (key.to_string(), reference(&scoped_identifier_of(tool_name, key))))
        .collect()
}

/// [`scoped_identifier_dict`] bound to make variable references.
pub fn var_dict<'k, I>(tool_name: &str, keys: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'k str>,
{
    scoped_identifier_dict(tool_name, keys, make_var_ref)
}

/// [`scoped_identifier_dict`] bound to Dockerfile argument references.
pub fn arg_dict<'k, I>(tool_name: &str, keys: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'k str>,
{
    scoped_identifier_dict(tool_name, keys, make_arg_ref)
}
