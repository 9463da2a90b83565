//! Small helpers for inspecting untyped YAML trees.

use serde_yaml::Value;
use std::borrow::Cow;

/// Human-readable name of a value's shape, for error messages.
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// The text of a scalar as written in the document.
///
/// Strings are borrowed; numbers and booleans are rendered, so an unquoted
/// `123` reads as `"123"`. Null, sequences, mappings and tagged values have no
/// text.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        _ => None,
    }
}

/// The string stored under `key` when `value` is a mapping.
///
/// Returns `None` for non-mappings, missing keys and non-string fields alike.
#[must_use]
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    match value {
        Value::Mapping(mapping) => match mapping.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        },
        _ => None,
    }
}
