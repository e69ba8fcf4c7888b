//! Metadata document parsing, rendering, and merging.
//!
//! Documents are YAML mappings. Values under the top-level keys are left
//! untyped so each verb can store whatever structure it needs.

use crate::Metadata;
use crate::error::{CoreError, Result};
use serde_yaml::Value;

/// Parse document text into a mapping.
///
/// Empty text and an explicit `null` document both parse to an empty mapping.
///
/// # Errors
/// Returns `CoreError::Yaml` for malformed text and `CoreError::NotAMapping`
/// if the top-level value is a scalar or sequence.
pub fn parse_document(text: &str) -> Result<Metadata> {
    if text.trim().is_empty() {
        return Ok(Metadata::new());
    }

    match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Ok(Metadata::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(CoreError::NotAMapping(value_kind(&other))),
    }
}

/// Render a mapping as block-style document text.
///
/// # Errors
/// Returns `CoreError::Yaml` if the mapping cannot be serialized.
pub fn render_document(data: &Metadata) -> Result<String> {
    Ok(serde_yaml::to_string(data)?)
}

/// Merge `update` into `target` one level deep.
///
/// Every top-level key in `update` replaces the key in `target`, nested
/// values included. Keys missing from `update` are kept. Existing keys keep
/// their position; new keys are appended.
///
/// Returns the keys whose value actually changed.
pub fn merge_shallow(target: &mut Metadata, update: Metadata) -> Vec<Value> {
    let mut changed = Vec::new();

    for (key, value) in update {
        if target.get(&key) != Some(&value) {
            changed.push(key.clone());
        }
        target.insert(key, value);
    }

    changed
}

/// Short name of a value's kind, for error messages.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
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
