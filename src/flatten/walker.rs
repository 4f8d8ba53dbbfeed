//! Recursive walk over a parsed YAML document.

use super::naming::path_to_name;
use crate::env_set::EnvSet;
use crate::error::{ConvertError, Result};
use serde_yaml::{Mapping, Sequence, Value};
use tracing::warn;

/// Flatten a YAML mapping into environment variables.
///
/// `path` is the key path leading up to `mapping`; pass an empty slice for a
/// document root.
///
/// # Errors
///
/// * `ConvertError::ExpectedObjectList` - a list mixes objects with other values
/// * `ConvertError::UnsupportedKey` - a key is null, a collection, or tagged
pub fn flatten(mapping: &Mapping, path: &[String]) -> Result<EnvSet> {
    let mut env = EnvSet::new();
    let mut path = path.to_vec();
    walk_mapping(mapping, &mut path, &mut env)?;
    Ok(env)
}

fn walk_mapping(mapping: &Mapping, path: &mut Vec<String>, env: &mut EnvSet) -> Result<()> {
    for (key, value) in mapping {
        let segment = key_segment(key, path)?;
        path.push(segment);
        walk_value(value, path, env)?;
        path.pop();
    }
    Ok(())
}

fn walk_value(value: &Value, path: &mut Vec<String>, env: &mut EnvSet) -> Result<()> {
    match value {
        Value::Mapping(mapping) => walk_mapping(mapping, path, env)?,
        Value::Sequence(items) => walk_sequence(items, path, env)?,
        Value::Bool(flag) => store(env, path, flag.to_string()),
        Value::Number(number) => store(env, path, number.to_string()),
        Value::String(text) => store(env, path, text.clone()),
        Value::Null => store(env, path, String::new()),
        Value::Tagged(_) => {
            warn!(
                path = %display_path(path),
                value = ?value,
                "unknown YAML element, skipping"
            );
        }
    }
    Ok(())
}

/// Lists of plain strings collapse into a single `a, b, c` value (an empty
/// list included); anything else must be a list of objects, which are walked
/// with their index as the next path segment. Tagged strings are not plain.
fn walk_sequence(items: &Sequence, path: &mut Vec<String>, env: &mut EnvSet) -> Result<()> {
    let strings = items
        .iter()
        .map(|item| match item {
            Value::String(text) => Some(text.as_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>();
    if let Some(strings) = strings {
        store(env, path, strings.join(", "));
        return Ok(());
    }

    for (idx, item) in items.iter().enumerate() {
        path.push(idx.to_string());
        match item {
            Value::Mapping(mapping) => walk_mapping(mapping, path, env)?,
            other => {
                return Err(ConvertError::ExpectedObjectList {
                    path: display_path(path),
                    found: kind_of(other),
                });
            }
        }
        path.pop();
    }
    Ok(())
}

fn store(env: &mut EnvSet, path: &[String], value: String) {
    let name = path_to_name(path);
    if env.get(&name).is_some() {
        warn!(
            name = %name,
            path = %display_path(path),
            "duplicate environment variable within document, keeping the later value"
        );
    }
    env.insert(name, value);
}

/// Render a mapping key as a path segment.
///
/// Scalar keys use their YAML text (`8080: x` gives `8080`).
fn key_segment(key: &Value, parent: &[String]) -> Result<String> {
    match key {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(ConvertError::UnsupportedKey {
            path: display_path(parent),
            found: kind_of(other),
        }),
    }
}

/// Dotted form of a key path for diagnostics.
fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

/// Short description of a node's kind for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
