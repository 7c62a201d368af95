//! Reading named variables from YAML files.
//!
//! A variables file is a flat YAML mapping of names to scalar values:
//!
//! ```yaml
//! team1: Atlanta Hawks
//! team2: Boston Celtics
//! home_score: 20
//! ```

use std::fs;

use indexmap::IndexMap;
use log::debug;

use crate::config::VariablesSource;
use crate::error::Error::{EmptyKey, NumericKey, UnreachableKey, VariablesShape};
use crate::error::{Error, Result};
use crate::field::FieldKind;
use crate::value::Value;

/// Ordered named values, as read from a variables file or the command line.
pub type Variables = IndexMap<String, Value>;

fn read_file(file_description: &str, path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Checks that a name can be referenced by a replacement field.
///
/// # Errors
///
/// Returns an error if the name is empty, purely numeric (it would be read
/// as a positional index), or contains text that ends a field early.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(EmptyKey);
    }

    if FieldKind::of(key) == FieldKind::PositionalIndex {
        return Err(NumericKey(key.to_string()));
    }

    let breaks_field = key.starts_with('{')
        || key.contains('}')
        || key.contains(['\n', '\r', '\u{2028}', '\u{2029}']);
    if breaks_field {
        return Err(UnreachableKey(key.to_string()));
    }

    Ok(())
}

fn variables_from_value(value: serde_yaml::Value, path: &str) -> Result<Variables> {
    // An empty document is null.
    if value.is_null() {
        return Ok(Variables::new());
    }

    let variables: Variables =
        serde_yaml::from_value(value).map_err(|_| VariablesShape(path.to_string()))?;

    for key in variables.keys() {
        validate_key(key)?;
    }

    Ok(variables)
}

/// Parses variables from YAML text.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML, is not a mapping of
/// names to scalars, or if any name fails [`validate_key`].
pub fn parse_variables(content: &str, path: &str) -> Result<Variables> {
    if content.trim().is_empty() {
        return Ok(Variables::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "variables".to_string(),
            path.to_string(),
            e,
        )
    })?;

    variables_from_value(value, path)
}

/// Reads the variables file, if it should be read.
///
/// Returns `None` when the default file is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given file cannot be opened
/// - The file contains invalid YAML
/// - The YAML is not a mapping of valid names to scalars
pub fn get_variables(source: &VariablesSource) -> Result<Option<Variables>> {
    if !source.should_load() {
        debug!("No variables file at `{}`", source.path());
        return Ok(None);
    }

    let path = source.path();
    let content = read_file("variables", path)?;
    let variables = parse_variables(&content, path)?;
    debug!("Loaded {} variable(s) from `{}`", variables.len(), path);

    Ok(Some(variables))
}
