//! Configuration path utilities for pyformat.
//!
//! This module resolves the location of the variables file and expands
//! shell shorthand like `~` in user-supplied paths.

use std::path::Path;

/// Default path for the named variables file
const DEFAULT_VARIABLES_PATH: &str = "~/.pyformat/variables.yml";

/// Where the variables file path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariablesSource {
    /// Given on the command line; it must exist.
    Explicit(String),
    /// The default location; skipped when absent.
    Default(String),
}

impl VariablesSource {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }

    /// Whether the file should be read at all.
    #[must_use]
    pub fn should_load(&self) -> bool {
        match self {
            Self::Explicit(_) => true,
            Self::Default(path) => Path::new(path).exists(),
        }
    }
}

/// Resolves the variables file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// variables path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `variables_path_arg` - Optional custom variables file path
///
/// # Examples
///
/// ```
/// use pyformat_core::config::{get_variables_path, VariablesSource};
///
/// let custom = get_variables_path(&Some("/path/to/vars.yml".to_string()));
/// assert_eq!(custom, VariablesSource::Explicit("/path/to/vars.yml".to_string()));
///
/// let default = get_variables_path(&None);
/// assert!(default.path().ends_with("variables.yml"));
/// ```
pub fn get_variables_path(variables_path_arg: &Option<String>) -> VariablesSource {
    match variables_path_arg {
        Some(path) => VariablesSource::Explicit(shellexpand::tilde(path).to_string()),
        None => VariablesSource::Default(shellexpand::tilde(DEFAULT_VARIABLES_PATH).to_string()),
    }
}
