//! Argument processing for the pyfmt CLI.
//!
//! This module turns command-line input into the values a template is
//! rendered with:
//! - **Positional arguments**: Provided as trailing arguments
//! - **Named arguments**: Using `-p key=value` format
//! - **Variables file**: A YAML mapping of named arguments
//!
//! Named arguments from the command line take precedence over the
//! variables file.

// Export public items from submodules
pub mod processing;
pub mod validation;

// Re-exports for convenience
pub use processing::{build_arguments, merge_named_parameters};
pub use validation::unused_named_keys;
