//! PyFormat CLI Library
//!
//! This crate provides `pyfmt`, a command-line front end for
//! `pyformat-core`. It collects positional arguments, `-p key=value` named
//! arguments and an optional YAML variables file, then renders a format
//! string with them.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Building the named and positional argument bundle
//! - [`execution`]: Rendering, or listing keys, for one invocation
//!
//! # Examples
//!
//! ```bash
//! # Automatic numbering
//! pyfmt "Test {}" format
//!
//! # Manual numbering with named arguments
//! pyfmt "{team2} ({1} : {0}) {team1}" 20 15 -p "team1=Atlanta Hawks" -p "team2=Boston Celtics"
//!
//! # Named arguments from a file
//! pyfmt --vars teams.yml "{team1} vs {team2}"
//!
//! # Which names does a template need?
//! pyfmt --keys "{team1} vs {team2}"
//! ```

pub mod arguments;
pub mod cli_args;
pub mod execution;
