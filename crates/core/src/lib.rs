//! PyFormat Core Library
//!
//! This crate implements the replacement-field subset of Python's
//! `str.format`: positional (`{0}`), automatically numbered (`{}`) and
//! named (`{name}`) fields, doubled-bracket escapes, and the three error
//! categories Python reports for bad templates or missing arguments.
//!
//! # Key Features
//!
//! - **Scanning**: Split a template into literals, escapes and fields
//! - **Rendering**: Resolve fields against positional and named arguments
//! - **Error Kinds**: `ValueError`, `IndexError` and `KeyError` as typed categories
//! - **Variables Files**: Load named arguments from YAML
//!
//! # Examples
//!
//! ```
//! use pyformat_core::arguments::Arguments;
//! use pyformat_core::template::format;
//!
//! let arguments = Arguments::new().with_named("script", &"PyFormatJS");
//! assert_eq!(format("This is {script}", &arguments)?, "This is PyFormatJS");
//! # Ok::<(), pyformat_core::error::FormatError>(())
//! ```

pub mod arguments;
pub mod config;
pub mod error;
pub mod field;
pub mod file_handling;
pub mod scanner;
pub mod template;
pub mod value;
