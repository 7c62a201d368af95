use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Category of a formatting failure.
///
/// Callers can branch on the category without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The template itself is malformed.
    Value,
    /// A positional or automatic field has no matching argument.
    Index,
    /// A named field has no matching key.
    Key,
}

impl Display for ErrorKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Value => "ValueError",
            Self::Index => "IndexError",
            Self::Key => "KeyError",
        })
    }
}

/// Errors raised while rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Cannot switch between automatic field numbering and manual field specification")]
    MixedNumbering,

    #[error("Single '}}' encountered in format string")]
    InvalidEscape,

    #[error("Missing argument for replacement field {}", .0)]
    MissingArgument(usize),

    /// Index digits that do not fit in a `usize`, kept as written.
    #[error("Missing argument for replacement field {}", .0)]
    IndexOutOfRange(String),

    #[error("Missing key '{}'", .0)]
    MissingKey(String),
}

impl FormatError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MixedNumbering | Self::InvalidEscape => ErrorKind::Value,
            Self::MissingArgument(_) | Self::IndexOutOfRange(_) => ErrorKind::Index,
            Self::MissingKey(_) => ErrorKind::Key,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {}", .0.kind(), .0)]
    Format(#[from] FormatError),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Named parameter `{}` is not in the format key=value", .0)]
    ParameterFormat(String),

    #[error("Variables file at `{}` must be a mapping of names to scalar values", .0)]
    VariablesShape(String),

    #[error("Invalid name: name may not be empty")]
    EmptyKey,

    #[error("Invalid name `{}`: name cannot be purely numeric", .0)]
    NumericKey(String),

    #[error("Invalid name `{}`: name cannot start with `{{`, contain `}}` or span lines", .0)]
    UnreachableKey(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
