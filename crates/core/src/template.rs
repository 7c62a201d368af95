//! Template rendering.
//!
//! A [`Template`] is scanned once and can then be rendered any number of
//! times. Rendering walks the segments in order, resolving each field
//! against an [`Arguments`] bundle. The numbering mode and the automatic
//! counter live in a [`Resolver`] created fresh for every render.

use std::fmt::Display;

use indexmap::IndexSet;
use log::{debug, trace};

use crate::arguments::Arguments;
use crate::error::FormatError;
use crate::field::{Field, FieldKind, NumberingMode};
use crate::scanner::{scan, Segment};

/// A scanned format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'s> {
    source: &'s str,
    segments: Vec<Segment<'s>>,
}

impl<'s> Template<'s> {
    /// Scans `source` into a reusable template.
    ///
    /// Scanning is infallible. Malformed escapes and numbering conflicts are
    /// reported by [`Template::render`] so that the first problem in reading
    /// order is the one returned.
    #[must_use]
    pub fn parse(source: &'s str) -> Self {
        Self {
            source,
            segments: scan(source),
        }
    }

    #[must_use]
    pub fn source(&self) -> &'s str {
        self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'s>] {
        &self.segments
    }

    /// Replacement fields in template order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<'s>> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Distinct named keys in order of first appearance.
    #[must_use]
    pub fn keys(&self) -> IndexSet<&'s str> {
        self.fields()
            .filter(|field| field.kind == FieldKind::NamedKey)
            .map(|field| field.inner)
            .collect()
    }

    /// The numbering mode selected by the first field, if there is one.
    #[must_use]
    pub fn numbering(&self) -> Option<NumberingMode> {
        self.fields().next().map(Field::numbering)
    }

    /// Substitutes every field with its argument.
    ///
    /// # Errors
    ///
    /// Returns the first error met scanning left to right:
    /// - [`FormatError::InvalidEscape`] for an unbalanced bracket span
    /// - [`FormatError::MixedNumbering`] when `{}` fields are mixed with
    ///   indexed or named fields
    /// - [`FormatError::MissingArgument`] for an absent positional argument
    /// - [`FormatError::MissingKey`] for an absent named argument
    pub fn render(&self, arguments: &Arguments<'_>) -> Result<String, FormatError> {
        let mut resolver = Resolver::new(arguments);
        let mut output = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) | Segment::Escaped(text) => output.push_str(text),
                Segment::Malformed(span) => {
                    debug!("Unbalanced brackets at {:?} in `{}`", span, self.source);
                    return Err(FormatError::InvalidEscape);
                }
                Segment::Field(field) => {
                    let value = resolver.resolve(field)?;
                    output.push_str(&value.to_string());
                }
            }
        }

        Ok(output)
    }
}

/// Per-render resolution state.
struct Resolver<'a, 'b> {
    arguments: &'b Arguments<'a>,
    mode: Option<NumberingMode>,
    counter: usize,
}

impl<'a, 'b> Resolver<'a, 'b> {
    fn new(arguments: &'b Arguments<'a>) -> Self {
        Self {
            arguments,
            mode: None,
            counter: 0,
        }
    }

    fn resolve(&mut self, field: &Field<'_>) -> Result<&'a dyn Display, FormatError> {
        let mode = *self.mode.get_or_insert(field.numbering());
        if mode != field.numbering() {
            return Err(FormatError::MixedNumbering);
        }

        trace!("Resolving {:?} field `{}`", field.kind, field.inner);

        match field.kind {
            FieldKind::Automatic => {
                let value = self
                    .arguments
                    .positional(self.counter)
                    .ok_or(FormatError::MissingArgument(self.counter))?;
                self.counter += 1;
                Ok(value)
            }
            FieldKind::PositionalIndex => {
                let index: usize = field
                    .inner
                    .parse()
                    .map_err(|_| FormatError::IndexOutOfRange(field.inner.to_string()))?;
                self.arguments
                    .positional(index)
                    .ok_or(FormatError::MissingArgument(index))
            }
            FieldKind::NamedKey => self
                .arguments
                .named(field.inner)
                .ok_or_else(|| FormatError::MissingKey(field.inner.to_string())),
        }
    }
}

/// Formats `template` with `arguments` in a single call.
///
/// # Errors
///
/// See [`Template::render`].
///
/// # Examples
///
/// ```
/// use pyformat_core::arguments::Arguments;
/// use pyformat_core::template::format;
///
/// let arguments = Arguments::new().with_positional(&"format");
/// assert_eq!(format("Test {}", &arguments)?, "Test format");
/// assert_eq!(format("Test {{0}}", &arguments)?, "Test {0}");
/// # Ok::<(), pyformat_core::error::FormatError>(())
/// ```
pub fn format(template: &str, arguments: &Arguments<'_>) -> Result<String, FormatError> {
    Template::parse(template).render(arguments)
}
