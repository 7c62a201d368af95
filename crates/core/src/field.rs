//! Replacement fields and their classification.

use std::ops::Range;

/// What a replacement field refers to, derived from its inner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `{}`: the next positional argument.
    Automatic,
    /// `{0}`, `{12}`: a positional argument by index.
    PositionalIndex,
    /// `{name}`: a named argument.
    NamedKey,
}

impl FieldKind {
    /// Classifies the text between the brackets of a field.
    #[must_use]
    pub fn of(inner: &str) -> Self {
        if inner.is_empty() {
            Self::Automatic
        } else if inner.bytes().all(|b| b.is_ascii_digit()) {
            Self::PositionalIndex
        } else {
            Self::NamedKey
        }
    }

    #[must_use]
    pub fn numbering(self) -> NumberingMode {
        match self {
            Self::Automatic => NumberingMode::Automatic,
            Self::PositionalIndex | Self::NamedKey => NumberingMode::Manual,
        }
    }
}

/// Field numbering style, fixed by the first field of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberingMode {
    Automatic,
    Manual,
}

/// A genuine replacement field located in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'s> {
    /// Byte range of the whole bracketed span in the template.
    pub span: Range<usize>,
    /// Text between the outer brackets.
    pub inner: &'s str,
    pub kind: FieldKind,
}

impl<'s> Field<'s> {
    #[must_use]
    pub fn new(span: Range<usize>, inner: &'s str) -> Self {
        Self {
            span,
            inner,
            kind: FieldKind::of(inner),
        }
    }

    #[must_use]
    pub fn numbering(&self) -> NumberingMode {
        self.kind.numbering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_of() {
        assert_eq!(FieldKind::of(""), FieldKind::Automatic);
        assert_eq!(FieldKind::of("0"), FieldKind::PositionalIndex);
        assert_eq!(FieldKind::of("0042"), FieldKind::PositionalIndex);
        assert_eq!(FieldKind::of("script"), FieldKind::NamedKey);
        assert_eq!(FieldKind::of("1a"), FieldKind::NamedKey);
        assert_eq!(FieldKind::of(" "), FieldKind::NamedKey);
        assert_eq!(FieldKind::of("-1"), FieldKind::NamedKey);
        // Non-ASCII digits are not indexes.
        assert_eq!(FieldKind::of("٣"), FieldKind::NamedKey);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(FieldKind::Automatic.numbering(), NumberingMode::Automatic);
        assert_eq!(FieldKind::PositionalIndex.numbering(), NumberingMode::Manual);
        assert_eq!(FieldKind::NamedKey.numbering(), NumberingMode::Manual);
    }

    #[test]
    fn test_field_new() {
        let field = Field::new(5..12, "script");
        assert_eq!(field.kind, FieldKind::NamedKey);
        assert_eq!(field.numbering(), NumberingMode::Manual);
        assert_eq!(field.span, 5..12);
    }
}
