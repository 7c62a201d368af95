//! Argument bundles for rendering templates.
//!
//! Positional and named arguments are kept as two distinct collections. The
//! values themselves are opaque: the only thing the formatter ever asks of
//! them is their [`Display`] form.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};

/// Positional and named values for one or more renders.
///
/// # Examples
///
/// ```
/// use pyformat_core::arguments::Arguments;
/// use pyformat_core::template::format;
///
/// let arguments = Arguments::new()
///     .with_positional(&20)
///     .with_positional(&15)
///     .with_named("team1", &"Atlanta Hawks")
///     .with_named("team2", &"Boston Celtics");
///
/// let rendered = format("{team2} ({1} : {0}) {team1}", &arguments)?;
/// assert_eq!(rendered, "Boston Celtics (15 : 20) Atlanta Hawks");
/// # Ok::<(), pyformat_core::error::FormatError>(())
/// ```
#[derive(Default)]
pub struct Arguments<'a> {
    positional: Vec<&'a dyn Display>,
    named: HashMap<String, &'a dyn Display>,
}

impl<'a> Arguments<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bundle from a slice of positional values and an iterator of
    /// named pairs.
    pub fn from_parts<T, K, V, I>(positional: &'a [T], named: I) -> Self
    where
        T: Display,
        K: Into<String>,
        V: Display + 'a,
        I: IntoIterator<Item = (K, &'a V)>,
    {
        let mut arguments = Self::new();
        for value in positional {
            arguments.push(value);
        }
        for (key, value) in named {
            arguments.insert(key, value);
        }
        arguments
    }

    #[must_use]
    pub fn with_positional(mut self, value: &'a dyn Display) -> Self {
        self.push(value);
        self
    }

    #[must_use]
    pub fn with_named(mut self, key: impl Into<String>, value: &'a dyn Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn push(&mut self, value: &'a dyn Display) {
        self.positional.push(value);
    }

    /// Adds a named value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: &'a dyn Display) {
        self.named.insert(key.into(), value);
    }

    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&'a dyn Display> {
        self.positional.get(index).copied()
    }

    #[must_use]
    pub fn named(&self, key: &str) -> Option<&'a dyn Display> {
        self.named.get(key).copied()
    }

    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    #[must_use]
    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl Debug for Arguments<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let positional: Vec<String> = self.positional.iter().map(ToString::to_string).collect();
        let named: HashMap<&str, String> = self
            .named
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect();

        formatter
            .debug_struct("Arguments")
            .field("positional", &positional)
            .field("named", &named)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_lookup() {
        let arguments = Arguments::new()
            .with_positional(&"format")
            .with_positional(&1.5)
            .with_named("script", &"PyFormatJS");

        assert_eq!(arguments.positional_len(), 2);
        assert_eq!(arguments.named_len(), 1);
        assert_eq!(arguments.positional(1).unwrap().to_string(), "1.5");
        assert!(arguments.positional(2).is_none());
        assert_eq!(arguments.named("script").unwrap().to_string(), "PyFormatJS");
        assert!(arguments.named("missing").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut arguments = Arguments::new();
        arguments.insert("team", &"Hawks");
        arguments.insert("team", &"Celtics");

        assert_eq!(arguments.named_len(), 1);
        assert_eq!(arguments.named("team").unwrap().to_string(), "Celtics");
    }

    #[test]
    fn test_from_parts() {
        let positional = vec!["a".to_string(), "b".to_string()];
        let home = "Hawks".to_string();
        let arguments = Arguments::from_parts(&positional, [("home", &home)]);

        assert_eq!(arguments.positional(0).unwrap().to_string(), "a");
        assert_eq!(arguments.named("home").unwrap().to_string(), "Hawks");
    }

    #[test]
    fn test_empty() {
        assert!(Arguments::new().is_empty());
        assert!(!Arguments::new().with_positional(&0).is_empty());
    }

    #[test]
    fn test_debug_lists_rendered_values() {
        let arguments = Arguments::new().with_positional(&20);
        let debug = format!("{arguments:?}");
        assert!(debug.contains("Arguments"));
        assert!(debug.contains("\"20\""));
    }
}
