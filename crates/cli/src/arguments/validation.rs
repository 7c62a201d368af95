use indexmap::IndexSet;
use pyformat_core::file_handling::Variables;

/// Named arguments that no field of the template refers to.
///
/// Unused names are harmless when rendering, but usually point at a typo
/// in either the template or the parameter.
#[must_use]
pub fn unused_named_keys<'a>(template_keys: &IndexSet<&str>, named: &'a Variables) -> Vec<&'a str> {
    named
        .keys()
        .map(String::as_str)
        .filter(|key| !template_keys.contains(*key))
        .collect()
}
