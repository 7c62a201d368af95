use log::debug;
use pyformat_core::arguments::Arguments;
use pyformat_core::error::Error::ParameterFormat;
use pyformat_core::error::Result;
use pyformat_core::file_handling::{validate_key, Variables};
use pyformat_core::value::Value;

/// Splits a `key=value` named parameter.
///
/// Only the first `=` separates key from value, so values may contain `=`.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is not a usable name.
pub fn parse_named_parameter(parameter: &str) -> Result<(String, String)> {
    let Some((key, value)) = parameter.split_once('=') else {
        return Err(ParameterFormat(parameter.to_string()));
    };

    validate_key(key)?;

    Ok((key.to_string(), value.to_string()))
}

/// Merges command-line named parameters over the variables file.
///
/// Parameters are applied in order, so later ones replace earlier ones.
///
/// # Errors
///
/// Returns an error if any parameter is malformed.
pub fn merge_named_parameters(
    variables: Option<Variables>,
    parameters: &[String],
) -> Result<Variables> {
    let mut named = variables.unwrap_or_default();

    for parameter in parameters {
        let (key, value) = parse_named_parameter(parameter)?;
        if named.insert(key.clone(), Value::from(value)).is_some() {
            debug!("Named parameter `{}` replaces an earlier value", key);
        }
    }

    Ok(named)
}

/// Builds the argument bundle rendered against the template.
pub fn build_arguments<'a>(positional: &'a [String], named: &'a Variables) -> Arguments<'a> {
    Arguments::from_parts(positional, named.iter().map(|(key, value)| (key.as_str(), value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyformat_core::error::Error;

    #[test]
    fn test_parse_named_parameter() {
        let (key, value) = parse_named_parameter("team=Atlanta Hawks").unwrap();
        assert_eq!(key, "team");
        assert_eq!(value, "Atlanta Hawks");
    }

    #[test]
    fn test_parse_named_parameter_value_with_equals() {
        let (key, value) = parse_named_parameter("query=a=b").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "a=b");
    }

    #[test]
    fn test_parse_named_parameter_empty_value() {
        let (_, value) = parse_named_parameter("empty=").unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_parse_named_parameter_errors() {
        assert!(matches!(
            parse_named_parameter("no-equals"),
            Err(Error::ParameterFormat(_))
        ));
        assert!(matches!(
            parse_named_parameter("=value"),
            Err(Error::EmptyKey)
        ));
        assert!(matches!(
            parse_named_parameter("0=value"),
            Err(Error::NumericKey(_))
        ));
    }

    #[test]
    fn test_merge_overrides_file() {
        let mut file = Variables::new();
        file.insert("team".to_string(), Value::from("Hawks"));
        file.insert("score".to_string(), Value::Integer(20));

        let named = merge_named_parameters(
            Some(file),
            &["team=Celtics".to_string(), "team=Knicks".to_string()],
        )
        .unwrap();

        assert_eq!(named.len(), 2);
        assert_eq!(named["team"], Value::from("Knicks"));
        assert_eq!(named["score"], Value::Integer(20));
    }

    #[test]
    fn test_build_arguments() {
        let positional = vec!["20".to_string(), "15".to_string()];
        let named = merge_named_parameters(None, &["team1=Hawks".to_string()]).unwrap();

        let arguments = build_arguments(&positional, &named);
        assert_eq!(arguments.positional_len(), 2);
        assert_eq!(arguments.named("team1").unwrap().to_string(), "Hawks");
    }
}
