#[cfg(test)]
mod tests {
    use clap::Parser;
    use pyformat_cli::cli_args::Args;
    use pyformat_cli::execution::execute;
    use pyformat_core::error::{Error, ErrorKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(arguments: &[&str]) -> Result<String, Error> {
        let mut argv = vec!["pyfmt", "--no-default-vars"];
        argv.extend_from_slice(arguments);
        execute(&Args::parse_from(argv))
    }

    fn error_kind(result: Result<String, Error>) -> ErrorKind {
        match result {
            Err(Error::Format(error)) => error.kind(),
            other => panic!("Expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn test_automatic_numbering() {
        assert_eq!(run(&["Test {}", "format"]).unwrap(), "Test format");
    }

    #[test]
    fn test_manual_numbering() {
        assert_eq!(
            run(&["Test {1} {0}", "format", "PyFormatJS"]).unwrap(),
            "Test PyFormatJS format"
        );
    }

    #[test]
    fn test_named_and_positional() {
        let output = run(&[
            "{team2} ({1} : {0}) {team1}",
            "-p",
            "team1=Atlanta Hawks",
            "-p",
            "team2=Boston Celtics",
            "20",
            "15",
        ])
        .unwrap();
        assert_eq!(output, "Boston Celtics (15 : 20) Atlanta Hawks");
    }

    #[test]
    fn test_negative_positional() {
        assert_eq!(run(&["{0} + {1}", "-5", "3"]).unwrap(), "-5 + 3");
    }

    #[test]
    fn test_large_number_from_variables_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "id: 12345678901234567890").unwrap();
        let path = temp_file.path().to_str().unwrap();

        assert_eq!(run(&["-f", path, "{id}"]).unwrap(), "12345678901234567890");
    }

    #[test]
    fn test_escape() {
        assert_eq!(run(&["Test {{0}}", "format"]).unwrap(), "Test {0}");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(error_kind(run(&["Test {} {0}", "a", "b"])), ErrorKind::Value);
        assert_eq!(error_kind(run(&["Test {{}", "format"])), ErrorKind::Value);
        assert_eq!(error_kind(run(&["Test {}"])), ErrorKind::Index);
        assert_eq!(error_kind(run(&["Test {script}"])), ErrorKind::Key);
    }

    #[test]
    fn test_error_message_names_kind() {
        let error = run(&["Test {script}"]).unwrap_err();
        assert_eq!(error.to_string(), "KeyError: Missing key 'script'");
    }

    #[test]
    fn test_bad_parameter() {
        assert!(matches!(
            run(&["{a}", "-p", "a"]),
            Err(Error::ParameterFormat(_))
        ));
    }

    #[test]
    fn test_keys_listing() {
        let output = run(&["--keys", "{team2} {0} {team1} {team2}"]).unwrap();
        assert_eq!(output, "team2\nteam1");
    }

    #[test]
    fn test_variables_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "team1: Atlanta Hawks").unwrap();
        writeln!(temp_file, "team2: Boston Celtics").unwrap();
        writeln!(temp_file, "home: 20").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let output = run(&["--vars", path, "{team1} {home} - {away} {team2}", "-p", "away=15"]).unwrap();
        assert_eq!(output, "Atlanta Hawks 20 - 15 Boston Celtics");
    }

    #[test]
    fn test_parameter_overrides_variables_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "team: Atlanta Hawks").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let output = run(&["-f", path, "Go {team}", "-p", "team=Boston Celtics"]).unwrap();
        assert_eq!(output, "Go Boston Celtics");
    }

    #[test]
    fn test_missing_variables_file() {
        assert!(matches!(
            run(&["--vars", "/does/not/exist.yml", "{a}"]),
            Err(Error::Io { .. })
        ));
    }
}
