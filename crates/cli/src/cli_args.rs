//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for `pyfmt`
//! using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the `pyfmt` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use pyformat_cli::cli_args::Args;
///
/// let args = Args::parse_from(["pyfmt", "Test {}", "format"]);
/// assert_eq!(args.template, "Test {}");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a YAML file of named arguments.
    ///
    /// If not provided, `~/.pyformat/variables.yml` is used when it exists.
    #[arg(long = "vars", short = 'f')]
    pub variables_path: Option<String>,

    /// Do not read the default variables file.
    #[arg(long, action)]
    pub no_default_vars: bool,

    /// List the named keys used by the template instead of rendering it.
    #[arg(long, short = 'k', action)]
    pub keys: bool,

    /// Named arguments in the format key=value.
    ///
    /// Multiple arguments can be provided with repeated `-p` flags. A later
    /// definition of the same key replaces an earlier one, and any value
    /// from the variables file.
    ///
    /// # Examples
    /// ```bash
    /// pyfmt "{team1} vs {team2}" -p team1=Hawks -p team2=Celtics
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// The format string.
    pub template: String,

    /// Positional arguments, referenced by `{}` or `{N}` fields.
    ///
    /// Values starting with `-`, such as negative numbers, are accepted
    /// unless they name a known flag.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub positional_arguments: Vec<String>,
}
