//! Running a parsed `pyfmt` invocation.

use itertools::Itertools;
use log::{debug, warn};
use pyformat_core::config::{self, VariablesSource};
use pyformat_core::error::Result;
use pyformat_core::file_handling::{self, Variables};
use pyformat_core::template::Template;

use crate::arguments::{build_arguments, merge_named_parameters, unused_named_keys};
use crate::cli_args::Args;

/// Loads the variables file selected by the arguments, if any.
fn load_variables(args: &Args) -> Result<Option<Variables>> {
    let source = config::get_variables_path(&args.variables_path);
    if args.no_default_vars && matches!(source, VariablesSource::Default(_)) {
        debug!("Skipping default variables file");
        return Ok(None);
    }

    file_handling::get_variables(&source)
}

/// Produces the text `pyfmt` prints for `args`.
///
/// This is either the rendered template or, with `--keys`, the template's
/// named keys one per line.
///
/// # Errors
///
/// Returns an error if the variables file or a named parameter is invalid,
/// or if rendering fails.
pub fn execute(args: &Args) -> Result<String> {
    let template = Template::parse(&args.template);
    let template_keys = template.keys();

    if args.keys {
        return Ok(template_keys.iter().join("\n"));
    }

    let variables = load_variables(args)?;
    let named = merge_named_parameters(variables, &args.parameters)?;
    debug!(
        "Rendering with {} positional and named [{}]",
        args.positional_arguments.len(),
        named.keys().join(", ")
    );

    // Names from the variables file are shared across templates, so only
    // command-line names are worth a warning.
    let parameter_keys: Vec<&str> = args
        .parameters
        .iter()
        .filter_map(|parameter| parameter.split_once('=').map(|(key, _)| key))
        .collect();
    for key in unused_named_keys(&template_keys, &named) {
        if parameter_keys.contains(&key) {
            warn!("Named parameter `{}` is not used by the template", key);
        }
    }

    let arguments = build_arguments(&args.positional_arguments, &named);
    Ok(template.render(&arguments)?)
}
