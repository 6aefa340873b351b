//! Check command: validate identifiers against a dialect.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use strucase_core::{CaseCheck, Config, Converter, Dialect};
use tracing::{debug, instrument};

use super::{OptionArgs, collect_inputs};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifiers to check (one per line from stdin when omitted)
    pub inputs: Vec<String>,

    /// Dialect to check against [default: configured input_case]
    #[arg(long = "case", value_enum)]
    pub dialect: Option<Dialect>,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Check every input and fail if any is invalid.
///
/// Structural validation only happens with the `validate` flag, so without
/// it every non-empty input passes.
#[instrument(name = "cmd_check", skip_all, fields(inputs = args.inputs.len()))]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let dialect = args.dialect.unwrap_or(config.input_case);
    let options = args.options.resolve(config.options);
    debug!(%dialect, %options, "executing check command");

    let checker = Converter::new(dialect, config.output_case, options);
    let inputs = collect_inputs(args.inputs, config.input_limit())?;
    let checks: Vec<CaseCheck> = inputs.iter().map(|input| checker.check(input)).collect();
    let invalid = checks.iter().filter(|check| !check.valid).count();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        for check in &checks {
            if check.valid {
                println!("{} {}", "PASS:".green(), check.input);
            } else {
                println!("{} {}", "FAIL:".red(), check.input);
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} inputs are not valid {dialect}", checks.len());
    }
    Ok(())
}
