//! Convert command: rewrite identifiers in another case dialect.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use strucase_core::{Config, Converter, Dialect};
use tracing::{debug, instrument};

use super::{OptionArgs, collect_inputs};

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Identifiers to convert (one per line from stdin when omitted)
    pub inputs: Vec<String>,

    /// Dialect of the input [default: configured input_case]
    #[arg(short, long, value_enum)]
    pub from: Option<Dialect>,

    /// Dialect to produce [default: configured output_case]
    #[arg(short, long, value_enum)]
    pub to: Option<Dialect>,

    /// Print the intermediate words next to each result
    #[arg(long)]
    pub words: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Convert every input, stopping at the first failure.
#[instrument(name = "cmd_convert", skip_all, fields(inputs = args.inputs.len()))]
pub fn cmd_convert(args: ConvertArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let converter = Converter::new(
        args.from.unwrap_or(config.input_case),
        args.to.unwrap_or(config.output_case),
        args.options.resolve(config.options),
    );
    debug!(
        from = %converter.from,
        to = %converter.to,
        options = %converter.options,
        "executing convert command"
    );

    let inputs = collect_inputs(args.inputs, config.input_limit())?;
    let mut reports = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let report = converter
            .report(input)
            .with_context(|| format!("failed to convert \"{input}\""))?;
        reports.push(report);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if args.words {
                println!(
                    "{} {}",
                    report.output,
                    format!("[{}]", report.words.join(", ")).dimmed()
                );
            } else {
                println!("{}", report.output);
            }
        }
    }
    Ok(())
}
