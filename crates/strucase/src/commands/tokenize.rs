//! Tokenize command: show the word sequence of an identifier.

use clap::Args;
use serde::Serialize;
use strucase_core::{Config, Dialect, sanitize, tokenize};
use tracing::{debug, instrument};

use super::{OptionArgs, collect_inputs};

/// Arguments for the `tokenize` subcommand.
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Identifiers to split (one per line from stdin when omitted)
    pub inputs: Vec<String>,

    /// Dialect of the input [default: configured input_case]
    #[arg(long = "case", value_enum)]
    pub dialect: Option<Dialect>,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Debug, Serialize)]
struct Tokens {
    input: String,
    sanitized: String,
    words: Vec<String>,
}

/// Sanitize (when enabled) and split each input into lowercase words.
#[instrument(name = "cmd_tokenize", skip_all, fields(inputs = args.inputs.len()))]
pub fn cmd_tokenize(args: TokenizeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let dialect = args.dialect.unwrap_or(config.input_case);
    let options = args.options.resolve(config.options);
    debug!(%dialect, %options, "executing tokenize command");

    let inputs = collect_inputs(args.inputs, config.input_limit())?;
    let results: Vec<Tokens> = inputs
        .into_iter()
        .map(|input| {
            let sanitized = sanitize(&input, dialect, options);
            let words = tokenize(&sanitized, dialect);
            Tokens {
                input,
                sanitized,
                words,
            }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}", result.words.join(" "));
        }
    }
    Ok(())
}
