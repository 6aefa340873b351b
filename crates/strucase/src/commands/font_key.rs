//! Font-key command: normalize keys to `@font-face` descriptors.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use strucase_core::css::validate_font_key;
use strucase_core::{Config, ErrorMode};
use tracing::{debug, instrument};

use super::collect_inputs;

/// Arguments for the `font-key` subcommand.
#[derive(Args, Debug)]
pub struct FontKeyArgs {
    /// Keys in any case dialect (one per line from stdin when omitted)
    pub keys: Vec<String>,

    /// How unknown keys are handled [default: configured error_mode]
    #[arg(long, value_enum)]
    pub error_mode: Option<ErrorMode>,
}

#[derive(Debug, Serialize)]
struct FontKey {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<String>,
}

/// Print the descriptor for each key; dropped keys print nothing.
#[instrument(name = "cmd_font_key", skip_all, fields(keys = args.keys.len()))]
pub fn cmd_font_key(args: FontKeyArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let mode = args.error_mode.unwrap_or(config.error_mode);
    debug!(%mode, "executing font-key command");

    let keys = collect_inputs(args.keys, config.input_limit())?;
    let mut results = Vec::with_capacity(keys.len());
    for key in keys {
        let descriptor = validate_font_key(&key, mode)
            .with_context(|| format!("\"{key}\" is not a @font-face descriptor"))?;
        results.push(FontKey {
            key,
            descriptor: Some(descriptor).filter(|d| !d.is_empty()),
        });
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match result.descriptor {
                Some(ref descriptor) => println!("{descriptor}"),
                None => println!("{} {}", "dropped:".yellow(), result.key.dimmed()),
            }
        }
    }
    Ok(())
}
