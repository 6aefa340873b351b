//! Command implementations.

use std::io::{IsTerminal, Read};

use anyhow::{Context, bail};
use clap::Args;
use strucase_core::ValidationOptions;

pub mod check;
pub mod convert;
pub mod dialects;
pub mod font_face;
pub mod font_key;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod tokenize;

/// Validation flags shared by the case commands.
///
/// When no flag is given the configured `options` table applies; any flag
/// replaces it entirely.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Strip characters the dialect cannot hold before tokenizing
    #[arg(long)]
    pub sanitize: bool,

    /// Check the input (and output) against the dialect grammar
    #[arg(long)]
    pub validate: bool,

    /// Digits count as both lowercase and uppercase
    #[arg(long)]
    pub accept_digits: bool,

    /// Digits count as uppercase
    #[arg(long)]
    pub accept_digits_upper: bool,

    /// Digits count as lowercase
    #[arg(long)]
    pub accept_digits_lower: bool,

    /// Reject (or strip, with --sanitize) a leading digit
    #[arg(long)]
    pub no_leading_digits: bool,

    /// Permit empty words between separators
    #[arg(long)]
    pub allow_empty_words: bool,

    /// Accept the empty string
    #[arg(long)]
    pub allow_empty: bool,

    /// Do not validate the converted output
    #[arg(long)]
    pub allow_invalid_result: bool,

    /// Flag list, e.g. "VALIDATE|ACCEPT_DIGITS"
    #[arg(long, value_name = "FLAGS")]
    pub options: Option<ValidationOptions>,
}

impl OptionArgs {
    /// Combine the given flags, or fall back to `configured` when none are set.
    pub fn resolve(&self, configured: ValidationOptions) -> ValidationOptions {
        let switches = [
            (self.sanitize, ValidationOptions::SANITIZE),
            (self.validate, ValidationOptions::VALIDATE),
            (self.accept_digits, ValidationOptions::ACCEPT_DIGITS),
            (self.accept_digits_upper, ValidationOptions::ACCEPT_DIGITS_UPPER),
            (self.accept_digits_lower, ValidationOptions::ACCEPT_DIGITS_LOWER),
            (self.no_leading_digits, ValidationOptions::NO_LEADING_DIGITS),
            (self.allow_empty_words, ValidationOptions::ALLOW_EMPTY_WORDS),
            (self.allow_empty, ValidationOptions::ALLOW_EMPTY),
            (self.allow_invalid_result, ValidationOptions::ALLOW_INVALID_RESULT),
        ];
        let any_switch = switches.iter().any(|(set, _)| *set);
        if !any_switch && self.options.is_none() {
            return configured;
        }
        switches
            .into_iter()
            .filter(|(set, _)| *set)
            .fold(self.options.unwrap_or_default(), |acc, (_, flag)| acc | flag)
    }
}

/// Use the positional inputs, or read one input per line from stdin.
///
/// Inputs are checked against the configured size limit.
pub fn collect_inputs(args: Vec<String>, max_bytes: Option<usize>) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        if let Some(max) = max_bytes
            && let Some(big) = args.iter().find(|input| input.len() > max)
        {
            bail!(
                "input too large: {} bytes (limit: {max} bytes)",
                big.len()
            );
        }
        return Ok(args);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no input: pass identifiers as arguments or pipe them on stdin");
    }
    let buffer = read_limited(stdin.lock(), max_bytes)?;
    Ok(buffer.lines().map(str::to_owned).collect())
}

/// Read `reader` to the end, failing once it yields more than `max_bytes`.
fn read_limited<R: Read>(mut reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buffer = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.len() > max {
                bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
        }
    }
    Ok(buffer)
}
