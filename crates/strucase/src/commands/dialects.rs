//! Dialects command: list the supported case dialects.

use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use strucase_core::Dialect;
use tracing::instrument;

/// Arguments for the `dialects` subcommand.
#[derive(Args, Debug, Default)]
pub struct DialectsArgs {
    /// Include the `any` input dialect
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Serialize)]
struct DialectRow {
    name: &'static str,
    flag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    separator: Option<char>,
    underscore_prefix: bool,
    output: bool,
}

impl DialectRow {
    fn new(dialect: Dialect) -> Self {
        let descriptor = dialect.descriptor();
        Self {
            name: dialect.name(),
            flag: dialect
                .to_possible_value()
                .map(|value| value.get_name().to_string())
                .unwrap_or_default(),
            separator: descriptor.and_then(|d| d.separator),
            underscore_prefix: dialect.has_underscore_prefix(),
            output: descriptor.is_some(),
        }
    }
}

/// Print every dialect with the value accepted by `--from`/`--to`.
#[instrument(name = "cmd_dialects", skip_all)]
pub fn cmd_dialects(args: DialectsArgs, global_json: bool) -> anyhow::Result<()> {
    let mut rows: Vec<DialectRow> = Dialect::ALL.into_iter().map(DialectRow::new).collect();
    if args.all {
        rows.push(DialectRow::new(Dialect::Any));
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            let note = if row.output { "" } else { " (input only)" };
            println!("{:<28}{}{}", row.name.bold(), row.flag.cyan(), note.dimmed());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_carry_clap_names() {
        let row = DialectRow::new(Dialect::UnderscoreScreamingSnake);
        assert_eq!(row.name, "_SCREAMING_SNAKE_CASE");
        assert_eq!(row.flag, "underscore-screaming-snake");
        assert_eq!(row.separator, Some('_'));
        assert!(row.underscore_prefix);
    }

    #[test]
    fn any_is_input_only() {
        let row = DialectRow::new(Dialect::Any);
        assert!(!row.output);
        assert!(row.separator.is_none());
    }
}
