//! Font-face command: render an `@font-face` rule.

use anyhow::{Context, anyhow};
use clap::Args;
use serde::Serialize;
use strucase_core::css::{FontFaceOptions, FontValue, font_face};
use strucase_core::{Config, ErrorMode};
use tracing::{debug, instrument};

const FILES_KEY: &str = "files";

/// Arguments for the `font-face` subcommand.
#[derive(Args, Debug, Default)]
pub struct FontFaceArgs {
    /// Font family name (quoted unless it is a CSS keyword)
    #[arg(long)]
    pub family: Option<String>,

    /// Font file; repeat for several formats
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Explicit src value; wins over --file
    #[arg(long)]
    pub src: Option<String>,

    /// Directory prepended to every font file
    #[arg(long, default_value = "")]
    pub path: String,

    /// Extra descriptor as KEY=VALUE (KEY in any case dialect)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_descriptor)]
    pub descriptors: Vec<(String, String)>,

    /// Indent and break lines
    #[arg(long)]
    pub pretty: bool,

    /// How unknown descriptor keys are handled [default: configured error_mode]
    #[arg(long, value_enum)]
    pub error_mode: Option<ErrorMode>,
}

fn parse_descriptor(raw: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got \"{raw}\""))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

#[derive(Debug, Serialize)]
struct Rendered {
    rule: String,
}

/// Render the rule from the given family, files and descriptors.
#[instrument(name = "cmd_font_face", skip_all)]
pub fn cmd_font_face(args: FontFaceArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = FontFaceOptions {
        filename_key: FILES_KEY.to_string(),
        path: args.path,
        with_space: args.pretty,
        error_mode: args.error_mode.unwrap_or(config.error_mode),
    };
    debug!(files = args.files.len(), descriptors = args.descriptors.len(), "executing font-face command");

    let mut descriptors: Vec<(String, FontValue)> = Vec::new();
    if let Some(family) = args.family {
        descriptors.push(("font-family".to_string(), FontValue::Text(family)));
    }
    if let Some(src) = args.src {
        descriptors.push(("src".to_string(), FontValue::Text(src)));
    }
    descriptors.push((FILES_KEY.to_string(), FontValue::Files(args.files)));
    descriptors.extend(
        args.descriptors
            .into_iter()
            .map(|(key, value)| (key, FontValue::Text(value))),
    );

    let rule = font_face(&descriptors, &options).context("failed to build @font-face rule")?;
    if global_json {
        println!("{}", serde_json::to_string_pretty(&Rendered { rule })?);
    } else {
        println!("{rule}");
    }
    Ok(())
}
