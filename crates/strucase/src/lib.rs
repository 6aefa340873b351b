//! Library interface for the `strucase` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                   Log filter (e.g., debug, strucase=trace)
    STRUCASE_LOG_DIR           Directory for JSON log files
    STRUCASE_INPUT_CASE        Default input dialect (e.g., any, snake)
    STRUCASE_OUTPUT_CASE       Default output dialect (e.g., camel, kebab)
    STRUCASE_OPTIONS__<FLAG>   Default validation flag (e.g., STRUCASE_OPTIONS__VALIDATE=true)
    STRUCASE_ERROR_MODE        ignore, warn or throw
";

/// Command-line interface definition for strucase.
#[derive(Parser)]
#[command(name = "strucase")]
#[command(about = "Validate, sanitize and convert identifiers between case dialects", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the user config file (`~/.config/strucase/config.*`)
    #[arg(long, global = true)]
    pub no_user_config: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert identifiers from one case dialect to another
    Convert(commands::convert::ConvertArgs),

    /// Check identifiers against a case dialect
    Check(commands::check::CheckArgs),

    /// Split an identifier into words
    Tokenize(commands::tokenize::TokenizeArgs),

    /// List the supported case dialects
    Dialects(commands::dialects::DialectsArgs),

    /// Normalize keys to @font-face descriptors
    FontKey(commands::font_key::FontKeyArgs),

    /// Render an @font-face rule
    FontFace(commands::font_face::FontFaceArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
