//! Core library for strucase.
//!
//! Validates, sanitizes and converts identifiers between case dialects
//! (`camelCase`, `snake_case`, `Train-Case`, ...), and builds CSS
//! `@font-face` rules whose keys go through the same engine.
//!
//! # Modules
//!
//! - [`case`] - Dialects, validation flags and the conversion pipeline
//! - [`css`] - `@font-face` rule builder
//! - [`config`] - Configuration loading and management
//! - [`error_mode`] - Ignore/warn/throw policy for lenient callers
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use strucase_core::{Dialect, ValidationOptions, convert_case};
//!
//! let out = convert_case(
//!     "XMLHttpRequest",
//!     Dialect::Any,
//!     Dialect::ScreamingSnake,
//!     ValidationOptions::VALIDATE,
//! )
//! .unwrap();
//! assert_eq!(out, "XML_HTTP_REQUEST");
//! ```
#![deny(unsafe_code)]

pub mod case;
pub mod config;
pub mod css;
pub mod error;
pub mod error_mode;

pub use case::{
    CaseCheck, Conversion, Converter, Dialect, ValidationOptions, convert_case, is_valid_case,
    render, sanitize, tokenize,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{CaseError, CaseResult, ConfigError, ConfigResult, CssError, CssResult};
pub use error_mode::ErrorMode;
