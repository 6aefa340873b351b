//! Case dialect engine.
//!
//! Converts identifiers between sixteen case dialects through a
//! dialect-neutral word sequence:
//!
//! 1. [`is_valid_case`] checks the input against its declared dialect.
//! 2. [`sanitize`] strips characters the dialect cannot hold.
//! 3. [`tokenize`] splits the cleaned input into lowercase words.
//! 4. [`render`] joins the words in the target dialect.
//! 5. The result is validated again unless `allow_invalid_result` is set.
//!
//! ```
//! use strucase_core::case::{Dialect, ValidationOptions, convert_case};
//!
//! let out = convert_case(
//!     "ab_cc_dd_ee",
//!     Dialect::Snake,
//!     Dialect::Camel,
//!     ValidationOptions::SANITIZE,
//! )
//! .unwrap();
//! assert_eq!(out, "abCcDdEe");
//! ```

mod dialect;
mod grammar;
mod options;
mod sanitize;
mod words;

pub use dialect::{Descriptor, Dialect, WordCase};
pub use grammar::is_valid_case;
pub use options::ValidationOptions;
pub use sanitize::sanitize;
pub use words::{render, tokenize};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CaseError, CaseResult};

/// Convert `input` from dialect `from` to dialect `to`.
///
/// Fails with [`CaseError::EmptyInput`] or [`CaseError::InvalidInput`] when
/// the input does not validate, [`CaseError::UnsupportedDialect`] when `to`
/// is [`Dialect::Any`], and [`CaseError::InvalidOutput`] when the result
/// does not validate for `to` (unless `allow_invalid_result` is set).
#[tracing::instrument(skip(options), fields(options = %options))]
pub fn convert_case(
    input: &str,
    from: Dialect,
    to: Dialect,
    options: ValidationOptions,
) -> CaseResult<String> {
    Ok(convert_words(input, from, to, options)?.1)
}

/// Run the pipeline, returning the intermediate words alongside the result.
fn convert_words(
    input: &str,
    from: Dialect,
    to: Dialect,
    options: ValidationOptions,
) -> CaseResult<(Vec<String>, String)> {
    if !is_valid_case(input, from, options) {
        if input.is_empty() {
            return Err(CaseError::EmptyInput { dialect: from });
        }
        return Err(CaseError::InvalidInput {
            input: input.to_owned(),
            dialect: from,
        });
    }
    let sanitized = sanitize(input, from, options);
    let words = tokenize(&sanitized, from);
    debug!(%sanitized, words = words.len(), "tokenized input");
    let output = render(&words, to)?;
    if !options.allow_invalid_result && !is_valid_case(&output, to, options) {
        return Err(CaseError::InvalidOutput { output, dialect: to });
    }
    Ok((words, output))
}

/// Result of a single conversion, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conversion {
    /// The input as given.
    pub input: String,
    /// The converted string.
    pub output: String,
    /// Canonical name of the input dialect.
    pub from: String,
    /// Canonical name of the output dialect.
    pub to: String,
    /// Intermediate word sequence.
    pub words: Vec<String>,
}

/// Result of checking one string against a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaseCheck {
    /// The input as given.
    pub input: String,
    /// Canonical name of the dialect checked against.
    pub dialect: String,
    /// Whether the input is valid.
    pub valid: bool,
}

/// A configured conversion: input dialect, output dialect and options.
///
/// The default converts from `any` to `camelCase` with `SANITIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    /// Dialect the input is expected in.
    pub from: Dialect,
    /// Dialect to render.
    pub to: Dialect,
    /// Flags for every stage.
    pub options: ValidationOptions,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            from: Dialect::Any,
            to: Dialect::Camel,
            options: ValidationOptions::SANITIZE,
        }
    }
}

impl Converter {
    /// Create a converter between two dialects.
    pub const fn new(from: Dialect, to: Dialect, options: ValidationOptions) -> Self {
        Self { from, to, options }
    }

    /// Convert a single string.
    pub fn convert(&self, input: &str) -> CaseResult<String> {
        convert_case(input, self.from, self.to, self.options)
    }

    /// Convert a single string, keeping the intermediate words.
    pub fn report(&self, input: &str) -> CaseResult<Conversion> {
        let (words, output) = convert_words(input, self.from, self.to, self.options)?;
        Ok(Conversion {
            input: input.to_owned(),
            output,
            from: self.from.name().to_owned(),
            to: self.to.name().to_owned(),
            words,
        })
    }

    /// Check a string against the input dialect.
    pub fn check(&self, input: &str) -> CaseCheck {
        CaseCheck {
            input: input.to_owned(),
            dialect: self.from.name().to_owned(),
            valid: is_valid_case(input, self.from, self.options),
        }
    }
}
