//! Error types for strucase-core.

use thiserror::Error;

use crate::case::Dialect;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// An error mode value that is none of ignore, warn or throw.
    #[error("invalid error mode: {0}. Use: ignore, warn, throw")]
    InvalidErrorMode(String),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by the case conversion engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// A dialect name that no table knows, or a dialect used where it has no meaning.
    #[error("unsupported case dialect: {name}")]
    UnsupportedDialect {
        /// The name that was requested.
        name: String,
    },

    /// The input is empty and `allow_empty` is not set.
    #[error("input string is empty and ALLOW_EMPTY is not set (expected {dialect})")]
    EmptyInput {
        /// The declared input dialect.
        dialect: Dialect,
    },

    /// The input does not match the grammar of its declared dialect.
    #[error("input string \"{input}\" is not valid for {dialect}")]
    InvalidInput {
        /// The offending input.
        input: String,
        /// The declared input dialect.
        dialect: Dialect,
    },

    /// The rendered result does not match the grammar of the output dialect.
    #[error("output string \"{output}\" is not valid for {dialect}")]
    InvalidOutput {
        /// The rendered string.
        output: String,
        /// The requested output dialect.
        dialect: Dialect,
    },

    /// A validation flag name that is not recognized.
    #[error("unknown validation option: {0}")]
    UnknownOption(String),
}

impl CaseError {
    /// Returns `true` for both flavours of rejected input (empty or mismatched).
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::InvalidInput { .. })
    }

    pub(crate) fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedDialect { name: name.into() }
    }
}

/// Result type alias using [`CaseError`].
pub type CaseResult<T> = Result<T, CaseError>;

/// Errors produced while building CSS.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    /// Neither an explicit `src` nor any font file was given.
    #[error("\"src\" and \"{filename_key}\" are both empty")]
    MissingSource {
        /// Key that was expected to hold the font file names.
        filename_key: String,
    },

    /// A descriptor that must be text received something else.
    #[error("{key} value must be a string")]
    NotAString {
        /// Descriptor key.
        key: String,
    },

    /// A descriptor that must be a single value received a list.
    #[error("{key} value must be scalar")]
    NotScalar {
        /// Descriptor key.
        key: String,
    },

    /// A font file name without an extension.
    #[error("the filename does not have an extension: {filename}")]
    MissingExtension {
        /// The file name as given.
        filename: String,
    },

    /// A font file extension outside the supported formats.
    #[error("invalid font file format: {format}. Allowed formats are: {allowed}")]
    UnsupportedFormat {
        /// Lowercased extension.
        format: String,
        /// Comma-separated list of accepted formats.
        allowed: String,
    },

    /// A key that does not normalize to a known `@font-face` descriptor.
    #[error("invalid @font-face descriptor: {key}")]
    InvalidDescriptor {
        /// The key as given.
        key: String,
    },

    /// The key could not be normalized.
    #[error(transparent)]
    Case(#[from] CaseError),
}

/// Result type alias using [`CssError`].
pub type CssResult<T> = Result<T, CssError>;
