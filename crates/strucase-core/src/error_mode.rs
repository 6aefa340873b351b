//! Per-call error propagation policy.
//!
//! Fallible builders take an explicit [`ErrorMode`] instead of consulting
//! global state: `ignore` swallows the error and returns a caller-supplied
//! default, `warn` does the same but emits a `tracing` warning, `throw`
//! propagates. Errors that signal a programming mistake (see
//! [`RecoverableError`]) propagate in every mode.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaseError, ConfigError, CssError};

/// How a recoverable error is handled.
///
/// Deserializes from a name (`ignore`, `warn`, `throw`, plus the aliases
/// `warning` and `exception`) or from the numeric codes `0`, `1`, `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "RawErrorMode")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ErrorMode {
    /// Return the default silently.
    Ignore,
    /// Log a warning and return the default.
    Warn,
    /// Propagate the error.
    #[default]
    Throw,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawErrorMode {
    Code(i64),
    Name(String),
}

impl TryFrom<RawErrorMode> for ErrorMode {
    type Error = ConfigError;

    fn try_from(raw: RawErrorMode) -> Result<Self, ConfigError> {
        match raw {
            RawErrorMode::Code(code) => Self::try_from(code),
            RawErrorMode::Name(name) => name.parse(),
        }
    }
}

/// Errors that may be downgraded by [`ErrorMode::Ignore`] and [`ErrorMode::Warn`].
pub trait RecoverableError: std::error::Error {
    /// `false` for errors that must always reach the caller.
    fn is_recoverable(&self) -> bool {
        true
    }
}

impl RecoverableError for CaseError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, Self::UnsupportedDialect { .. })
    }
}

impl RecoverableError for CssError {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Case(inner) => inner.is_recoverable(),
            _ => true,
        }
    }
}

impl ErrorMode {
    /// Returns the mode as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }

    /// Apply this mode to a result.
    ///
    /// On error, `Ignore` and `Warn` return `default`; `Warn` first logs the
    /// error, prefixed with `context` when given. `Throw` and
    /// non-recoverable errors return the error unchanged.
    pub fn handle<T, E>(self, result: Result<T, E>, default: T, context: Option<&str>) -> Result<T, E>
    where
        E: RecoverableError,
    {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !err.is_recoverable() {
            return Err(err);
        }
        match self {
            Self::Ignore => Ok(default),
            Self::Warn => {
                match context {
                    Some(context) => tracing::warn!("{context}: {err}"),
                    None => tracing::warn!("{err}"),
                }
                Ok(default)
            }
            Self::Throw => Err(err),
        }
    }
}

impl std::fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode the numeric codes `0` (ignore), `1` (warn) and `2` (throw).
impl TryFrom<i64> for ErrorMode {
    type Error = ConfigError;

    fn try_from(code: i64) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Self::Ignore),
            1 => Ok(Self::Warn),
            2 => Ok(Self::Throw),
            other => Err(ConfigError::InvalidErrorMode(other.to_string())),
        }
    }
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" | "warning" => Ok(Self::Warn),
            "throw" | "exception" => Ok(Self::Throw),
            other => match other.parse::<i64>() {
                Ok(code) => Self::try_from(code),
                Err(_) => Err(ConfigError::InvalidErrorMode(s.to_string())),
            },
        }
    }
}
