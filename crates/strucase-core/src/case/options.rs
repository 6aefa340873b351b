//! Composable validation flags.

use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CaseError, CaseResult};

/// Independent flags steering validation, sanitization and output checks.
///
/// Flags combine freely with `|`. Two of them are shorthands that imply
/// others: [`ValidationOptions::ACCEPT_DIGITS`] sets both digit flags, and
/// `allow_empty` implies `allow_empty_words` (see
/// [`ValidationOptions::allows_empty_words`]).
///
/// ```
/// use strucase_core::case::ValidationOptions;
///
/// let opts = ValidationOptions::VALIDATE | ValidationOptions::ACCEPT_DIGITS;
/// assert!(opts.accept_digits_lower && opts.accept_digits_upper);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ValidationOptions {
    /// Strip characters that are invalid for the dialect before tokenizing.
    pub sanitize: bool,
    /// Run structural validation; otherwise any non-empty string passes.
    pub validate: bool,
    /// Digits count as uppercase characters.
    pub accept_digits_upper: bool,
    /// Digits count as lowercase characters.
    pub accept_digits_lower: bool,
    /// Reject (or strip, when sanitizing) a leading digit.
    pub no_leading_digits: bool,
    /// Permit zero-length words between separators.
    pub allow_empty_words: bool,
    /// The empty string itself is valid. Implies `allow_empty_words`.
    pub allow_empty: bool,
    /// Skip validation of the rendered result.
    pub allow_invalid_result: bool,
}

impl ValidationOptions {
    /// No flags: nothing is validated or sanitized.
    pub const NONE: Self = Self {
        sanitize: false,
        validate: false,
        accept_digits_upper: false,
        accept_digits_lower: false,
        no_leading_digits: false,
        allow_empty_words: false,
        allow_empty: false,
        allow_invalid_result: false,
    };
    /// See [`ValidationOptions::sanitize`].
    pub const SANITIZE: Self = Self {
        sanitize: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::validate`].
    pub const VALIDATE: Self = Self {
        validate: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::accept_digits_upper`].
    pub const ACCEPT_DIGITS_UPPER: Self = Self {
        accept_digits_upper: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::accept_digits_lower`].
    pub const ACCEPT_DIGITS_LOWER: Self = Self {
        accept_digits_lower: true,
        ..Self::NONE
    };
    /// Both digit flags.
    pub const ACCEPT_DIGITS: Self = Self {
        accept_digits_upper: true,
        accept_digits_lower: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::no_leading_digits`].
    pub const NO_LEADING_DIGITS: Self = Self {
        no_leading_digits: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::allow_empty_words`].
    pub const ALLOW_EMPTY_WORDS: Self = Self {
        allow_empty_words: true,
        ..Self::NONE
    };
    /// Empty input is valid; empty words are allowed too.
    pub const ALLOW_EMPTY: Self = Self {
        allow_empty: true,
        allow_empty_words: true,
        ..Self::NONE
    };
    /// See [`ValidationOptions::allow_invalid_result`].
    pub const ALLOW_INVALID_RESULT: Self = Self {
        allow_invalid_result: true,
        ..Self::NONE
    };

    /// Flag names accepted by [`FromStr`], paired with their values.
    pub const NAMED: [(&'static str, Self); 10] = [
        ("SANITIZE", Self::SANITIZE),
        ("VALIDATE", Self::VALIDATE),
        ("ACCEPT_DIGITS_UPPER", Self::ACCEPT_DIGITS_UPPER),
        ("ACCEPT_DIGITS_LOWER", Self::ACCEPT_DIGITS_LOWER),
        ("ACCEPT_DIGITS", Self::ACCEPT_DIGITS),
        ("NO_LEADING_DIGITS", Self::NO_LEADING_DIGITS),
        ("ALLOW_EMPTY_WORDS", Self::ALLOW_EMPTY_WORDS),
        ("ALLOW_EMPTY", Self::ALLOW_EMPTY),
        ("ALLOW_INVALID_RESULT", Self::ALLOW_INVALID_RESULT),
        ("NONE", Self::NONE),
    ];

    /// Set every flag that is set in either operand.
    pub const fn union(self, other: Self) -> Self {
        Self {
            sanitize: self.sanitize || other.sanitize,
            validate: self.validate || other.validate,
            accept_digits_upper: self.accept_digits_upper || other.accept_digits_upper,
            accept_digits_lower: self.accept_digits_lower || other.accept_digits_lower,
            no_leading_digits: self.no_leading_digits || other.no_leading_digits,
            allow_empty_words: self.allow_empty_words || other.allow_empty_words,
            allow_empty: self.allow_empty || other.allow_empty,
            allow_invalid_result: self.allow_invalid_result || other.allow_invalid_result,
        }
    }

    /// Whether zero-length words are permitted, honouring `allow_empty`.
    pub const fn allows_empty_words(&self) -> bool {
        self.allow_empty_words || self.allow_empty
    }

    /// Names of the flags that are set, in canonical order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for (name, value) in [
            ("SANITIZE", self.sanitize),
            ("VALIDATE", self.validate),
            ("ACCEPT_DIGITS_UPPER", self.accept_digits_upper),
            ("ACCEPT_DIGITS_LOWER", self.accept_digits_lower),
            ("NO_LEADING_DIGITS", self.no_leading_digits),
            ("ALLOW_EMPTY_WORDS", self.allow_empty_words),
            ("ALLOW_EMPTY", self.allow_empty),
            ("ALLOW_INVALID_RESULT", self.allow_invalid_result),
        ] {
            if value {
                names.push(name);
            }
        }
        names
    }
}

impl BitOr for ValidationOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ValidationOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl std::fmt::Display for ValidationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            f.write_str("NONE")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}

/// Parse a `|`, `,` or whitespace separated list of flag names.
///
/// Names may be written in any dialect (`ACCEPT_DIGITS`, `accept-digits`,
/// `acceptDigits`); they are normalized to `SCREAMING_SNAKE_CASE` by the
/// engine itself. The short suffixes `_UC` and `_LC` of the digit flags are
/// accepted as well.
impl FromStr for ValidationOptions {
    type Err = CaseError;

    fn from_str(s: &str) -> CaseResult<Self> {
        let mut options = Self::NONE;
        for raw in s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
        {
            let name = super::convert_case(
                raw,
                super::Dialect::Any,
                super::Dialect::ScreamingSnake,
                Self::SANITIZE,
            )
            .map_err(|_| CaseError::UnknownOption(raw.to_string()))?;
            let name = match name.as_str() {
                "ACCEPT_DIGITS_UC" => "ACCEPT_DIGITS_UPPER",
                "ACCEPT_DIGITS_LC" => "ACCEPT_DIGITS_LOWER",
                "DO_NOT_VALIDATE" => "NONE",
                other => other,
            };
            let (_, flag) = Self::NAMED
                .iter()
                .find(|(known, _)| *known == name)
                .ok_or_else(|| CaseError::UnknownOption(raw.to_string()))?;
            options |= *flag;
        }
        Ok(options)
    }
}
