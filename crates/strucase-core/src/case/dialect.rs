//! Case dialects and their descriptor table.
//!
//! Every rendering dialect is described by a [`Descriptor`]: the separator
//! between words, how each word is cased, and whether a single leading `_`
//! is mandatory. Validation, sanitization, tokenization and rendering all
//! read this table instead of matching on the dialect themselves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaseError, CaseResult};

/// How the letters of a single word are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    /// `word`
    Lower,
    /// `WORD`
    Upper,
    /// `Word`
    Capitalized,
}

impl WordCase {
    /// Apply this casing to a word.
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Lower => word.to_ascii_lowercase(),
            Self::Upper => word.to_ascii_uppercase(),
            Self::Capitalized => {
                let lower = word.to_ascii_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Structural description of a rendering dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Character between words; `None` means words are delimited by an uppercase letter.
    pub separator: Option<char>,
    /// Casing of every word after the first.
    pub word_case: WordCase,
    /// Casing of the first word.
    pub first_word_case: WordCase,
    /// Whether exactly one leading `_` is part of the dialect.
    pub underscore_prefix: bool,
}

impl Descriptor {
    const fn new(separator: Option<char>, word_case: WordCase, first_word_case: WordCase) -> Self {
        Self {
            separator,
            word_case,
            first_word_case,
            underscore_prefix: false,
        }
    }

    const fn prefixed(self) -> Self {
        Self {
            underscore_prefix: true,
            ..self
        }
    }
}

const CAMEL: Descriptor = Descriptor::new(None, WordCase::Capitalized, WordCase::Lower);
const PASCAL: Descriptor = Descriptor::new(None, WordCase::Capitalized, WordCase::Capitalized);
const SNAKE: Descriptor = Descriptor::new(Some('_'), WordCase::Lower, WordCase::Lower);
const TITLE: Descriptor =
    Descriptor::new(Some('_'), WordCase::Capitalized, WordCase::Capitalized);
const SCREAMING_SNAKE: Descriptor = Descriptor::new(Some('_'), WordCase::Upper, WordCase::Upper);
const KEBAB: Descriptor = Descriptor::new(Some('-'), WordCase::Lower, WordCase::Lower);
const TRAIN: Descriptor = Descriptor::new(Some('-'), WordCase::Capitalized, WordCase::Capitalized);
const SCREAMING_KEBAB: Descriptor = Descriptor::new(Some('-'), WordCase::Upper, WordCase::Upper);

/// A named case-formatting convention.
///
/// Sixteen rendering dialects (eight base forms, each optionally prefixed
/// with a mandatory `_`) plus [`Dialect::Any`], which is only accepted as an
/// input dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Dialect {
    /// `camelCase`
    #[serde(rename = "camelCase", alias = "camel")]
    #[cfg_attr(feature = "clap", value(name = "camel", alias = "camelCase"))]
    Camel,
    /// `PascalCase`
    #[serde(rename = "PascalCase", alias = "pascal")]
    #[cfg_attr(feature = "clap", value(name = "pascal", alias = "PascalCase"))]
    Pascal,
    /// `snake_case`
    #[serde(rename = "snake_case", alias = "snake")]
    #[cfg_attr(feature = "clap", value(name = "snake", alias = "snake_case"))]
    Snake,
    /// `Title_Case`
    #[serde(rename = "Title_Case", alias = "title")]
    #[cfg_attr(feature = "clap", value(name = "title", alias = "Title_Case"))]
    Title,
    /// `SCREAMING_SNAKE_CASE`
    #[serde(rename = "SCREAMING_SNAKE_CASE", alias = "screaming-snake")]
    #[cfg_attr(
        feature = "clap",
        value(name = "screaming-snake", alias = "SCREAMING_SNAKE_CASE")
    )]
    ScreamingSnake,
    /// `kebab-case`
    #[serde(rename = "kebab-case", alias = "kebab")]
    #[cfg_attr(feature = "clap", value(name = "kebab", alias = "kebab-case"))]
    Kebab,
    /// `Train-Case`
    #[serde(rename = "Train-Case", alias = "train")]
    #[cfg_attr(feature = "clap", value(name = "train", alias = "Train-Case"))]
    Train,
    /// `SCREAMING-KEBAB-CASE`
    #[serde(rename = "SCREAMING-KEBAB-CASE", alias = "screaming-kebab")]
    #[cfg_attr(
        feature = "clap",
        value(name = "screaming-kebab", alias = "SCREAMING-KEBAB-CASE")
    )]
    ScreamingKebab,
    /// `_camelCase`
    #[serde(rename = "_camelCase", alias = "underscore-camel")]
    #[cfg_attr(feature = "clap", value(name = "underscore-camel", alias = "_camelCase"))]
    UnderscoreCamel,
    /// `_PascalCase`
    #[serde(rename = "_PascalCase", alias = "underscore-pascal")]
    #[cfg_attr(feature = "clap", value(name = "underscore-pascal", alias = "_PascalCase"))]
    UnderscorePascal,
    /// `_snake_case`
    #[serde(rename = "_snake_case", alias = "underscore-snake")]
    #[cfg_attr(feature = "clap", value(name = "underscore-snake", alias = "_snake_case"))]
    UnderscoreSnake,
    /// `_Title_Case`
    #[serde(rename = "_Title_Case", alias = "underscore-title")]
    #[cfg_attr(feature = "clap", value(name = "underscore-title", alias = "_Title_Case"))]
    UnderscoreTitle,
    /// `_SCREAMING_SNAKE_CASE`
    #[serde(rename = "_SCREAMING_SNAKE_CASE", alias = "underscore-screaming-snake")]
    #[cfg_attr(
        feature = "clap",
        value(name = "underscore-screaming-snake", alias = "_SCREAMING_SNAKE_CASE")
    )]
    UnderscoreScreamingSnake,
    /// `_kebab-case`
    #[serde(rename = "_kebab-case", alias = "underscore-kebab")]
    #[cfg_attr(feature = "clap", value(name = "underscore-kebab", alias = "_kebab-case"))]
    UnderscoreKebab,
    /// `_Train-Case`
    #[serde(rename = "_Train-Case", alias = "underscore-train")]
    #[cfg_attr(feature = "clap", value(name = "underscore-train", alias = "_Train-Case"))]
    UnderscoreTrain,
    /// `_SCREAMING-KEBAB-CASE`
    #[serde(rename = "_SCREAMING-KEBAB-CASE", alias = "underscore-screaming-kebab")]
    #[cfg_attr(
        feature = "clap",
        value(name = "underscore-screaming-kebab", alias = "_SCREAMING-KEBAB-CASE")
    )]
    UnderscoreScreamingKebab,
    /// Flexible input dialect: words split at `_`, `-` and case changes.
    #[serde(rename = "any")]
    #[cfg_attr(feature = "clap", value(name = "any"))]
    Any,
}

impl Dialect {
    /// The sixteen rendering dialects, plain forms first.
    pub const ALL: [Self; 16] = [
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Title,
        Self::ScreamingSnake,
        Self::Kebab,
        Self::Train,
        Self::ScreamingKebab,
        Self::UnderscoreCamel,
        Self::UnderscorePascal,
        Self::UnderscoreSnake,
        Self::UnderscoreTitle,
        Self::UnderscoreScreamingSnake,
        Self::UnderscoreKebab,
        Self::UnderscoreTrain,
        Self::UnderscoreScreamingKebab,
    ];

    /// Canonical name, which doubles as a sample of the dialect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Title => "Title_Case",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Self::Kebab => "kebab-case",
            Self::Train => "Train-Case",
            Self::ScreamingKebab => "SCREAMING-KEBAB-CASE",
            Self::UnderscoreCamel => "_camelCase",
            Self::UnderscorePascal => "_PascalCase",
            Self::UnderscoreSnake => "_snake_case",
            Self::UnderscoreTitle => "_Title_Case",
            Self::UnderscoreScreamingSnake => "_SCREAMING_SNAKE_CASE",
            Self::UnderscoreKebab => "_kebab-case",
            Self::UnderscoreTrain => "_Train-Case",
            Self::UnderscoreScreamingKebab => "_SCREAMING-KEBAB-CASE",
            Self::Any => "any",
        }
    }

    /// Descriptor for rendering dialects; `None` for [`Dialect::Any`].
    pub const fn descriptor(self) -> Option<Descriptor> {
        let descriptor = match self {
            Self::Camel => CAMEL,
            Self::Pascal => PASCAL,
            Self::Snake => SNAKE,
            Self::Title => TITLE,
            Self::ScreamingSnake => SCREAMING_SNAKE,
            Self::Kebab => KEBAB,
            Self::Train => TRAIN,
            Self::ScreamingKebab => SCREAMING_KEBAB,
            Self::UnderscoreCamel => CAMEL.prefixed(),
            Self::UnderscorePascal => PASCAL.prefixed(),
            Self::UnderscoreSnake => SNAKE.prefixed(),
            Self::UnderscoreTitle => TITLE.prefixed(),
            Self::UnderscoreScreamingSnake => SCREAMING_SNAKE.prefixed(),
            Self::UnderscoreKebab => KEBAB.prefixed(),
            Self::UnderscoreTrain => TRAIN.prefixed(),
            Self::UnderscoreScreamingKebab => SCREAMING_KEBAB.prefixed(),
            Self::Any => return None,
        };
        Some(descriptor)
    }

    /// Whether a single leading `_` is mandatory.
    pub const fn has_underscore_prefix(self) -> bool {
        match self.descriptor() {
            Some(descriptor) => descriptor.underscore_prefix,
            None => false,
        }
    }

    /// Separator characters that survive sanitization.
    pub(crate) const fn separators(self) -> &'static [char] {
        match self.descriptor() {
            None => &['_', '-'],
            Some(Descriptor {
                separator: Some('_'),
                ..
            }) => &['_'],
            Some(Descriptor {
                separator: Some(_), ..
            }) => &['-'],
            Some(Descriptor {
                separator: None, ..
            }) => &[],
        }
    }

    /// Remove the mandatory prefix, if this dialect has one and it is present.
    pub(crate) fn strip_prefix(self, input: &str) -> &str {
        if self.has_underscore_prefix() {
            input.strip_prefix('_').unwrap_or(input)
        } else {
            input
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a dialect by canonical name (`snake_case`) or short alias (`snake`).
///
/// This is the only dynamic entry point into the dialect table, and so the
/// only place [`CaseError::UnsupportedDialect`] originates for unknown names.
impl FromStr for Dialect {
    type Err = CaseError;

    fn from_str(s: &str) -> CaseResult<Self> {
        if s == Self::Any.name() {
            return Ok(Self::Any);
        }
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s || short_name(*dialect) == s)
            .ok_or_else(|| CaseError::unsupported(s))
    }
}

fn short_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Camel => "camel",
        Dialect::Pascal => "pascal",
        Dialect::Snake => "snake",
        Dialect::Title => "title",
        Dialect::ScreamingSnake => "screaming-snake",
        Dialect::Kebab => "kebab",
        Dialect::Train => "train",
        Dialect::ScreamingKebab => "screaming-kebab",
        Dialect::UnderscoreCamel => "underscore-camel",
        Dialect::UnderscorePascal => "underscore-pascal",
        Dialect::UnderscoreSnake => "underscore-snake",
        Dialect::UnderscoreTitle => "underscore-title",
        Dialect::UnderscoreScreamingSnake => "underscore-screaming-snake",
        Dialect::UnderscoreKebab => "underscore-kebab",
        Dialect::UnderscoreTrain => "underscore-train",
        Dialect::UnderscoreScreamingKebab => "underscore-screaming-kebab",
        Dialect::Any => "any",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_short_names() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
            assert_eq!(short_name(dialect).parse::<Dialect>().unwrap(), dialect);
        }
        assert_eq!("any".parse::<Dialect>().unwrap(), Dialect::Any);
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "sPoNgE-case".parse::<Dialect>().unwrap_err();
        assert_eq!(
            err,
            CaseError::UnsupportedDialect {
                name: "sPoNgE-case".to_string()
            }
        );
    }

    #[test]
    fn any_has_no_descriptor() {
        assert!(Dialect::Any.descriptor().is_none());
        assert_eq!(Dialect::Any.separators(), &['_', '-']);
    }

    #[test]
    fn prefixed_variants_share_base_shape() {
        let plain = Dialect::Train.descriptor().unwrap();
        let prefixed = Dialect::UnderscoreTrain.descriptor().unwrap();
        assert!(!plain.underscore_prefix);
        assert!(prefixed.underscore_prefix);
        assert_eq!(plain.separator, prefixed.separator);
        assert_eq!(plain.word_case, prefixed.word_case);
    }

    #[test]
    fn separators_follow_descriptor() {
        assert!(Dialect::Camel.separators().is_empty());
        assert_eq!(Dialect::UnderscoreSnake.separators(), &['_']);
        assert_eq!(Dialect::ScreamingKebab.separators(), &['-']);
    }

    #[test]
    fn strip_prefix_removes_exactly_one_underscore() {
        assert_eq!(Dialect::UnderscoreSnake.strip_prefix("__a"), "_a");
        assert_eq!(Dialect::UnderscoreSnake.strip_prefix("a"), "a");
        assert_eq!(Dialect::Snake.strip_prefix("_a"), "_a");
    }

    #[test]
    fn word_case_apply() {
        assert_eq!(WordCase::Lower.apply("MiXed"), "mixed");
        assert_eq!(WordCase::Upper.apply("MiXed"), "MIXED");
        assert_eq!(WordCase::Capitalized.apply("miXED"), "Mixed");
        assert_eq!(WordCase::Capitalized.apply(""), "");
        assert_eq!(WordCase::Capitalized.apply("2nd"), "2nd");
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Dialect::UnderscoreScreamingKebab).unwrap();
        assert_eq!(json, "\"_SCREAMING-KEBAB-CASE\"");
        let parsed: Dialect = serde_json::from_str("\"kebab\"").unwrap();
        assert_eq!(parsed, Dialect::Kebab);
    }
}
