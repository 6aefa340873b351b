//! Structural validation of strings against dialect grammars.
//!
//! One routine turns a dialect descriptor plus the active character classes
//! into a regular expression. Every combination of dialect shape, digit
//! flags and empty-word permission is compiled once, on first use.

use std::sync::LazyLock;

use regex::Regex;

use super::dialect::{Descriptor, Dialect, WordCase};
use super::options::ValidationOptions;

/// Character classes derived from the digit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CharClasses {
    pub(crate) digits_lower: bool,
    pub(crate) digits_upper: bool,
}

impl CharClasses {
    pub(crate) const fn from_options(options: &ValidationOptions) -> Self {
        Self {
            digits_lower: options.accept_digits_lower,
            digits_upper: options.accept_digits_upper,
        }
    }

    pub(crate) const fn is_lower(self, c: char) -> bool {
        c.is_ascii_lowercase() || (self.digits_lower && c.is_ascii_digit())
    }

    pub(crate) const fn is_upper(self, c: char) -> bool {
        c.is_ascii_uppercase() || (self.digits_upper && c.is_ascii_digit())
    }

    const fn lower(self) -> &'static str {
        if self.digits_lower { "a-z0-9" } else { "a-z" }
    }

    const fn upper(self) -> &'static str {
        if self.digits_upper { "A-Z0-9" } else { "A-Z" }
    }
}

/// Body of the grammar (without anchors or the underscore prefix).
fn grammar_body(descriptor: Option<Descriptor>, classes: CharClasses, empty_words: bool) -> String {
    let lower = classes.lower();
    let upper = classes.upper();

    let Some(descriptor) = descriptor else {
        return if empty_words {
            format!(r"[_\-{lower}{upper}]*")
        } else {
            format!(r"[{lower}{upper}]+(?:[_\-][{lower}{upper}]+)*")
        };
    };

    let Some(separator) = descriptor.separator else {
        // Without a separator the word boundary is an uppercase letter, so
        // only a letter can open a later word. The first word is capitalized
        // like a Title_Case word.
        let first = match (descriptor.first_word_case, empty_words) {
            (WordCase::Lower, false) => format!("[{lower}]+"),
            (_, false) => format!("[{upper}][{lower}]*"),
            (WordCase::Lower, true) => format!("[{lower}]"),
            (_, true) => format!("[{upper}]"),
        };
        return if empty_words {
            format!("(?:{first}[{lower}{upper}]*)?")
        } else {
            format!("{first}(?:[A-Z][{lower}]*)*")
        };
    };

    let word = |case: WordCase| match (case, empty_words) {
        (WordCase::Lower, false) => format!("[{lower}]+"),
        (WordCase::Upper, false) => format!("[{upper}]+"),
        (WordCase::Capitalized, false) => format!("[{upper}][{lower}]*"),
        (WordCase::Lower, true) => format!("[{lower}]*"),
        (WordCase::Upper, true) => format!("[{upper}]*"),
        (WordCase::Capitalized, true) => format!("(?:[{upper}][{lower}]*)?"),
    };
    let separator = regex::escape(&separator.to_string());
    format!(
        "{}(?:{separator}{})*",
        word(descriptor.first_word_case),
        word(descriptor.word_case)
    )
}

/// Base shapes: the eight plain dialects followed by `any`.
const SHAPES: [Dialect; 9] = [
    Dialect::Camel,
    Dialect::Pascal,
    Dialect::Snake,
    Dialect::Title,
    Dialect::ScreamingSnake,
    Dialect::Kebab,
    Dialect::Train,
    Dialect::ScreamingKebab,
    Dialect::Any,
];

const fn shape_index(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Camel | Dialect::UnderscoreCamel => 0,
        Dialect::Pascal | Dialect::UnderscorePascal => 1,
        Dialect::Snake | Dialect::UnderscoreSnake => 2,
        Dialect::Title | Dialect::UnderscoreTitle => 3,
        Dialect::ScreamingSnake | Dialect::UnderscoreScreamingSnake => 4,
        Dialect::Kebab | Dialect::UnderscoreKebab => 5,
        Dialect::Train | Dialect::UnderscoreTrain => 6,
        Dialect::ScreamingKebab | Dialect::UnderscoreScreamingKebab => 7,
        Dialect::Any => 8,
    }
}

const fn grammar_index(shape: usize, classes: CharClasses, empty_words: bool) -> usize {
    (shape << 3)
        | ((classes.digits_lower as usize) << 2)
        | ((classes.digits_upper as usize) << 1)
        | empty_words as usize
}

/// All compiled grammars, indexed by [`grammar_index`].
static GRAMMARS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut grammars = Vec::with_capacity(SHAPES.len() * 8);
    for shape in SHAPES {
        for flags in 0..8_usize {
            let classes = CharClasses {
                digits_lower: flags & 0b100 != 0,
                digits_upper: flags & 0b010 != 0,
            };
            let body = grammar_body(shape.descriptor(), classes, flags & 0b001 != 0);
            grammars.push(Regex::new(&format!("^(?:{body})$")).expect("valid grammar"));
        }
    }
    grammars
});

/// Check `input` against the grammar of `dialect` under `options`.
///
/// - An empty input is valid exactly when `allow_empty` is set.
/// - Without `validate`, any non-empty input is valid.
/// - `no_leading_digits` rejects input starting with an ASCII digit.
/// - Underscore-prefixed dialects require one leading `_`; the rest of the
///   input must match the base grammar.
///
/// ```
/// use strucase_core::case::{Dialect, ValidationOptions, is_valid_case};
///
/// assert!(is_valid_case("_camelCase", Dialect::UnderscoreCamel, ValidationOptions::VALIDATE));
/// assert!(!is_valid_case("camelCase", Dialect::UnderscoreCamel, ValidationOptions::VALIDATE));
/// ```
pub fn is_valid_case(input: &str, dialect: Dialect, options: ValidationOptions) -> bool {
    if input.is_empty() {
        return options.allow_empty;
    }
    if !options.validate {
        return true;
    }
    if options.no_leading_digits && input.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    let body = if dialect.has_underscore_prefix() {
        match input.strip_prefix('_') {
            Some(rest) => rest,
            None => return false,
        }
    } else {
        input
    };
    let classes = CharClasses::from_options(&options);
    let index = grammar_index(
        shape_index(dialect),
        classes,
        options.allows_empty_words(),
    );
    GRAMMARS[index].is_match(body)
}
