//! Splitting strings into word sequences and joining them back.

use super::dialect::Dialect;
use crate::error::{CaseError, CaseResult};

/// Split `input` into lowercase words according to `dialect`.
///
/// - `any` splits at `_`, `-`, at a lowercase letter or digit followed by
///   an uppercase letter, and before the last letter of an uppercase run
///   that is followed by a lowercase letter (`XMLParser` gives `xml`,
///   `parser`).
/// - camel and pascal split before every uppercase letter.
/// - separated dialects split at their separator.
///
/// Underscore-prefixed dialects drop exactly one leading `_` first.
/// Consecutive separators yield empty words, and an empty input yields a
/// single empty word.
///
/// ```
/// use strucase_core::case::{Dialect, tokenize};
///
/// assert_eq!(tokenize("abCCddEE", Dialect::Any), ["ab", "c", "cdd", "ee"]);
/// ```
pub fn tokenize(input: &str, dialect: Dialect) -> Vec<String> {
    let body = dialect.strip_prefix(input);
    match dialect.descriptor() {
        None => split_any(body),
        Some(descriptor) => match descriptor.separator {
            Some(separator) => body
                .to_ascii_lowercase()
                .split(separator)
                .map(str::to_owned)
                .collect(),
            None => split_humps(body),
        },
    }
}

fn split_humps(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }
    words.push(current);
    words
}

fn split_any(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            words.push(std::mem::take(&mut current));
            continue;
        }
        if i > 0 && starts_word(&chars, i) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }
    words.push(current);
    words
}

fn starts_word(chars: &[char], i: usize) -> bool {
    let (prev, cur) = (chars[i - 1], chars[i]);
    if !cur.is_ascii_uppercase() {
        return false;
    }
    let hump = prev.is_ascii_lowercase() || prev.is_ascii_digit();
    let acronym_end = prev.is_ascii_uppercase()
        && chars
            .get(i + 1)
            .is_some_and(|next| next.is_ascii_lowercase());
    hump || acronym_end
}

/// Join `words` into a string of `dialect`.
///
/// Fails with [`CaseError::UnsupportedDialect`] for [`Dialect::Any`], which
/// is not a rendering target.
///
/// ```
/// use strucase_core::case::{Dialect, render};
///
/// let words = ["xml", "http", "request"];
/// assert_eq!(render(&words, Dialect::Camel).unwrap(), "xmlHttpRequest");
/// assert_eq!(render(&words, Dialect::UnderscoreTrain).unwrap(), "_Xml-Http-Request");
/// ```
pub fn render<S: AsRef<str>>(words: &[S], dialect: Dialect) -> CaseResult<String> {
    let descriptor = dialect
        .descriptor()
        .ok_or_else(|| CaseError::unsupported(dialect.name()))?;
    let separator = descriptor
        .separator
        .map(String::from)
        .unwrap_or_default();
    let body = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let case = if i == 0 {
                descriptor.first_word_case
            } else {
                descriptor.word_case
            };
            case.apply(word.as_ref())
        })
        .collect::<Vec<_>>()
        .join(separator.as_str());
    if descriptor.underscore_prefix {
        Ok(format!("_{body}"))
    } else {
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_splits_on_separators_and_humps() {
        assert_eq!(tokenize("abCCddEE", Dialect::Any), ["ab", "c", "cdd", "ee"]);
        assert_eq!(tokenize("XMLParser", Dialect::Any), ["xml", "parser"]);
        assert_eq!(tokenize("some_mixed-inputHere", Dialect::Any), ["some", "mixed", "input", "here"]);
        assert_eq!(tokenize("HTML5Parser", Dialect::Any), ["html5", "parser"]);
    }

    #[test]
    fn any_keeps_empty_words() {
        assert_eq!(tokenize("a__b", Dialect::Any), ["a", "", "b"]);
        assert_eq!(tokenize("-a", Dialect::Any), ["", "a"]);
        assert_eq!(tokenize("", Dialect::Any), [""]);
    }

    #[test]
    fn camel_and_pascal_split_before_uppercase() {
        assert_eq!(tokenize("abCcDdEe", Dialect::Camel), ["ab", "cc", "dd", "ee"]);
        assert_eq!(tokenize("AbCcDdEe", Dialect::Pascal), ["ab", "cc", "dd", "ee"]);
        assert_eq!(tokenize("aBC", Dialect::Camel), ["a", "b", "c"]);
        assert_eq!(tokenize("a1B2", Dialect::Camel), ["a1", "b2"]);
        assert_eq!(tokenize("_PascalCase", Dialect::UnderscorePascal), ["pascal", "case"]);
    }

    #[test]
    fn separated_dialects_split_on_their_separator() {
        assert_eq!(tokenize("AB_CC", Dialect::ScreamingSnake), ["ab", "cc"]);
        assert_eq!(tokenize("Ab-Cc", Dialect::Train), ["ab", "cc"]);
        assert_eq!(tokenize("ab-cc_dd", Dialect::Kebab), ["ab", "cc_dd"]);
        assert_eq!(tokenize("__ab_cc", Dialect::UnderscoreSnake), ["", "ab", "cc"]);
    }

    #[test]
    fn render_each_shape() {
        let words = ["ab", "cc", "dd"];
        let expected = [
            (Dialect::Camel, "abCcDd"),
            (Dialect::Pascal, "AbCcDd"),
            (Dialect::Snake, "ab_cc_dd"),
            (Dialect::Title, "Ab_Cc_Dd"),
            (Dialect::ScreamingSnake, "AB_CC_DD"),
            (Dialect::Kebab, "ab-cc-dd"),
            (Dialect::Train, "Ab-Cc-Dd"),
            (Dialect::ScreamingKebab, "AB-CC-DD"),
            (Dialect::UnderscoreCamel, "_abCcDd"),
            (Dialect::UnderscoreScreamingKebab, "_AB-CC-DD"),
        ];
        for (dialect, output) in expected {
            assert_eq!(render(&words, dialect).unwrap(), output, "{dialect}");
        }
    }

    #[test]
    fn render_normalizes_word_case() {
        assert_eq!(render(&["MiXed", "CASE"], Dialect::Camel).unwrap(), "mixedCase");
        assert_eq!(render(&["MiXed", "CASE"], Dialect::Snake).unwrap(), "mixed_case");
    }

    #[test]
    fn render_refuses_any() {
        let err = render(&["a"], Dialect::Any).unwrap_err();
        assert_eq!(
            err,
            CaseError::UnsupportedDialect {
                name: "any".to_string()
            }
        );
    }

    #[test]
    fn round_trip_for_every_dialect() {
        let sequences: [&[&str]; 5] = [
            &["alpha"],
            &["alpha", "beta"],
            &["a", "b", "c"],
            &["x", "ml", "parser"],
            &["alpha", "b", "gamma", "delta"],
        ];
        for dialect in Dialect::ALL {
            for words in sequences {
                let rendered = render(words, dialect).unwrap();
                assert_eq!(tokenize(&rendered, dialect), words, "{rendered} in {dialect}");
            }
        }
    }
}
