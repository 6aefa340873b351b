//! Character-level cleanup before tokenizing.

use super::dialect::Dialect;
use super::grammar::CharClasses;
use super::options::ValidationOptions;

/// Strip characters that cannot occur in `dialect`.
///
/// Returns the input unchanged unless `options.sanitize` is set. The result
/// keeps only letters (and digits, per the digit flags) plus the dialect's
/// separator; camel and pascal keep no separator at all. Underscore-prefixed
/// dialects always get their `_` back, and trailing separators are trimmed
/// unless empty words are allowed. Sanitizing does not enforce
/// capitalization, so the result may still fail validation.
///
/// Applying it twice gives the same result as applying it once.
#[tracing::instrument(level = "trace", skip(options), ret)]
pub fn sanitize(input: &str, dialect: Dialect, options: ValidationOptions) -> String {
    if !options.sanitize {
        return input.to_owned();
    }
    let classes = CharClasses::from_options(&options);
    let prefixed = dialect.has_underscore_prefix();

    let mut rest = input;
    if options.no_leading_digits {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    }
    let rest = dialect.strip_prefix(rest);

    let separators = dialect.separators();
    let mut sanitized: String = rest
        .chars()
        .filter(|&c| classes.is_lower(c) || classes.is_upper(c) || separators.contains(&c))
        .collect();

    // Filtering can bring a digit to the front; the prefix shields it in
    // underscore dialects.
    if options.no_leading_digits && !prefixed {
        let trimmed = sanitized.trim_start_matches(|c: char| c.is_ascii_digit());
        sanitized = trimmed.to_owned();
    }
    if prefixed {
        sanitized.insert(0, '_');
    }
    if !options.allows_empty_words() {
        let trimmed_len = sanitized.trim_end_matches(['_', '-']).len();
        sanitized.truncate(trimmed_len);
    }
    sanitized
}
