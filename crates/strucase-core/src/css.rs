//! `@font-face` rule builder.
//!
//! Descriptor keys pass through the case engine (`fontWeight`,
//! `font_weight` and `font-weight` all name the same descriptor) and font
//! files are turned into a `src` list with their CSS format names.
//!
//! ```
//! use strucase_core::css::{FontFaceOptions, FontValue, font_face};
//!
//! let rule = font_face(
//!     &[
//!         ("font-family", FontValue::from("MyFont")),
//!         ("files", FontValue::from(vec!["myfont.woff2"])),
//!     ],
//!     &FontFaceOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(
//!     rule,
//!     r#"@font-face {font-family:"MyFont";src:url("myfont.woff2") format("woff2");}"#
//! );
//! ```

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::case::{Dialect, ValidationOptions, convert_case};
use crate::error::{CssError, CssResult};
use crate::error_mode::ErrorMode;

/// Font file extensions accepted in a `src` list.
pub const FONT_FILE_FORMATS: &[&str] = &["woff", "woff2", "ttf", "otf", "eot", "svg"];

/// Keywords written without quotes in a `font-family` declaration.
pub const CSS_KEYWORDS: &[&str] = &[
    // generic families
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    // global values
    "inherit",
    "initial",
    "unset",
    "revert",
    "transparent",
    "currentColor",
    // display
    "block",
    "inline",
    "inline-block",
    "flex",
    "grid",
    "none",
    "table",
    "table-row",
    "table-cell",
    // position
    "static",
    "relative",
    "absolute",
    "fixed",
    "sticky",
    // overflow
    "visible",
    "hidden",
    "scroll",
    "auto",
    "clip",
    "border-box",
    "content-box",
    "normal",
    "bold",
    "bolder",
    "lighter",
    "italic",
    "oblique",
    "small-caps",
    "uppercase",
    "lowercase",
    "capitalize",
    "nowrap",
    "pre",
    "pre-wrap",
    "pre-line",
    "break-word",
    "break-all",
];

/// Descriptors valid inside an `@font-face` rule.
pub const FONT_FACE_DESCRIPTORS: &[&str] = &[
    "font-family",
    "src",
    "font-style",
    "font-weight",
    "font-stretch",
    "font-display",
    "unicode-range",
    "font-feature-settings",
    "font-variation-settings",
    "ascent-override",
    "descent-override",
    "line-gap-override",
    "size-adjust",
];

/// Standard CSS property names.
pub const CSS_PROPERTIES: &[&str] = &[
    "background", "background-attachment", "background-blend-mode", "background-clip",
    "background-color", "background-image", "background-origin", "background-position",
    "background-repeat", "background-size", "border", "border-bottom", "border-bottom-color",
    "border-bottom-left-radius", "border-bottom-right-radius", "border-bottom-style",
    "border-bottom-width", "border-collapse", "border-color", "border-image",
    "border-image-outset", "border-image-repeat", "border-image-slice", "border-image-source",
    "border-image-width", "border-left", "border-left-color", "border-left-style",
    "border-left-width", "border-radius", "border-right", "border-right-color",
    "border-right-style", "border-right-width", "border-spacing", "border-style", "border-top",
    "border-top-color", "border-top-left-radius", "border-top-right-radius", "border-top-style",
    "border-top-width", "border-width", "outline", "outline-color", "outline-offset",
    "outline-style", "outline-width", "box-shadow", "box-sizing", "color", "opacity", "display",
    "visibility", "z-index", "align-content", "align-items", "align-self", "flex", "flex-basis",
    "flex-direction", "flex-flow", "flex-grow", "flex-shrink", "flex-wrap", "justify-content",
    "order", "grid", "grid-area", "grid-auto-columns", "grid-auto-flow", "grid-auto-rows",
    "grid-column", "grid-column-end", "grid-column-gap", "grid-column-start", "grid-gap",
    "grid-row", "grid-row-end", "grid-row-gap", "grid-row-start", "grid-template",
    "grid-template-areas", "grid-template-columns", "grid-template-rows", "margin",
    "margin-bottom", "margin-left", "margin-right", "margin-top", "padding", "padding-bottom",
    "padding-left", "padding-right", "padding-top", "bottom", "clear", "clip", "float", "left",
    "position", "right", "top", "caption-side", "empty-cells", "table-layout", "direction",
    "font", "font-family", "font-feature-settings", "font-kerning", "font-optical-sizing",
    "font-size", "font-size-adjust", "font-stretch", "font-style", "font-variant",
    "font-variant-alternates", "font-variant-caps", "font-variant-east-asian",
    "font-variant-ligatures", "font-variant-numeric", "font-variant-position", "font-weight",
    "letter-spacing", "line-height", "quotes", "text-align", "text-align-last",
    "text-combine-upright", "text-decoration", "text-decoration-color", "text-decoration-line",
    "text-decoration-style", "text-indent", "text-justify", "text-overflow", "text-shadow",
    "text-transform", "unicode-bidi", "vertical-align", "white-space", "word-break",
    "word-spacing", "word-wrap", "writing-mode", "animation", "animation-delay",
    "animation-direction", "animation-duration", "animation-fill-mode",
    "animation-iteration-count", "animation-name", "animation-play-state",
    "animation-timing-function", "transition", "transition-delay", "transition-duration",
    "transition-property", "transition-timing-function", "transform", "transform-origin",
    "transform-style", "all", "content", "cursor", "filter", "resize", "scroll-behavior",
    "will-change", "clip-path", "perspective", "perspective-origin", "backface-visibility",
    "overflow", "overflow-x", "overflow-y", "user-select",
];

const INDENT: &str = "  ";

/// A descriptor value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontValue {
    /// Free text, written as given.
    Text(String),
    /// A list of font file names.
    Files(Vec<String>),
    /// A number, written without a trailing `.0`.
    Number(f64),
    /// Written as `true` or `false`.
    Bool(bool),
}

impl FontValue {
    fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Files(files) => files.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl From<&str> for FontValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FontValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<&str>> for FontValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Files(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for FontValue {
    fn from(value: Vec<String>) -> Self {
        Self::Files(value)
    }
}

impl From<f64> for FontValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FontValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Settings for [`font_face`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFaceOptions {
    /// Key whose value lists the font files.
    pub filename_key: String,
    /// Directory prepended to each font file; a trailing `/` is added when missing.
    pub path: String,
    /// Indent with two spaces and break lines; otherwise render compactly.
    pub with_space: bool,
    /// Handling of keys that are not `@font-face` descriptors.
    pub error_mode: ErrorMode,
}

impl Default for FontFaceOptions {
    fn default() -> Self {
        Self {
            filename_key: "files".to_string(),
            path: String::new(),
            with_space: false,
            error_mode: ErrorMode::Throw,
        }
    }
}

/// Normalize `key` to a kebab-case `@font-face` descriptor.
///
/// Under [`ErrorMode::Throw`] the key must already be a clean identifier
/// in any dialect; the other modes sanitize it first and return `""` for
/// keys that still do not name a descriptor.
///
/// ```
/// use strucase_core::css::validate_font_key;
/// use strucase_core::ErrorMode;
///
/// assert_eq!(validate_font_key("fontWeight", ErrorMode::Throw).unwrap(), "font-weight");
/// assert_eq!(validate_font_key("colour", ErrorMode::Ignore).unwrap(), "");
/// ```
pub fn validate_font_key(key: &str, mode: ErrorMode) -> CssResult<String> {
    let options = match mode {
        ErrorMode::Throw => ValidationOptions::VALIDATE,
        ErrorMode::Ignore | ErrorMode::Warn => ValidationOptions::SANITIZE,
    };
    let normalized = convert_case(key, Dialect::Any, Dialect::Kebab, options)
        .map_err(CssError::from)
        .and_then(|normalized| {
            if FONT_FACE_DESCRIPTORS.contains(&normalized.as_str()) {
                Ok(normalized)
            } else {
                Err(CssError::InvalidDescriptor {
                    key: key.to_owned(),
                })
            }
        });
    mode.handle(normalized, String::new(), Some("font-face key dropped"))
}

/// Render the `src` descriptor for a list of font files.
///
/// Each file is written as `url("<path><file>") format("<ext>")`, with
/// `ttf` reported as `truetype`. A single entry follows `space`; several
/// entries each start on `newline_indent`. An empty list renders `""`.
pub fn font_src_from_filenames<S: AsRef<str>>(
    files: &[S],
    path: &str,
    newline_indent: &str,
    space: &str,
) -> CssResult<String> {
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let file = file.as_ref();
        let format = match Utf8Path::new(file).extension() {
            Some(ext) if !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => {
                return Err(CssError::MissingExtension {
                    filename: file.to_owned(),
                });
            }
        };
        if !FONT_FILE_FORMATS.contains(&format.as_str()) {
            return Err(CssError::UnsupportedFormat {
                format,
                allowed: FONT_FILE_FORMATS.join(", "),
            });
        }
        let format = if format == "ttf" { "truetype" } else { format.as_str() };
        entries.push(format!(r#"url("{path}{file}") format("{format}")"#));
    }
    if entries.is_empty() {
        return Ok(String::new());
    }
    let lead = if entries.len() > 1 { newline_indent } else { space };
    Ok(format!(
        "src:{lead}{};",
        entries.join(format!(",{newline_indent}").as_str())
    ))
}

/// Render a `font-family` declaration, quoting the family unless it is a keyword.
fn font_family(key: &str, value: &FontValue, space: &str) -> CssResult<String> {
    let FontValue::Text(family) = value else {
        return Err(CssError::NotAString { key: key.to_owned() });
    };
    let family = family.trim_matches(['"', '\'', ' ']);
    if CSS_KEYWORDS.contains(&family) {
        Ok(format!("font-family:{space}{family};"))
    } else {
        Ok(format!(r#"font-family:{space}"{family}";"#))
    }
}

fn scalar(key: &str, value: &FontValue) -> CssResult<String> {
    match value {
        FontValue::Text(text) => Ok(text.clone()),
        FontValue::Number(number) => Ok(number.to_string()),
        FontValue::Bool(flag) => Ok(flag.to_string()),
        FontValue::Files(_) => Err(CssError::NotScalar { key: key.to_owned() }),
    }
}

/// Build an `@font-face` rule from ordered descriptors.
///
/// The entry under `options.filename_key` becomes the `src` descriptor
/// unless an explicit `src` text is present; the rule fails with
/// [`CssError::MissingSource`] when both are empty. Empty text values are
/// skipped and descriptor order is kept.
#[tracing::instrument(skip_all, fields(descriptors = descriptors.len()))]
pub fn font_face<K: AsRef<str>>(
    descriptors: &[(K, FontValue)],
    options: &FontFaceOptions,
) -> CssResult<String> {
    let filename_key = options.filename_key.as_str();
    let lookup = |wanted: &str| {
        descriptors
            .iter()
            .find(|(key, value)| key.as_ref() == wanted && !value.is_empty())
            .map(|(_, value)| value)
    };
    let explicit_src = matches!(lookup("src"), Some(FontValue::Text(_)));
    if !explicit_src && lookup(filename_key).is_none() {
        return Err(CssError::MissingSource {
            filename_key: filename_key.to_owned(),
        });
    }

    let (space, indent, newline) = if options.with_space {
        (" ", INDENT, "\n")
    } else {
        ("", "", "")
    };
    let double_indent = format!("{newline}{indent}{indent}");
    let mut path = options.path.clone();
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }

    let mut lines = vec!["@font-face {".to_string()];
    for (key, value) in descriptors {
        let key = key.as_ref();
        if value.is_empty() {
            continue;
        }
        let is_explicit_src = key == "src" && matches!(value, FontValue::Text(_));
        if key == filename_key && !is_explicit_src {
            if explicit_src {
                continue;
            }
            let src = match value {
                FontValue::Text(file) => {
                    font_src_from_filenames(&[file], &path, &double_indent, space)?
                }
                FontValue::Files(files) => {
                    font_src_from_filenames(files, &path, &double_indent, space)?
                }
                _ => return Err(CssError::NotScalar { key: key.to_owned() }),
            };
            if !src.is_empty() {
                lines.push(src);
            }
            continue;
        }
        if key == "font-family" {
            lines.push(font_family(key, value, space)?);
            continue;
        }
        let descriptor = validate_font_key(key, options.error_mode)?;
        if descriptor.is_empty() {
            continue;
        }
        if descriptor == "font-family" {
            lines.push(font_family(key, value, space)?);
        } else {
            lines.push(format!("{descriptor}:{space}{};", scalar(key, value)?));
        }
    }

    let mut rule = lines.join(format!("{newline}{indent}").as_str());
    rule.push_str(newline);
    rule.push('}');
    Ok(rule)
}
