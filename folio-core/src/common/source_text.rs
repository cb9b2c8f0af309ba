//! Embedding user text into generated TypeScript/JSX source.
//!
//! Two quoting forms are used by the generated pages:
//!
//! - template literals (`` `...` ``) around trusted HTML passed to
//!   `dangerouslySetInnerHTML`, see [`escape_template_literal`];
//! - JSON string literals inside `{...}` expressions for plain text and URLs,
//!   see [`js_string_literal`].
//!
//! Both are chosen so that evaluating the emitted literal yields the input
//! string exactly.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Escape `value` for the body of a JavaScript template literal.
///
/// Backslashes are escaped first so the escapes added for backticks and
/// `${` cannot be reinterpreted. Carriage returns are written as `\r`
/// because template literals fold raw CRLF into LF.
pub fn escape_template_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 8);
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '\r' => escaped.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Quote `value` as a JavaScript string literal.
///
/// JSON string syntax is valid JavaScript; U+2028 and U+2029 are escaped as
/// well since older parsers treat them as line terminators.
pub fn js_string_literal(value: &str) -> String {
    let quoted = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
    quoted.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029")
}

/// The raw-injection attribute for trusted author HTML
pub fn inner_html_attribute(html: &str) -> String {
    format!(
        "dangerouslySetInnerHTML={{{{ __html: `{}` }}}}",
        escape_template_literal(html)
    )
}

/// Reduce a rich-text fragment to the text a reader would see
pub fn plain_text(html: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(html, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
