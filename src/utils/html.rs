//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script_json()` - JSON safe to embed in a `<script>` element

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make serialized JSON safe inside `<script>`.
///
/// Script content is raw text, so entities are not decoded there. Only
/// `</` (which could close the element) and `<!--` need neutralizing.
/// Both only occur inside JSON strings, where `\/` and `\u003c` are valid
/// escapes.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains("</") && !json.contains("<!--") {
        return Cow::Borrowed(json);
    }
    Cow::Owned(json.replace("<!--", "\\u003c!--").replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("A & B"), "A &amp; B");
        assert_eq!(escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_escape_borrows_when_clean() {
        assert!(matches!(escape("hello"), Cow::Borrowed("hello")));
        assert!(matches!(escape_attr("/about"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_script_json() {
        assert_eq!(
            escape_script_json(r#"{"name":"</script><b>"}"#),
            r#"{"name":"<\/script><b>"}"#
        );
        assert_eq!(escape_script_json(r#"{"a":"<!--"}"#), r#"{"a":"\u003c!--"}"#);
        assert!(matches!(escape_script_json(r#"{"a":1}"#), Cow::Borrowed(_)));
    }
}
