//! Text normalization for feed fields and extracted page content.
//!
//! Both transforms are idempotent and built on process-wide compiled
//! patterns, initialized once and safe for unsynchronized concurrent reads.

use std::sync::LazyLock;

use regex::Regex;

/// Angle-bracket-delimited tag, non-greedy.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid tag pattern"));

/// Maximal run of whitespace, including newlines and tabs.
static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Remove every `<...>` tag, leaving inner and surrounding text untouched.
///
/// HTML entities are not decoded; an escaped `&lt;b&gt;` stays as text.
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").into_owned()
}

/// Replace every maximal whitespace run with a single ASCII space.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_PATTERN.replace_all(input, " ").into_owned()
}

/// Normalize one field value: strip tags (if enabled), trim, collapse
/// whitespace (if enabled), in that order.
///
/// Trimming happens before collapsing so a value wrapped in whitespace does
/// not pick up a leading or trailing space artifact.
pub fn clean_value(input: &str, strip: bool, collapse: bool) -> String {
    let stripped = if strip { strip_tags(input) } else { input.to_string() };
    let trimmed = stripped.trim();
    if collapse { collapse_whitespace(trimmed) } else { trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_basic() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
    }

    #[test]
    fn test_strip_tags_leaves_entities() {
        assert_eq!(strip_tags("a &lt;b&gt; c"), "a &lt;b&gt; c");
    }

    #[test]
    fn test_strip_tags_attributes() {
        assert_eq!(strip_tags(r#"<a href="https://example.com">link</a>"#), "link");
    }

    #[test]
    fn test_strip_tags_idempotent() {
        let input = "<p>some <em>text</em></p>";
        let once = strip_tags(input);
        assert_eq!(strip_tags(&once), once);
    }

    #[test]
    fn test_collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("a  b\t\nc"), "a b c");
    }

    #[test]
    fn test_collapse_whitespace_idempotent() {
        let input = "a \n\n b\t\tc";
        let once = collapse_whitespace(input);
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_clean_value_strip_and_collapse() {
        assert_eq!(clean_value("  <b>bold</b>   text\n", true, true), "bold text");
    }

    #[test]
    fn test_clean_value_trim_is_unconditional() {
        assert_eq!(clean_value("  raw\nvalue  ", false, false), "raw\nvalue");
    }

    #[test]
    fn test_clean_value_no_strip_keeps_tags() {
        assert_eq!(clean_value("<b>bold</b>", false, true), "<b>bold</b>");
    }

    #[test]
    fn test_clean_value_no_leading_space_artifact() {
        // Trim before collapse, otherwise " x" would survive as " x".
        assert_eq!(clean_value("<p> x </p>", true, true), "x");
    }
}
