//! Trimming and HTML escaping of raw field values.
//!
//! Field values are stored exactly as typed. Everything that ends up in the
//! generated document goes through [`trim_horizontal`] and then
//! [`escape_html`].

/// Strip leading and trailing spaces and tabs.
///
/// Newlines are significant (they become line breaks in the abstract) and
/// are left alone.
#[must_use]
pub fn trim_horizontal(value: &str) -> &str {
    value.trim_matches(|c| c == ' ' || c == '\t')
}

/// Escape text for embedding in the generated document.
///
/// Replacement order matters: `&` goes first so the entities introduced by
/// the later substitutions are not escaped a second time.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trim_spaces_and_tabs() {
        assert_eq!(trim_horizontal(" \t hello world\t "), "hello world");
    }

    #[test]
    fn test_trim_keeps_newlines() {
        assert_eq!(trim_horizontal("\nline\n "), "\nline\n");
    }

    #[test]
    fn test_trim_all_blank() {
        assert_eq!(trim_horizontal("  \t\t "), "");
    }

    #[test]
    fn test_escape_basic() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("<"), "&lt;");
    }

    #[test]
    fn test_escape_newline() {
        assert_eq!(escape_html("one\ntwo"), "one<br/>two");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_html("Joe Nobody"), "Joe Nobody");
    }

    /// Every `&` in the output must start one of the entities we emit.
    fn ampersands_are_entities(s: &str) -> bool {
        s.match_indices('&')
            .all(|(i, _)| ["&amp;", "&lt;", "&gt;"].iter().any(|e| s[i..].starts_with(e)))
    }

    proptest! {
        #[test]
        fn prop_escape_has_no_raw_markup(input in any::<String>()) {
            let escaped = escape_html(&input);
            // The only '<' / '>' left are the ones in "<br/>".
            let without_breaks = escaped.replace("<br/>", "");
            prop_assert!(!without_breaks.contains('<'));
            prop_assert!(!without_breaks.contains('>'));
            prop_assert!(!escaped.contains('\n'));
            prop_assert!(ampersands_are_entities(&without_breaks));
        }

        #[test]
        fn prop_newline_count_preserved(input in "[a-z\n<&>]{0,40}") {
            let breaks = escape_html(&input).matches("<br/>").count();
            prop_assert_eq!(breaks, input.matches('\n').count());
        }
    }
}
