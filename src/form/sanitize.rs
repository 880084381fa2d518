// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Display-safe input sanitization
//!
//! Strips markup from user text before it is validated or shown. This is
//! not an injection defence; whatever receives the text must escape it again.

use lazy_static::lazy_static;
use regex::Regex;

/// Regex class body for the whitespace a browser form matches with `\s`.
/// Narrower than Unicode `White_Space` at U+0085, wider at U+FEFF.
pub(super) const FORM_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

lazy_static! {
    /// `<script ...> ... </script>` up to the first closing tag, across lines
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script\b.*?</script>").unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref UNSAFE_CHARS: Regex = Regex::new(r#"[&<>"']"#).unwrap();
}

/// Strip script blocks, then every remaining tag, then `& < > " '`, then
/// surrounding whitespace.
pub fn sanitize_input(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(input, "");
    let without_tags = ANY_TAG.replace_all(&without_scripts, "");
    let without_chars = UNSAFE_CHARS.replace_all(&without_tags, "");
    without_chars.trim_matches(is_form_whitespace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize_input("John Smith"), "John Smith");
        assert_eq!(sanitize_input("  padded\n"), "padded");
    }

    #[test]
    fn test_trims_form_whitespace_only() {
        assert_eq!(sanitize_input("\u{FEFF}\u{A0}Jane\u{3000}"), "Jane");
        assert_eq!(sanitize_input("\u{85}Jane"), "\u{85}Jane");
    }

    #[test]
    fn test_script_block_removed_with_body() {
        assert_eq!(
            sanitize_input("Hi<script>alert('x')</script> there"),
            "Hi there"
        );
        assert_eq!(
            sanitize_input("<SCRIPT type=\"text/javascript\">\nsteal();\n</ScRiPt>ok"),
            "ok"
        );
    }

    #[test]
    fn test_each_script_block_removed() {
        let input = "a<script>1</script>b<script src=x></script>c";
        assert_eq!(sanitize_input(input), "abc");
    }

    #[test]
    fn test_tags_stripped_text_kept() {
        assert_eq!(sanitize_input("<b>bold</b> <i>move</i>"), "bold move");
        assert_eq!(sanitize_input("<img src=x onerror=alert(1)>"), "");
    }

    #[test]
    fn test_unclosed_script_only_loses_tag() {
        // No closing tag: the opening tag goes as an ordinary tag
        assert_eq!(sanitize_input("<script>alert(1)"), "alert(1)");
    }

    #[test]
    fn test_special_characters_removed() {
        assert_eq!(sanitize_input(r#"Tom & "Jerry's" <3"#), "Tom  Jerrys 3");
    }

    #[test]
    fn test_output_never_contains_markup_chars() {
        let inputs = [
            "<<script>script>alert(1)<</script>/script>",
            "a<b<c>>d",
            "\"'&&<>",
            "<p title='x>y'>z</p>",
            "<scr<script></script>ipt>evil()</script>",
        ];
        for input in inputs {
            let out = sanitize_input(input);
            assert!(
                !out.contains(&['&', '<', '>', '"', '\''][..]),
                "{:?} -> {:?}",
                input,
                out
            );
            assert!(!out.to_lowercase().contains("<script"));
        }
    }
}
