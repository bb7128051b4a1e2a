//! Character sanitization for the built-in PDF fonts
//!
//! The standard Type1 fonts only cover Latin-1. Typographic punctuation is
//! first rewritten through [`SUBSTITUTIONS`], then the text is transcoded to
//! Latin-1 bytes with [`PLACEHOLDER`] standing in for anything left over.

use tracing::debug;

/// Replacement for characters with no Latin-1 representation
pub const PLACEHOLDER: u8 = b'?';

/// Ordered substitution table applied before transcoding
pub const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{2014}', "--"),  // em dash
    ('\u{2013}', "-"),   // en dash
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2026}', "..."), // ellipsis
    ('\u{00A0}', " "),   // non-breaking space
    ('\u{2022}', "-"),   // bullet
];

/// Look up the table replacement for a single character
pub fn substitute(c: char) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Apply the substitution table, leaving every other character untouched
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match substitute(c) {
            Some(repl) => out.push_str(repl),
            None => out.push(c),
        }
    }
    out
}

/// Sanitize and transcode text to Latin-1 bytes.
///
/// Carriage returns are dropped. Line feeds are kept so paragraph text can
/// break on them. Any other control character, and every codepoint above
/// U+00FF, becomes [`PLACEHOLDER`]. This never fails.
pub fn to_latin1(text: &str) -> Vec<u8> {
    let sanitized = sanitize(text);
    let mut bytes = Vec::with_capacity(sanitized.len());
    let mut replaced = 0usize;

    for c in sanitized.chars() {
        let code = c as u32;
        match c {
            '\r' => {}
            '\n' => bytes.push(b'\n'),
            _ if code < 0x20 || (0x7F..0xA0).contains(&code) || code > 0xFF => {
                bytes.push(PLACEHOLDER);
                replaced += 1;
            }
            _ => bytes.push(code as u8),
        }
    }

    if replaced > 0 {
        debug!(replaced, "unrepresentable characters replaced with placeholder");
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_is_applied() {
        for (from, to) in SUBSTITUTIONS {
            let input = format!("x{}y", from);
            assert_eq!(sanitize(&input), format!("x{}y", to));
        }
    }

    #[test]
    fn test_sanitize_mixed_punctuation() {
        let input = "\u{201C}Hello\u{201D} \u{2014} it\u{2019}s\u{00A0}fine\u{2026}";
        assert_eq!(sanitize(input), "\"Hello\" -- it's fine...");
    }

    #[test]
    fn test_sanitize_leaves_latin1_alone() {
        assert_eq!(sanitize("café naïve résumé"), "café naïve résumé");
    }

    #[test]
    fn test_substitute_unknown_char() {
        assert_eq!(substitute('a'), None);
        assert_eq!(substitute('\u{2022}'), Some("-"));
    }

    #[test]
    fn test_to_latin1_accented() {
        assert_eq!(to_latin1("é"), vec![0xE9]);
        assert_eq!(to_latin1("Ü"), vec![0xDC]);
    }

    #[test]
    fn test_to_latin1_substitutes_before_transcoding() {
        assert_eq!(to_latin1("Hello \u{2014} world\u{2026}"), b"Hello -- world...".to_vec());
    }

    #[test]
    fn test_to_latin1_placeholder_for_emoji() {
        assert_eq!(to_latin1("hi 💌"), b"hi ?".to_vec());
    }

    #[test]
    fn test_to_latin1_placeholder_per_char() {
        // Hebrew: two letters, two placeholders, nothing dropped
        assert_eq!(to_latin1("שלום"), b"????".to_vec());
        // Combining acute accent is outside Latin-1
        assert_eq!(to_latin1("e\u{0301}"), b"e?".to_vec());
    }

    #[test]
    fn test_to_latin1_control_characters() {
        assert_eq!(to_latin1("a\r\nb"), b"a\nb".to_vec());
        assert_eq!(to_latin1("a\tb"), b"a?b".to_vec());
        assert_eq!(to_latin1("a\u{0085}b"), b"a?b".to_vec());
    }

    #[test]
    fn test_to_latin1_empty() {
        assert!(to_latin1("").is_empty());
    }
}
