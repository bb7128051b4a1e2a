//! Built-in Helvetica fonts and their glyph widths
//!
//! Widths are in 1/1000 em, taken from the standard Type1 AFM metrics.
//! Regular and Oblique share one table. Bold only has an ASCII table; the
//! upper Latin-1 range falls back to the regular widths, which is close
//! enough for the short literal headings set in bold.

/// Width used for bytes that never reach the page (control codes)
const UNKNOWN_WIDTH: u16 = 350;

/// `HELVETICA_ASCII[i]` = width of byte `i + 0x20`, through 0x7E
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp .. /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0 .. 9
    278, 278, 584, 584, 584, 556, 1015, // : .. @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A .. M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N .. Z
    278, 278, 278, 469, 556, 333, // [ .. `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a .. m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n .. z
    334, 260, 334, 584, // { .. ~
];

/// `HELVETICA_LATIN1[i]` = width of byte `i + 0xA0`, through 0xFF
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // A0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // B0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // C0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // D0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // E0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // F0
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // sp .. /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0 .. 9
    333, 333, 584, 584, 584, 611, 975, // : .. @
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A .. M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N .. Z
    333, 278, 333, 584, 556, 333, // [ .. `
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a .. m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n .. z
    389, 280, 389, 584, // { .. ~
];

/// The three Helvetica faces the document uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    /// Resource name used in content streams
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }

    /// PostScript name of the standard Type1 font
    pub fn base_font(&self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Italic => "Helvetica-Oblique",
        }
    }

    /// Glyph width of one encoded byte, in 1/1000 em
    pub fn glyph_width(&self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => {
                let idx = usize::from(byte - 0x20);
                match self {
                    FontStyle::Bold => HELVETICA_BOLD_ASCII[idx],
                    _ => HELVETICA_ASCII[idx],
                }
            }
            0xA0..=0xFF => HELVETICA_LATIN1[usize::from(byte - 0xA0)],
            _ => UNKNOWN_WIDTH,
        }
    }

    /// Total width of encoded text, in 1/1000 em
    pub fn text_width(&self, text: &[u8]) -> u32 {
        text.iter().map(|&b| u32::from(self.glyph_width(b))).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        assert_eq!(FontStyle::Regular.glyph_width(b' '), 278);
        assert_eq!(FontStyle::Regular.glyph_width(b'@'), 1015);
        assert_eq!(FontStyle::Regular.glyph_width(b'i'), 222);
        assert_eq!(FontStyle::Regular.glyph_width(b'~'), 584);
        assert_eq!(FontStyle::Bold.glyph_width(b'i'), 278);
        assert_eq!(FontStyle::Bold.glyph_width(b'@'), 975);
    }

    #[test]
    fn test_italic_shares_regular_widths() {
        for b in 0x20..=0xFFu8 {
            assert_eq!(FontStyle::Italic.glyph_width(b), FontStyle::Regular.glyph_width(b));
        }
    }

    #[test]
    fn test_latin1_widths() {
        assert_eq!(FontStyle::Regular.glyph_width(0xA0), 278);
        assert_eq!(FontStyle::Regular.glyph_width(0xC6), 1000); // Æ
        assert_eq!(FontStyle::Regular.glyph_width(0xE9), 556); // é
        assert_eq!(FontStyle::Regular.glyph_width(0xFF), 500); // ÿ
        assert_eq!(FontStyle::Bold.glyph_width(0xE9), 556);
    }

    #[test]
    fn test_control_bytes_use_fallback() {
        assert_eq!(FontStyle::Regular.glyph_width(0x0A), UNKNOWN_WIDTH);
        assert_eq!(FontStyle::Regular.glyph_width(0x85), UNKNOWN_WIDTH);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(FontStyle::Regular.text_width(b"Hi"), 722 + 222);
        assert_eq!(FontStyle::Regular.text_width(b""), 0);
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let names: Vec<&str> = FontStyle::ALL.iter().map(|s| s.resource_name()).collect();
        assert_eq!(names, vec!["F1", "F2", "F3"]);
    }
}
