//! Standard Helvetica fonts: metrics and WinAnsi encoding
//!
//! The printable summary only uses the two standard Type 1 fonts every PDF
//! reader provides, so nothing is embedded. Widths are the published AFM
//! advance widths in thousandths of the font size.

use crate::error::{FinanthropeError, FinanthropeResult};

/// The fonts available to the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used in content streams
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    /// PostScript name of the standard font
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Self::Regular => &HELVETICA,
            Self::Bold => &HELVETICA_BOLD,
        }
    }

    /// Advance width of one character, in thousandths of the font size
    fn char_width(&self, c: char) -> u16 {
        let c = fold_accent(c);
        match c {
            ' '..='~' => self.widths()[c as usize - 32],
            '—' => 1000,
            '’' | '‘' => match self {
                Self::Regular => 222,
                Self::Bold => 278,
            },
            _ => 556,
        }
    }

    /// Width of `text` set at `size` points
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f64 * size / 1000.0
    }
}

/// Accented Latin letters share the advance width of their base letter
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'À' | 'Â' => 'A',
        'Ç' => 'C',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Î' | 'Ï' => 'I',
        'Ô' => 'O',
        'Ù' | 'Û' => 'U',
        other => other,
    }
}

/// Encode text for a WinAnsiEncoding font
///
/// Fails on any character the encoding cannot represent.
pub fn encode_win_ansi(text: &str) -> FinanthropeResult<Vec<u8>> {
    text.chars()
        .map(|c| {
            win_ansi_byte(c).ok_or_else(|| {
                FinanthropeError::Export(format!(
                    "Character '{}' (U+{:04X}) cannot be encoded in the PDF font",
                    c, c as u32
                ))
            })
        })
        .collect()
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => Some(match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => return None,
        }),
    }
}

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_widths_are_uniform() {
        let a = Font::Regular.text_width("1,111.11", 10.0);
        let b = Font::Regular.text_width("9,999.99", 10.0);
        assert_eq!(a, b);
        assert!((a - (6.0 * 5.56 + 2.0 * 2.78)).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Total revenus";
        assert!(Font::Bold.text_width(text, 12.0) > Font::Regular.text_width(text, 12.0));
    }

    #[test]
    fn test_accents_use_base_width() {
        assert_eq!(
            Font::Regular.text_width("é", 10.0),
            Font::Regular.text_width("e", 10.0)
        );
    }

    #[test]
    fn test_encode_french_text() {
        let bytes = encode_win_ansi("Capacité d’épargne — 12 €").unwrap();
        assert!(bytes.contains(&0xE9)); // é
        assert!(bytes.contains(&0x92)); // ’
        assert!(bytes.contains(&0x97)); // —
        assert!(bytes.contains(&0x80)); // €
    }

    #[test]
    fn test_encode_rejects_unsupported_characters() {
        let err = encode_win_ansi("✅").unwrap_err();
        assert!(err.is_export());
        assert!(encode_win_ansi("日本").is_err());
    }
}
