//! Text measurement.

use crate::model::StyleSpec;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Measures rendered text width for line fitting.
pub trait TextMeasurer {
    /// Width of `text` in millimetres when set in `style`.
    fn measure(&self, text: &str, style: &StyleSpec) -> f32;

    /// Width of the widest single glyph that can reach the page.
    ///
    /// Wrapping never splits below one glyph, so a line narrower than this
    /// cannot hold every text.
    fn max_glyph_width(&self, style: &StyleSpec) -> f32 {
        let mut buf = [0u8; 4];
        (' '..='~')
            .chain(EXTRA_GLYPHS)
            .map(|c| self.measure(c.encode_utf8(&mut buf), style))
            .fold(0.0, f32::max)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &StyleSpec) -> f32 {
        (**self).measure(text, style)
    }

    fn max_glyph_width(&self, style: &StyleSpec) -> f32 {
        (**self).max_glyph_width(style)
    }
}

/// Non-ASCII glyphs with their own advance widths.
const EXTRA_GLYPHS: [char; 10] = ['\u{a0}', '•', '–', '—', '…', '€', '‘', '’', '“', '”'];

/// Advance widths of the standard Helvetica and Helvetica-Bold faces.
///
/// Widths come from the Adobe AFM files (1/1000 em). Characters outside the
/// table use the width of a digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    /// Advance width of one character in 1/1000 em.
    pub fn char_units(c: char, bold: bool) -> u16 {
        let table = if bold { &BOLD_ASCII } else { &REGULAR_ASCII };
        match c {
            ' '..='~' => table[c as usize - 0x20],
            '\u{a0}' => 278,
            '•' => 350,
            '–' => 556,
            '—' => 1000,
            '…' => 1000,
            '€' => 556,
            '‘' | '’' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '“' | '”' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            _ => DEFAULT_UNITS,
        }
    }

    /// Width of `text` in 1/1000 em.
    pub fn text_units(text: &str, bold: bool) -> u32 {
        text.chars()
            .map(|c| u32::from(Self::char_units(c, bold)))
            .sum()
    }
}

impl TextMeasurer for HelveticaMetrics {
    fn measure(&self, text: &str, style: &StyleSpec) -> f32 {
        let units = Self::text_units(text, style.is_bold()) as f32;
        units / 1000.0 * style.font_size * MM_PER_PT
    }
}

/// Fixed advance per character, handy for predictable layouts.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Width of every character in millimetres
    pub advance: f32,
}

impl MonospaceMetrics {
    /// Create a measurer with the given per-character advance.
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn measure(&self, text: &str, _style: &StyleSpec) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn max_glyph_width(&self, _style: &StyleSpec) -> f32 {
        self.advance
    }
}

const DEFAULT_UNITS: u16 = 556;

#[rustfmt::skip]
const REGULAR_ASCII: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_ASCII: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontWeight;

    #[test]
    fn test_table_lengths_cover_printable_ascii() {
        assert_eq!(REGULAR_ASCII.len(), ('~' as usize) - (' ' as usize) + 1);
        assert_eq!(HelveticaMetrics::char_units('A', false), 667);
        assert_eq!(HelveticaMetrics::char_units('~', true), 584);
        assert_eq!(HelveticaMetrics::char_units('i', false), 222);
        assert_eq!(HelveticaMetrics::char_units('i', true), 278);
    }

    #[test]
    fn test_unknown_char_uses_default() {
        assert_eq!(HelveticaMetrics::char_units('漢', false), DEFAULT_UNITS);
    }

    #[test]
    fn test_measure_scales_with_font_size() {
        let small = StyleSpec::new(10.0, FontWeight::Normal);
        let large = StyleSpec::new(20.0, FontWeight::Normal);
        let m = HelveticaMetrics;
        let w10 = m.measure("Launch", &small);
        let w20 = m.measure("Launch", &large);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider() {
        let m = HelveticaMetrics;
        let regular = StyleSpec::new(10.0, FontWeight::Normal);
        let bold = StyleSpec::new(10.0, FontWeight::Bold);
        assert!(m.measure("marketing", &bold) > m.measure("marketing", &regular));
    }

    #[test]
    fn test_space_width_in_mm() {
        // 278/1000 em at 10pt.
        let expected = 0.278 * 10.0 * MM_PER_PT;
        let got = HelveticaMetrics.measure(" ", &StyleSpec::new(10.0, FontWeight::Normal));
        assert!((got - expected).abs() < 1e-5);
    }

    #[test]
    fn test_max_glyph_width() {
        // '@' is the widest regular glyph at 1015/1000 em.
        let style = StyleSpec::new(10.0, FontWeight::Normal);
        let expected = 1.015 * 10.0 * MM_PER_PT;
        assert!((HelveticaMetrics.max_glyph_width(&style) - expected).abs() < 1e-5);
        assert_eq!(MonospaceMetrics::new(2.0).max_glyph_width(&style), 2.0);
    }

    #[test]
    fn test_monospace() {
        let m = MonospaceMetrics::new(2.0);
        assert_eq!(m.measure("abcd", &StyleSpec::default()), 8.0);
    }
}
