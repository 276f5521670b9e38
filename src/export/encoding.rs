//! WinAnsi text encoding for the standard PDF fonts.

use unicode_normalization::UnicodeNormalization;

/// Byte written for characters WinAnsiEncoding cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Encode text for a WinAnsiEncoding font.
///
/// Text is normalised to NFC first so that decomposed accents combine
/// into their Latin-1 forms; anything still outside the code page becomes
/// [`REPLACEMENT`].
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.nfc().map(winansi_byte).collect()
}

/// Whether every character of `text` survives encoding.
pub fn is_winansi(text: &str) -> bool {
    text.nfc()
        .all(|c| c == REPLACEMENT as char || winansi_byte(c) != REPLACEMENT)
}

fn winansi_byte(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
        _ => cp1252_high(c).unwrap_or(REPLACEMENT),
    }
}

/// Characters Windows-1252 places in 0x80-0x9F.
fn cp1252_high(c: char) -> Option<u8> {
    let byte = match c {
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
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
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
    };
    Some(byte)
}
