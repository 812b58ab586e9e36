//! Digit normalization across scripts.
//!
//! Every supported script encodes 0-9 as ten consecutive code points, so the
//! table only records where each script's zero lives.

/// Zero code point of every supported decimal digit script.
pub const DIGIT_ZEROS: &[char] = &[
    '0',        // ASCII
    '\u{0660}', // Arabic-Indic
    '\u{06F0}', // Extended Arabic-Indic
    '\u{07C0}', // NKo
    '\u{0966}', // Devanagari
    '\u{09E6}', // Bengali
    '\u{0A66}', // Gurmukhi
    '\u{0AE6}', // Gujarati
    '\u{0B66}', // Oriya
    '\u{0BE6}', // Tamil
    '\u{0C66}', // Telugu
    '\u{0CE6}', // Kannada
    '\u{0D66}', // Malayalam
    '\u{0E50}', // Thai
    '\u{0ED0}', // Lao
    '\u{0F20}', // Tibetan
    '\u{1040}', // Myanmar
    '\u{17E0}', // Khmer
    '\u{1810}', // Mongolian
    '\u{FF10}', // Fullwidth
];

/// Maps a digit of any supported script to its ASCII counterpart.
pub fn to_ascii_digit(c: char) -> Option<char> {
    let code = c as u32;
    DIGIT_ZEROS.iter().find_map(|&zero| {
        let offset = code.checked_sub(zero as u32)?;
        (offset < 10).then(|| char::from(b'0' + offset as u8))
    })
}

pub fn is_digit(c: char) -> bool {
    to_ascii_digit(c).is_some()
}

/// Keeps only the digits of `text`, converted to ASCII.
pub fn normalize_digits(text: &str) -> String {
    text.chars().filter_map(to_ascii_digit).collect()
}

/// Regex character class body matching every supported digit.
pub(crate) fn digit_class() -> String {
    DIGIT_ZEROS
        .iter()
        .map(|&zero| {
            let nine = char::from_u32(zero as u32 + 9).unwrap_or(zero);
            format!("\\x{{{:X}}}-\\x{{{:X}}}", zero as u32, nine as u32)
        })
        .collect()
}
