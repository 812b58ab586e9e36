//! Boundary / false-positive filter.
//!
//! Rejects candidates glued to a longer alphanumeric token, such as a digit
//! run inside a hexadecimal identifier or a slice of a longer digit run.

use super::candidate::Candidate;
use super::digits::is_digit;
use super::extension;

/// Returns whether `c` is a Latin letter (ASCII or the Latin supplements).
///
/// Letters of other scripts are not treated as word characters: Arabic or
/// Cyrillic text is routinely written flush against the digits of a number.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (c.is_alphabetic() && matches!(c as u32, 0x00C0..=0x024F | 0x1E00..=0x1EFF))
}

/// Characters that may not touch either end of a candidate.
pub fn is_word_char(c: char) -> bool {
    is_digit(c) || is_latin_letter(c)
}

/// Returns whether `candidate` stands on its own inside `text`.
///
/// A word character directly after the candidate is tolerated when it opens
/// an extension marker, as in `555-0100x12`.
pub fn is_standalone(text: &str, candidate: &Candidate<'_>) -> bool {
    if text[..candidate.start]
        .chars()
        .next_back()
        .is_some_and(is_word_char)
    {
        return false;
    }

    match text[candidate.end..].chars().next() {
        Some(c) if is_word_char(c) => extension::extract(text, candidate.end).is_some(),
        _ => true,
    }
}
