//! Phone number extension detection.
//!
//! Looks directly past a validated number for a marker such as `ext.` or `x`
//! followed by a short run of digits.

use once_cell::sync::Lazy;
use regex::Regex;

use super::digits::{digit_class, is_digit, normalize_digits};

/// Longest extension accepted, in digits.
pub const MAX_EXTENSION_DIGITS: usize = 7;

/// An extension found after a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Byte offset just past the last extension digit.
    pub end: usize,
    /// Extension digits, normalized to ASCII.
    pub digits: String,
}

fn regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"(?i)^[ \t,;]{{0,3}}(?:extension|extn\.?|ext\.?|x\.?|#|доб\.?)[ \t.:]{{0,3}}([{}]{{1,{}}})",
            digit_class(),
            MAX_EXTENSION_DIGITS
        ))
        .expect("Valid extension regex")
    });
    &PATTERN
}

/// Matches an extension starting exactly at byte offset `from` of `text`.
///
/// Returns `None` when no marker follows, or when more digits follow than an
/// extension may hold.
pub fn extract(text: &str, from: usize) -> Option<Extension> {
    let rest = text.get(from..)?;
    let digits = regex().captures(rest)?.get(1)?;

    if rest[digits.end()..].chars().next().is_some_and(is_digit) {
        return None;
    }

    Some(Extension {
        end: from + digits.end(),
        digits: normalize_digits(digits.as_str()),
    })
}
