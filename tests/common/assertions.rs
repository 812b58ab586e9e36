//! Custom assertions for search results.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

#![allow(dead_code)]

use phonefinder::PhoneNumberMatch;

/// Asserts that matches are ordered left to right and never overlap.
///
/// # Panics
/// Panics if two consecutive matches are out of order or overlap.
pub fn assert_ordered_non_overlapping(text: &str, matches: &[PhoneNumberMatch]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].ends_at <= pair[1].starts_at,
            "Matches overlap or are out of order in {:?}: {:?} then {:?}",
            text,
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that every match lies inside `text`, counted in characters.
///
/// # Panics
/// Panics if a match is empty, inverted, or out of bounds.
pub fn assert_offsets_in_bounds(text: &str, matches: &[PhoneNumberMatch]) {
    let length = text.chars().count();
    for found in matches {
        assert!(
            found.starts_at < found.ends_at && found.ends_at <= length,
            "Offsets {}..{} are invalid for text of {} characters",
            found.starts_at,
            found.ends_at,
            length
        );
        assert_eq!(
            found.as_str(text).chars().count(),
            found.ends_at - found.starts_at,
            "span of {:?} in {:?}",
            found,
            text
        );
    }
}

/// Asserts that `phone` and `ext` only contain ASCII digits.
///
/// # Panics
/// Panics on any other character.
pub fn assert_ascii_digits(matches: &[PhoneNumberMatch]) {
    for found in matches {
        assert!(
            !found.phone.is_empty() && found.phone.bytes().all(|b| b.is_ascii_digit()),
            "Phone '{}' should only contain ASCII digits",
            found.phone
        );
        if let Some(ext) = &found.ext {
            assert!(
                ext.bytes().all(|b| b.is_ascii_digit()),
                "Extension '{}' should only contain ASCII digits",
                ext
            );
        }
    }
}

/// Asserts a single match's fields in one go.
///
/// # Panics
/// Panics if any field differs.
pub fn assert_match(
    found: &PhoneNumberMatch,
    phone: &str,
    country: Option<&str>,
    starts_at: usize,
    ends_at: usize,
) {
    assert_eq!(found.phone, phone, "phone of {:?}", found);
    assert_eq!(found.country.as_deref(), country, "country of {:?}", found);
    assert_eq!(
        (found.starts_at, found.ends_at),
        (starts_at, ends_at),
        "offsets of {:?}",
        found
    );
}
