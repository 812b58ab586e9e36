//! Candidate scanning.
//!
//! A candidate is an optional leading `+` (or an opening bracket) followed by
//! digits of any supported script interleaved with separators. Dots, dashes
//! and slashes right after the last digit belong to the candidate; trailing
//! whitespace and brackets do not.

use once_cell::sync::Lazy;
use regex::Regex;

use super::digits::{digit_class, is_digit};

/// Fewest digits a candidate may hold.
pub const MIN_CANDIDATE_DIGITS: usize = 3;

/// Most digits a candidate may hold: a 3-digit calling code plus the longest
/// national significant number.
pub const MAX_CANDIDATE_DIGITS: usize = 20;

/// Most separators allowed between two consecutive digits.
const MAX_SEPARATOR_RUN: usize = 4;

const BASE_SEPARATORS: &str = r" \t\-./()";
const EXTENDED_SEPARATORS: &str = r"\x{2010}-\x{2015}\x{2212}\x{30FC}\x{FF0D}~\x{2053}\x{223C}\x{FF5E}\[\]\x{FF0F}\x{FF0E}\x{FF08}\x{FF09}\x{FF3B}\x{FF3D}\x{00A0}\x{2007}\x{202F}\x{3000}";

const BASE_TRAILING: &str = r"\-./";
const EXTENDED_TRAILING: &str = r"\x{2010}-\x{2015}\x{2212}\x{30FC}\x{FF0D}~\x{2053}\x{223C}\x{FF5E}\x{FF0F}\x{FF0E}";

const BASE_PLUS: &str = r"\+";
const EXTENDED_PLUS: &str = r"[+\x{FF0B}]";

const BASE_OPEN: &str = r"\(";
const EXTENDED_OPEN: &str = r"[(\[\x{FF08}\x{FF3B}]";

/// A substring provisionally matching the phone number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last digit or trailing punctuation.
    pub end: usize,
    text: &'t str,
}

impl<'t> Candidate<'t> {
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Whether the candidate carries an international `+` prefix.
    pub fn is_international(&self) -> bool {
        self.text.starts_with(['+', '\u{FF0B}'])
    }

    /// The candidate cut before its last whitespace-separated group, ending on
    /// a digit.
    ///
    /// Returns `None` when there is no such group or fewer than
    /// [`MIN_CANDIDATE_DIGITS`] digits would remain.
    pub fn without_last_group(&self) -> Option<Candidate<'t>> {
        let cut = self.text.rfind(char::is_whitespace)?;
        let head = self.text[..cut].trim_end_matches(|c: char| !is_digit(c));
        if head.chars().filter(|&c| is_digit(c)).count() < MIN_CANDIDATE_DIGITS {
            return None;
        }
        Some(Candidate {
            start: self.start,
            end: self.start + head.len(),
            text: head,
        })
    }
}

fn build_pattern(separators: &str, trailing: &str, plus: &str, open: &str) -> Regex {
    let digits = digit_class();
    Regex::new(&format!(
        "(?:{plus}[{sep}]{{0,{run}}}|{open}[ \\t]{{0,{run}}})?[{dig}](?:[{sep}]{{0,{run}}}[{dig}]){{{min},{max}}}[{trail}]{{0,{run}}}",
        plus = plus,
        open = open,
        sep = separators,
        trail = trailing,
        dig = digits,
        run = MAX_SEPARATOR_RUN,
        min = MIN_CANDIDATE_DIGITS - 1,
        max = MAX_CANDIDATE_DIGITS - 1,
    ))
    .expect("Valid candidate regex")
}

fn base_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| build_pattern(BASE_SEPARATORS, BASE_TRAILING, BASE_PLUS, BASE_OPEN));
    &PATTERN
}

fn extended_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        build_pattern(
            &format!("{}{}", BASE_SEPARATORS, EXTENDED_SEPARATORS),
            &format!("{}{}", BASE_TRAILING, EXTENDED_TRAILING),
            EXTENDED_PLUS,
            EXTENDED_OPEN,
        )
    });
    &PATTERN
}

/// Finds grammar-matching candidates in a text.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScanner {
    pattern: &'static Regex,
}

impl CandidateScanner {
    /// Creates a scanner. `extended` widens the accepted separators.
    pub fn new(extended: bool) -> Self {
        let pattern = if extended {
            extended_regex()
        } else {
            base_regex()
        };
        Self { pattern }
    }

    /// Returns the leftmost candidate starting at or after byte offset `from`.
    pub fn find_at<'t>(&self, text: &'t str, from: usize) -> Option<Candidate<'t>> {
        if from > text.len() {
            return None;
        }
        self.pattern.find_at(text, from).map(|m| Candidate {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
    }
}

/// Returns whether every bracket in `candidate` is closed, in order.
pub fn has_balanced_brackets(candidate: &str) -> bool {
    let mut depth = 0usize;
    for c in candidate.chars() {
        match c {
            '(' | '[' | '\u{FF08}' | '\u{FF3B}' => depth += 1,
            ')' | ']' | '\u{FF09}' | '\u{FF3D}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}
