//! Masking of found phone numbers.
//!
//! Turns search results back into text with every matched span blotted out,
//! extensions included.

use crate::domain::NumberingPlan;
use crate::error::FinderResult;
use crate::search::{find_numbers, PhoneNumberMatch, SearchOptions};

/// Default mask character.
pub const DEFAULT_MASK: char = '█';

/// Text with phone numbers masked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionResult {
    /// The input with every matched character replaced by the mask.
    pub text: String,

    /// Number of phone numbers masked.
    pub instances_redacted: usize,
}

impl RedactionResult {
    /// Returns true if any redactions were applied.
    pub fn has_redactions(&self) -> bool {
        self.instances_redacted > 0
    }
}

/// Replaces every character inside `matches` with `mask`.
///
/// `matches` must be ordered and non-overlapping, as produced by a search over
/// the same `text`.
pub fn redact_matches(text: &str, matches: &[PhoneNumberMatch], mask: char) -> RedactionResult {
    let mut out = String::with_capacity(text.len());
    let mut spans = matches.iter().peekable();

    for (offset, c) in text.chars().enumerate() {
        while spans.next_if(|m| m.ends_at <= offset).is_some() {}
        match spans.peek() {
            Some(m) if m.starts_at <= offset => out.push(mask),
            _ => out.push(c),
        }
    }

    RedactionResult {
        text: out,
        instances_redacted: matches.len(),
    }
}

/// Finds phone numbers in `text` and masks them.
pub fn redact_numbers(
    text: &str,
    options: &SearchOptions,
    metadata: &dyn NumberingPlan,
    mask: char,
) -> FinderResult<RedactionResult> {
    let matches = find_numbers(text, options, metadata)?;
    Ok(redact_matches(text, &matches, mask))
}
