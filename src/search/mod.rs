//! Pull-based phone number search over a single text.
//!
//! [`PhoneNumberSearch`] walks the text left to right, running every candidate
//! through the boundary filter, the validator and the extension extractor. Work
//! only happens inside [`PhoneNumberSearch::has_next`]; failed candidates are
//! skipped silently and never surface as errors.
//!
//! Scanning works on byte offsets; reported offsets and
//! [`PhoneNumberSearch::position`] count characters.

mod options;
mod phone_match;

pub use options::SearchOptions;
pub use phone_match::PhoneNumberMatch;

use std::fmt;
use std::iter::FusedIterator;

use serde_json::Value;

use crate::domain::{
    boundary, extension, has_balanced_brackets, validator, Candidate, CandidateScanner,
    NumberingPlan, Rejection, ValidNumber,
};
use crate::error::{FinderError, FinderResult};

#[derive(Debug)]
enum SearchState {
    Scanning,
    /// A match waiting to be taken, with the byte offset it ends at.
    MatchReady {
        found: PhoneNumberMatch,
        end: usize,
    },
    Exhausted,
}

/// Converts byte offsets into character offsets.
///
/// Offsets are converted in increasing order during a search, so each call
/// only counts the characters since the previous one.
#[derive(Debug, Default)]
struct CharOffsets {
    byte: usize,
    chars: usize,
}

impl CharOffsets {
    fn chars_at(&mut self, text: &str, byte: usize) -> usize {
        if byte < self.byte {
            *self = Self::default();
        }
        self.chars += text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// A candidate that passed every check, in byte offsets.
struct Hit {
    number: ValidNumber,
    ext: Option<String>,
    start: usize,
    end: usize,
}

/// Why a candidate was skipped.
#[derive(Debug)]
enum Discard {
    Boundary,
    UnbalancedBrackets,
    Invalid(Rejection),
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discard::Boundary => write!(f, "touches an alphanumeric token"),
            Discard::UnbalancedBrackets => write!(f, "unbalanced brackets"),
            Discard::Invalid(rejection) => write!(f, "{}", rejection),
        }
    }
}

/// Lazy, single-pass search for phone numbers in one text.
///
/// The cursor only moves forward; once the end of the text is reached the
/// search stays exhausted. Searching the same text again takes a new instance.
///
/// ```
/// use phonefinder::{Metadata, PhoneNumberSearch, SearchOptions};
///
/// let text = "Call (213) 373-4253 today";
/// let options = SearchOptions::new().with_default_country("US");
/// let mut search = PhoneNumberSearch::new(text, options, Metadata::builtin()).unwrap();
///
/// assert!(search.has_next());
/// let found = search.next_match().unwrap();
/// assert_eq!(found.phone, "2133734253");
/// assert_eq!(found.as_str(text), "(213) 373-4253");
/// assert!(!search.has_next());
/// ```
pub struct PhoneNumberSearch<'t, 'm> {
    text: &'t str,
    options: SearchOptions,
    metadata: &'m dyn NumberingPlan,
    scanner: CandidateScanner,
    cursor: usize,
    position: usize,
    offsets: CharOffsets,
    state: SearchState,
}

impl<'t, 'm> PhoneNumberSearch<'t, 'm> {
    /// Creates a search positioned at the start of `text`.
    ///
    /// Fails with [`FinderError::UnknownCountry`] when the default country is
    /// not part of `metadata`.
    pub fn new(
        text: &'t str,
        options: SearchOptions,
        metadata: &'m dyn NumberingPlan,
    ) -> FinderResult<Self> {
        if let Some(country) = &options.default_country {
            if !metadata.has_region(country) {
                return Err(FinderError::UnknownCountry {
                    country: country.clone(),
                });
            }
        }

        Ok(Self {
            text,
            scanner: CandidateScanner::new(options.extended),
            options,
            metadata,
            cursor: 0,
            position: 0,
            offsets: CharOffsets::default(),
            state: SearchState::Scanning,
        })
    }

    /// Like [`PhoneNumberSearch::new`], failing with
    /// [`FinderError::MissingMetadata`] when no numbering plan is given.
    pub fn try_new(
        text: &'t str,
        options: SearchOptions,
        metadata: Option<&'m dyn NumberingPlan>,
    ) -> FinderResult<Self> {
        let metadata = metadata.ok_or(FinderError::MissingMetadata)?;
        Self::new(text, options, metadata)
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Character offset the next scan starts from.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether another match is available, scanning for it if needed.
    ///
    /// Repeated calls without an intervening [`next_match`] return the same
    /// answer and leave the pending match untouched.
    ///
    /// [`next_match`]: PhoneNumberSearch::next_match
    pub fn has_next(&mut self) -> bool {
        if let SearchState::Scanning = self.state {
            self.state = match self.find_next() {
                Some((found, end)) => SearchState::MatchReady { found, end },
                None => SearchState::Exhausted,
            };
        }
        matches!(self.state, SearchState::MatchReady { .. })
    }

    /// Returns the pending match and moves the cursor past it.
    pub fn next_match(&mut self) -> FinderResult<PhoneNumberMatch> {
        if !self.has_next() {
            return Err(FinderError::NoNextElement);
        }
        match std::mem::replace(&mut self.state, SearchState::Scanning) {
            SearchState::MatchReady { found, end } => {
                self.cursor = end;
                self.position = found.ends_at;
                Ok(found)
            }
            other => {
                self.state = other;
                Err(FinderError::NoNextElement)
            }
        }
    }

    /// Scans for the next match, returning it with its byte end.
    fn find_next(&mut self) -> Option<(PhoneNumberMatch, usize)> {
        let mut from = self.cursor;

        while let Some(candidate) = self.scanner.find_at(self.text, from) {
            if let Some(hit) = self.evaluate_with_prefixes(candidate) {
                let found = PhoneNumberMatch {
                    phone: hit.number.national,
                    country: hit.number.country,
                    ext: hit.ext,
                    starts_at: self.offsets.chars_at(self.text, hit.start),
                    ends_at: self.offsets.chars_at(self.text, hit.end),
                };
                log::debug!(
                    "found {} ({}) at {}..{}",
                    found.phone,
                    found.country.as_deref().unwrap_or("non-geographic"),
                    found.starts_at,
                    found.ends_at
                );
                self.cursor = hit.start;
                self.position = found.starts_at;
                return Some((found, hit.end));
            }
            from = next_char_boundary(self.text, candidate.start);
        }

        self.cursor = self.text.len();
        self.position = self.offsets.chars_at(self.text, self.text.len());
        None
    }

    /// Evaluates `candidate`, then each shorter prefix ending before a
    /// whitespace-separated group, until one passes.
    fn evaluate_with_prefixes(&self, candidate: Candidate<'_>) -> Option<Hit> {
        let mut attempt = Some(candidate);
        while let Some(current) = attempt {
            match self.evaluate(&current) {
                Ok(hit) => return Some(hit),
                Err(reason) => log::trace!(
                    "skipped candidate {:?} at {}: {}",
                    current.as_str(),
                    current.start,
                    reason
                ),
            }
            attempt = current.without_last_group();
        }
        None
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> Result<Hit, Discard> {
        if !boundary::is_standalone(self.text, candidate) {
            return Err(Discard::Boundary);
        }
        if !has_balanced_brackets(candidate.as_str()) {
            return Err(Discard::UnbalancedBrackets);
        }

        let number = validator::validate(
            candidate,
            self.options.default_country.as_deref(),
            self.options.leniency,
            self.metadata,
        )
        .map_err(Discard::Invalid)?;

        let (end, ext) = match extension::extract(self.text, candidate.end) {
            Some(ext) => (ext.end, Some(ext.digits)),
            None => (candidate.end, None),
        };

        Ok(Hit {
            number,
            ext,
            start: candidate.start,
            end,
        })
    }
}

impl Iterator for PhoneNumberSearch<'_, '_> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match().ok()
    }
}

impl FusedIterator for PhoneNumberSearch<'_, '_> {}

impl fmt::Debug for PhoneNumberSearch<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumberSearch")
            .field("options", &self.options)
            .field("position", &self.position)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    at + text[at..].chars().next().map_or(1, char::len_utf8)
}

/// Starts a lazy search over `text`.
pub fn search_phone_numbers<'t, 'm>(
    text: &'t str,
    options: SearchOptions,
    metadata: &'m dyn NumberingPlan,
) -> FinderResult<PhoneNumberSearch<'t, 'm>> {
    PhoneNumberSearch::new(text, options, metadata)
}

/// Finds every phone number in `text`, in order of appearance.
///
/// ```
/// use phonefinder::{find_numbers, Metadata, SearchOptions};
///
/// let text = "The number is +7 (800) 555-35-35 and not (213) 373-4253.";
/// let options = SearchOptions::new().with_default_country("US");
/// let found = find_numbers(text, &options, Metadata::builtin()).unwrap();
///
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].country.as_deref(), Some("RU"));
/// assert_eq!(found[1].country.as_deref(), Some("US"));
/// ```
pub fn find_numbers(
    text: &str,
    options: &SearchOptions,
    metadata: &dyn NumberingPlan,
) -> FinderResult<Vec<PhoneNumberMatch>> {
    Ok(PhoneNumberSearch::new(text, options.clone(), metadata)?.collect())
}

/// Finds every phone number from loosely-shaped arguments.
///
/// `text` must be a JSON string. `args` may hold a two-letter default country
/// and an options object in any order; see [`SearchOptions::from_loose_args`].
pub fn find_numbers_with(
    text: &Value,
    args: &[Value],
    metadata: Option<&dyn NumberingPlan>,
) -> FinderResult<Vec<PhoneNumberMatch>> {
    let text = text.as_str().ok_or(FinderError::InvalidArgumentType)?;
    let metadata = metadata.ok_or(FinderError::MissingMetadata)?;
    let options = SearchOptions::from_loose_args(args)?;
    find_numbers(text, &options, metadata)
}
