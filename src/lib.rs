//! Phone number extraction from free text.
//!
//! This library locates phone-number-like substrings in arbitrary text,
//! validates them against per-region numbering plans, infers the owning
//! country from the calling code when a `+` prefix is present, picks up
//! trailing extensions, and reports exact character offsets.
//!
//! # Features
//!
//! - **Lazy search**: [`PhoneNumberSearch`] yields matches one at a time, left
//!   to right, never overlapping
//! - **Country inference**: `+7 800 ...` resolves to RU, `+7 701 ...` to KZ
//! - **Non-Latin digits**: Arabic-Indic, Devanagari, fullwidth and other
//!   decimal scripts are normalized to ASCII
//! - **Extensions**: `ext. 123`, `x12`, `#7` and friends
//! - **False-positive suppression**: digit runs glued to identifiers or
//!   hashes are ignored
//! - **Pluggable numbering plans**: anything implementing [`NumberingPlan`]
//!
//! # Architecture
//!
//! - [`domain`]: scanner, boundary filter, validator, extension extractor,
//!   numbering-plan lookup
//! - [`search`]: the search state machine and the collecting façade
//! - [`redaction`]: masking of found numbers
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! use phonefinder::{find_numbers, Metadata, SearchOptions};
//!
//! let options = SearchOptions::new().with_default_country("US");
//! let found = find_numbers("2133734253", &options, Metadata::builtin()).unwrap();
//!
//! assert_eq!(found[0].phone, "2133734253");
//! assert_eq!(found[0].country.as_deref(), Some("US"));
//! assert_eq!((found[0].starts_at, found[0].ends_at), (0, 10));
//! ```
//!
//! # Examples
//!
//! ## Iterating lazily
//!
//! ```
//! use phonefinder::{search_phone_numbers, Metadata, SearchOptions};
//!
//! let text = "Date 02/17/2018 is not a number, but +7 (800) 555-35-35 ext. 123 is.";
//! let mut search = search_phone_numbers(text, SearchOptions::new(), Metadata::builtin()).unwrap();
//!
//! let found = search.next().unwrap();
//! assert_eq!(found.country.as_deref(), Some("RU"));
//! assert_eq!(found.ext.as_deref(), Some("123"));
//! assert!(search.next().is_none());
//! ```
//!
//! ## Redacting
//!
//! ```
//! use phonefinder::{redact_numbers, Metadata, SearchOptions};
//!
//! let options = SearchOptions::new().with_default_country("FR");
//! let result = redact_numbers("Tel: 231354125.", &options, Metadata::builtin(), '#').unwrap();
//! assert_eq!(result.text, "Tel: ##########");
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod redaction;
pub mod search;

// Re-exports for convenient access
pub use domain::{Leniency, Metadata, NumberingPlan};
pub use error::{FinderError, FinderResult};
pub use redaction::{redact_matches, redact_numbers, RedactionResult};
pub use search::{
    find_numbers, find_numbers_with, search_phone_numbers, PhoneNumberMatch, PhoneNumberSearch,
    SearchOptions,
};
