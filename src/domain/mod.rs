//! Scanning and validation building blocks.
//!
//! Each submodule covers one stage of the search pipeline: digit
//! normalization, candidate scanning, the boundary filter, validation against a
//! numbering plan, and extension extraction. [`crate::search`] composes them.

pub mod boundary;
pub mod candidate;
pub mod digits;
pub mod extension;
pub mod metadata;
pub mod validator;

pub use candidate::{has_balanced_brackets, Candidate, CandidateScanner};
pub use digits::{normalize_digits, to_ascii_digit};
pub use extension::Extension;
pub use metadata::{Metadata, NumberingPlan, RegionPlan, NON_GEO_REGION};
pub use validator::{Leniency, Rejection, ValidNumber};
