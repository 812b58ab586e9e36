//! Error types for the phone number finder.
//!
//! Only the first four variants are ever produced by a search itself. The rest
//! come from loading numbering-plan metadata or from malformed loose arguments.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for finder operations.
pub type FinderResult<T> = Result<T, FinderError>;

/// Error type for all finder operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The text argument of a loose call was not a string.
    #[error("A text for parsing must be a string.")]
    InvalidArgumentType,

    /// No numbering-plan metadata was supplied.
    #[error("`metadata` argument not passed")]
    MissingMetadata,

    /// The default country is not present in the numbering plan.
    #[error("Unknown country")]
    UnknownCountry { country: String },

    /// `next_match()` was called with no match pending.
    #[error("No next element")]
    NoNextElement,

    /// A positional argument of a loose call has an unrecognized shape.
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Numbering-plan metadata is malformed or inconsistent.
    #[error("Invalid numbering plan metadata: {reason}")]
    MetadataFormat { reason: String },

    /// A national number pattern failed to compile.
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Metadata file could not be read.
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<serde_json::Error> for FinderError {
    fn from(err: serde_json::Error) -> Self {
        Self::MetadataFormat {
            reason: err.to_string(),
        }
    }
}

impl From<regex::Error> for FinderError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
