//! Error handling tests.
//!
//! These tests verify the user-visible messages of every error variant and
//! the conversions from underlying library errors.

use phonefinder::error::{FinderError, FinderResult};
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

#[test]
fn test_fixed_messages() {
    assert_eq!(
        FinderError::InvalidArgumentType.to_string(),
        "A text for parsing must be a string."
    );
    assert_eq!(
        FinderError::MissingMetadata.to_string(),
        "`metadata` argument not passed"
    );
    assert_eq!(
        FinderError::UnknownCountry {
            country: "ZZ".to_string()
        }
        .to_string(),
        "Unknown country"
    );
    assert_eq!(FinderError::NoNextElement.to_string(), "No next element");
}

#[test]
fn test_invalid_input_display() {
    let err = FinderError::InvalidInput {
        parameter: "options".to_string(),
        reason: "unknown variant `STRICT`".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("options"));
    assert!(display.contains("STRICT"));
}

#[test]
fn test_pattern_error_display() {
    let err = FinderError::PatternError {
        pattern: "[0-9".to_string(),
        reason: "unclosed character class".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("[0-9"));
    assert!(display.contains("unclosed"));
}

#[test]
fn test_io_error_display_and_source() {
    let err = FinderError::Io {
        path: PathBuf::from("/test/plan.json"),
        source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
    };

    let display = err.to_string();
    assert!(display.contains("/test/plan.json"));
    assert!(display.contains("file not found"));
    assert!(err.source().is_some());
}

#[test]
fn test_search_errors_have_no_source() {
    assert!(FinderError::NoNextElement.source().is_none());
    assert!(FinderError::MissingMetadata.source().is_none());
}

#[test]
fn test_from_serde_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: FinderError = json_err.into();
    assert!(matches!(err, FinderError::MetadataFormat { .. }));
}

#[test]
#[allow(clippy::invalid_regex)]
fn test_from_regex_error() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    let err: FinderError = regex_err.into();
    assert!(matches!(err, FinderError::PatternError { .. }));
}

#[test]
fn test_error_propagation() {
    fn load() -> FinderResult<()> {
        Err(FinderError::MissingMetadata)
    }

    fn wrapper() -> FinderResult<()> {
        load()?;
        Ok(())
    }

    assert!(matches!(wrapper(), Err(FinderError::MissingMetadata)));
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FinderError>();
}
