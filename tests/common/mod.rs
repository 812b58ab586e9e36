//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Sample texts and option presets
//! - A hand-written numbering plan for exercising the trait seam
//! - Invariant assertions over search results

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
