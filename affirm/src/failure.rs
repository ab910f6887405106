//! The assertion failure type.

use serde::Serialize;
use thiserror::Error;

/// A failed assertion: the fully rendered message plus the raw values
/// that were compared.
///
/// The `Display` output is `message` verbatim, so callers can surface the
/// failure directly (panic, collect, log). The raw values stay available
/// for tooling that wants to diff them itself; `None` means the value was
/// absent in the comparison.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{message}")]
#[non_exhaustive]
pub struct AssertionFailure {
    /// Fully rendered failure message, including the reason text.
    pub message: String,
    /// The expected value, if one was present.
    pub expected: Option<String>,
    /// The actual value under test, if one was present.
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Build a failure from a rendered message and the raw compared values.
    #[must_use]
    pub fn new(message: String, expected: Option<String>, actual: Option<String>) -> Self {
        Self {
            message,
            expected,
            actual,
        }
    }
}
