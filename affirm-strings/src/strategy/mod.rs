//! Comparison strategies for string validation.
//!
//! Each strategy supplies the comparison policy for one kind of assertion:
//! the phrase that opens its failure messages, optional whitespace and
//! length pre-checks, and the mismatch check itself. The validator drives
//! the pipeline; strategies only decide pass or fail per stage.

pub mod affix;
pub mod contain;
pub mod equality;
pub mod wildcard;

use std::borrow::Cow;

use affirm::{AssertionFailure, Verification};

/// Case handling for comparisons.
///
/// Insensitive comparison folds both sides with `str::to_lowercase`;
/// it is not locale-aware and performs no Unicode normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    /// Compare exactly as written.
    #[default]
    Sensitive,
    /// Compare after lowercase folding.
    Insensitive,
}

impl Casing {
    pub(crate) fn fold(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(value),
            Self::Insensitive => Cow::Owned(value.to_lowercase()),
        }
    }
}

/// The policy hooks a string validation pipeline dispatches to.
///
/// `validate_against_whitespace` and `validate_against_length_differences`
/// default to no-ops; strategies override them to report problems that a
/// printed message would otherwise hide (invisible trailing whitespace,
/// length differences). `validate_against_mismatch` is the comparison
/// itself and must be supplied by every strategy.
pub trait CompareStrategy {
    /// Short phrase opening every failure message for this strategy,
    /// e.g. `"Expected string to be "`.
    fn expectation_description(&self) -> &'static str;

    /// Detect differences that are only whitespace. Default: no check.
    ///
    /// # Errors
    ///
    /// Returns a failure when the strings differ only by whitespace that
    /// would be invisible in a printed message.
    fn validate_against_whitespace(
        &self,
        _verification: &Verification,
        _subject: &str,
        _expected: &str,
    ) -> Result<(), AssertionFailure> {
        Ok(())
    }

    /// Compare lengths before the full content comparison. Default: no check.
    ///
    /// # Errors
    ///
    /// Returns a failure describing a length mismatch.
    fn validate_against_length_differences(
        &self,
        _verification: &Verification,
        _subject: &str,
        _expected: &str,
    ) -> Result<(), AssertionFailure> {
        Ok(())
    }

    /// The comparison itself, per this strategy's semantics.
    ///
    /// # Errors
    ///
    /// Returns a failure when the subject does not satisfy the strategy's
    /// comparison semantics against the expected string.
    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure>;
}
