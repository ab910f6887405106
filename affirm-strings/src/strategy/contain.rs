//! Substring containment.

use affirm::{AssertionFailure, FormatArg, Verification};

use super::{Casing, CompareStrategy};

/// Requires the subject to contain the expected string as a substring.
#[derive(Debug, Clone, Copy)]
pub struct Contain {
    casing: Casing,
}

impl Contain {
    /// Containment with the given case handling.
    #[must_use]
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }
}

impl CompareStrategy for Contain {
    fn expectation_description(&self) -> &'static str {
        match self.casing {
            Casing::Sensitive => "Expected string to contain ",
            Casing::Insensitive => "Expected string to contain equivalent of ",
        }
    }

    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let folded_subject = self.casing.fold(subject);
        let folded_expected = self.casing.fold(expected);
        if folded_subject.contains(folded_expected.as_ref()) {
            return Ok(());
        }
        let expectation = self.expectation_description();
        Err(verification.fail_with(
            &format!("{expectation}{{0}}{{reason}}, but found {{1}}."),
            &[FormatArg::Str(Some(expected)), FormatArg::Str(Some(subject))],
        ))
    }
}
