//! Prefix and suffix checks.
//!
//! Both strategies override the length pre-check: an expected affix longer
//! than the subject can never match, and "is too short" reads better than
//! a generic mismatch at index 0.

use affirm::{AssertionFailure, FormatArg, Verification};

use super::{Casing, CompareStrategy};

/// Requires the subject to start with the expected string.
#[derive(Debug, Clone, Copy)]
pub struct StartWith {
    casing: Casing,
}

impl StartWith {
    /// Prefix check with the given case handling.
    #[must_use]
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }
}

impl CompareStrategy for StartWith {
    fn expectation_description(&self) -> &'static str {
        match self.casing {
            Casing::Sensitive => "Expected string to start with ",
            Casing::Insensitive => "Expected string to start with equivalent of ",
        }
    }

    fn validate_against_length_differences(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        fail_if_too_short(verification, subject, expected, self.expectation_description())
    }

    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let folded_subject = self.casing.fold(subject);
        let folded_expected = self.casing.fold(expected);
        if folded_subject.starts_with(folded_expected.as_ref()) {
            return Ok(());
        }
        Err(fail_mismatch(
            verification,
            subject,
            expected,
            self.expectation_description(),
        ))
    }
}

/// Requires the subject to end with the expected string.
#[derive(Debug, Clone, Copy)]
pub struct EndWith {
    casing: Casing,
}

impl EndWith {
    /// Suffix check with the given case handling.
    #[must_use]
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }
}

impl CompareStrategy for EndWith {
    fn expectation_description(&self) -> &'static str {
        match self.casing {
            Casing::Sensitive => "Expected string to end with ",
            Casing::Insensitive => "Expected string to end with equivalent of ",
        }
    }

    fn validate_against_length_differences(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        fail_if_too_short(verification, subject, expected, self.expectation_description())
    }

    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let folded_subject = self.casing.fold(subject);
        let folded_expected = self.casing.fold(expected);
        if folded_subject.ends_with(folded_expected.as_ref()) {
            return Ok(());
        }
        Err(fail_mismatch(
            verification,
            subject,
            expected,
            self.expectation_description(),
        ))
    }
}

fn fail_if_too_short(
    verification: &Verification,
    subject: &str,
    expected: &str,
    expectation: &str,
) -> Result<(), AssertionFailure> {
    if expected.chars().count() <= subject.chars().count() {
        return Ok(());
    }
    Err(verification.fail_with(
        &format!("{expectation}{{0}}{{reason}}, but {{1}} is too short."),
        &[FormatArg::Str(Some(expected)), FormatArg::Str(Some(subject))],
    ))
}

fn fail_mismatch(
    verification: &Verification,
    subject: &str,
    expected: &str,
    expectation: &str,
) -> AssertionFailure {
    verification.fail_with(
        &format!("{expectation}{{0}}{{reason}}, but found {{1}}."),
        &[FormatArg::Str(Some(expected)), FormatArg::Str(Some(subject))],
    )
}
