//! Exact and case-insensitive equality.

use affirm::{AssertionFailure, FormatArg, Verification};

use super::{Casing, CompareStrategy};

/// How many subject characters are shown around a mismatch index.
const MISMATCH_SNIPPET_LEN: usize = 8;

/// Requires the subject to equal the expected string.
///
/// Before the full comparison this strategy reports two classes of
/// differences that a printed message would hide: trailing whitespace on
/// either side, and plain length mismatches.
#[derive(Debug, Clone, Copy)]
pub struct BeEqual {
    casing: Casing,
}

impl BeEqual {
    /// Equality with the given case handling.
    #[must_use]
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }
}

impl CompareStrategy for BeEqual {
    fn expectation_description(&self) -> &'static str {
        match self.casing {
            Casing::Sensitive => "Expected string to be ",
            Casing::Insensitive => "Expected string to be equivalent to ",
        }
    }

    fn validate_against_whitespace(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let folded_subject = self.casing.fold(subject);
        let folded_expected = self.casing.fold(expected);
        if folded_subject == folded_expected {
            return Ok(());
        }

        let expectation = self.expectation_description();
        if folded_expected.trim_end() == folded_subject.as_ref() {
            return Err(verification.fail_with(
                &format!(
                    "{expectation}{{0}}{{reason}}, but it misses some extra whitespace at the end."
                ),
                &[FormatArg::Str(Some(expected))],
            ));
        }
        if folded_subject.trim_end() == folded_expected.as_ref() {
            return Err(verification.fail_with(
                &format!(
                    "{expectation}{{0}}{{reason}}, but it has unexpected whitespace at the end."
                ),
                &[FormatArg::Str(Some(expected))],
            ));
        }
        Ok(())
    }

    fn validate_against_length_differences(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let subject_length = subject.chars().count();
        let expected_length = expected.chars().count();
        if subject_length == expected_length {
            return Ok(());
        }
        Err(verification.fail_with(
            "Expected string with length {0}{reason}, but found string {1} with length {2}.",
            &[
                FormatArg::Int(expected_length),
                FormatArg::Str(Some(subject)),
                FormatArg::Int(subject_length),
            ],
        ))
    }

    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let folded_subject = self.casing.fold(subject);
        let folded_expected = self.casing.fold(expected);
        if folded_subject == folded_expected {
            return Ok(());
        }

        let index = index_of_first_mismatch(&folded_subject, &folded_expected);
        let snippet = mismatch_snippet(subject, index);
        let expectation = self.expectation_description();
        Err(verification.fail_with(
            &format!("{expectation}{{0}}{{reason}}, but {{1}} differs near {{2}} (index {{3}})."),
            &[
                FormatArg::Str(Some(expected)),
                FormatArg::Str(Some(subject)),
                FormatArg::Str(Some(snippet.as_str())),
                FormatArg::Int(index),
            ],
        ))
    }
}

/// Char index of the first difference; the length of the shorter string
/// when one is a prefix of the other.
fn index_of_first_mismatch(subject: &str, expected: &str) -> usize {
    subject
        .chars()
        .zip(expected.chars())
        .position(|(left, right)| left != right)
        .unwrap_or_else(|| subject.chars().count().min(expected.chars().count()))
}

fn mismatch_snippet(subject: &str, index: usize) -> String {
    subject.chars().skip(index).take(MISMATCH_SNIPPET_LEN).collect()
}
