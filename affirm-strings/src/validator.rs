//! The string validation pipeline.

use affirm::{AssertionFailure, FormatArg, Verification};

use crate::strategy::CompareStrategy;

/// Strings at or below this length render inline in failure messages;
/// longer (or multi-line) values switch the run to line-break formatting.
pub const HUMAN_READABLE_LENGTH: usize = 8;

/// Compares a subject string against an expected string and produces a
/// consistent, human-readable failure when they differ.
///
/// One instance per comparison: it owns its [`Verification`] context
/// exclusively, runs [`validate`](Self::validate) once and is discarded.
pub struct StringValidator<'a> {
    subject: Option<&'a str>,
    expected: Option<&'a str>,
    strategy: &'a dyn CompareStrategy,
    verification: Verification,
}

impl<'a> StringValidator<'a> {
    /// Build a validator for one comparison.
    ///
    /// `reason` and `reason_args` become the "because ..." clause of any
    /// failure message; pass an empty reason for none.
    #[must_use]
    pub fn new(
        subject: Option<&'a str>,
        expected: Option<&'a str>,
        strategy: &'a dyn CompareStrategy,
        reason: &str,
        reason_args: &[FormatArg<'_>],
    ) -> Self {
        Self {
            subject,
            expected,
            strategy,
            verification: Verification::because_of(reason, reason_args)
                .with_values(expected, subject),
        }
    }

    /// Run the validation pipeline.
    ///
    /// The first stage that detects a problem reports it and ends the run;
    /// later stages never execute. When both strings are absent the whole
    /// validation is a no-op and passes.
    ///
    /// # Errors
    ///
    /// Returns the first failure detected by any pipeline stage.
    pub fn validate(mut self) -> Result<(), AssertionFailure> {
        let (subject, expected) = match (self.subject, self.expected) {
            (None, None) => return Ok(()),
            (Some(subject), Some(expected)) => (subject, expected),
            _ => return Err(self.fail_on_absence()),
        };

        if is_long_or_multiline(subject) || is_long_or_multiline(expected) {
            tracing::trace!("switching to line-break formatting");
            self.verification = self.verification.using_line_breaks();
        }

        self.strategy
            .validate_against_whitespace(&self.verification, subject, expected)?;
        self.strategy
            .validate_against_length_differences(&self.verification, subject, expected)?;
        self.strategy
            .validate_against_mismatch(&self.verification, subject, expected)
    }

    fn fail_on_absence(&self) -> AssertionFailure {
        tracing::trace!(
            subject_absent = self.subject.is_none(),
            expected_absent = self.expected.is_none(),
            "exactly one side of the comparison is absent"
        );
        let expectation = self.strategy.expectation_description();
        self.verification.fail_with(
            &format!("{expectation}{{0}}{{reason}}, but found {{1}}."),
            &[FormatArg::Str(self.expected), FormatArg::Str(self.subject)],
        )
    }
}

fn is_long_or_multiline(value: &str) -> bool {
    value.chars().count() > HUMAN_READABLE_LENGTH
        || value.contains('\n')
        || value.contains('\r')
}
