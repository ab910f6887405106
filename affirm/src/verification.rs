//! Verification context for a single validation run.

use crate::failure::AssertionFailure;
use crate::format::{self, FormatArg};

/// Carries the accumulated reason text, the raw values under comparison
/// and the formatting mode for one validation run.
///
/// A context is owned by exactly one validator instance and lives for a
/// single validation; it is never shared across validations.
#[derive(Debug, Clone, Default)]
pub struct Verification {
    reason: String,
    use_line_breaks: bool,
    expected: Option<String>,
    actual: Option<String>,
}

impl Verification {
    /// Seed a context with the user-supplied reason and its arguments.
    ///
    /// The reason is expanded and normalized once, here; `{reason}` in a
    /// failure template later inserts the result verbatim.
    #[must_use]
    pub fn because_of(reason: &str, args: &[FormatArg<'_>]) -> Self {
        Self {
            reason: format::normalize_reason(reason, args),
            use_line_breaks: false,
            expected: None,
            actual: None,
        }
    }

    /// Record the raw expected/actual values so every failure built from
    /// this context carries them, whatever its message template says.
    #[must_use]
    pub fn with_values(mut self, expected: Option<&str>, actual: Option<&str>) -> Self {
        self.expected = expected.map(str::to_owned);
        self.actual = actual.map(str::to_owned);
        self
    }

    /// Switch to multi-line diagnostic formatting.
    ///
    /// One-way for the lifetime of the context: once enabled it is never
    /// disabled again within the same validation run.
    #[must_use]
    pub fn using_line_breaks(mut self) -> Self {
        self.use_line_breaks = true;
        self
    }

    /// Whether multi-line diagnostic formatting is active.
    #[must_use]
    pub fn uses_line_breaks(&self) -> bool {
        self.use_line_breaks
    }

    /// Build an [`AssertionFailure`] from a message template.
    ///
    /// The template's `{n}` placeholders are filled from `args` under the
    /// context's formatting mode, `{reason}` from the seeded reason.
    #[must_use]
    pub fn fail_with(&self, template: &str, args: &[FormatArg<'_>]) -> AssertionFailure {
        let message = format::expand_template(template, args, &self.reason, self.use_line_breaks);
        AssertionFailure::new(message, self.expected.clone(), self.actual.clone())
    }
}
