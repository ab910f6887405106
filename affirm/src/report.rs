//! Assertion outcome collection and reporting.

use serde::Serialize;

use crate::failure::AssertionFailure;

/// Collects the outcomes of a series of validations.
///
/// Useful when a caller wants to run several checks and report all
/// failures at once instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct AssertionScope {
    checks_run: usize,
    failures: Vec<AssertionFailure>,
}

impl AssertionScope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one validation.
    pub fn check(&mut self, outcome: Result<(), AssertionFailure>) {
        self.checks_run += 1;
        if let Err(failure) = outcome {
            self.failures.push(failure);
        }
    }

    /// Whether every check recorded so far passed.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Finish the scope and produce a report.
    #[must_use]
    pub fn into_report(self) -> AssertionReport {
        let ok = self.failures.is_empty();
        AssertionReport {
            checks_run: self.checks_run,
            ok,
            failures: self.failures,
        }
    }
}

/// Result of a collected validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct AssertionReport {
    /// Number of validations recorded.
    pub checks_run: usize,
    /// Whether all recorded validations passed.
    pub ok: bool,
    /// The individual failures, in the order they were recorded.
    pub failures: Vec<AssertionFailure>,
}

impl AssertionReport {
    /// Number of failed validations.
    #[must_use]
    pub fn failures_count(&self) -> usize {
        self.failures.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn failure(message: &str) -> AssertionFailure {
        AssertionFailure::new(message.to_owned(), None, None)
    }

    #[test]
    fn test_empty_scope_is_ok() {
        let scope = AssertionScope::new();
        assert!(scope.ok());
        let report = scope.into_report();
        assert_eq!(report.checks_run, 0);
        assert!(report.ok);
        assert_eq!(report.failures_count(), 0);
    }

    #[test]
    fn test_scope_counts_passes_and_failures() {
        let mut scope = AssertionScope::new();
        scope.check(Ok(()));
        scope.check(Err(failure("first")));
        scope.check(Ok(()));
        scope.check(Err(failure("second")));

        assert!(!scope.ok());
        let report = scope.into_report();
        assert_eq!(report.checks_run, 4);
        assert!(!report.ok);
        assert_eq!(report.failures_count(), 2);
        assert_eq!(report.failures[0].message, "first");
        assert_eq!(report.failures[1].message, "second");
    }
}
