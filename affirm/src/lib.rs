//! # affirm
//!
//! Execution core for string assertions.
//!
//! This crate provides the machinery that assertion entry points build on:
//! a [`Verification`] context that accumulates the user-supplied reason and
//! the formatting mode for one validation run, the [`AssertionFailure`]
//! value a failed validation carries, and a report layer
//! ([`AssertionScope`] / [`AssertionReport`]) for collecting the outcomes
//! of many validations.
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm::{FormatArg, Verification};
//!
//! let verification = Verification::because_of("ids must line up", &[])
//!     .with_values(Some("abc"), Some("abd"));
//! let failure = verification.fail_with(
//!     "Expected string to be {0}{reason}, but found {1}.",
//!     &[FormatArg::Str(Some("abc")), FormatArg::Str(Some("abd"))],
//! );
//! assert_eq!(
//!     failure.to_string(),
//!     "Expected string to be \"abc\" because ids must line up, but found \"abd\".",
//! );
//! ```

mod failure;
mod format;
pub mod output;
mod report;
mod verification;


#[cfg(test)]
mod verification_tests;

// Re-export commonly used types
pub use failure::AssertionFailure;
pub use format::{FormatArg, NULL_MARKER};
pub use report::{AssertionReport, AssertionScope};
pub use verification::Verification;
