//! # affirm-strings
//!
//! String comparison validators with human-readable failure diagnostics.
//!
//! A [`StringValidator`] runs one comparison through a fixed pipeline
//! (absence check, formatting-mode selection, whitespace hook, length
//! hook, mismatch check) and stops at the first failure. The comparison
//! policy — equality, containment, prefix/suffix, wildcard matching, with
//! or without case sensitivity — is supplied by a [`CompareStrategy`].
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm_strings::{BeEqual, Casing, StringValidator};
//!
//! let strategy = BeEqual::new(Casing::Sensitive);
//! let result = StringValidator::new(Some("hello"), Some("hello"), &strategy, "", &[]).validate();
//! assert!(result.is_ok());
//!
//! let failure = StringValidator::new(Some("hellp"), Some("hello"), &strategy, "", &[])
//!     .validate()
//!     .unwrap_err();
//! assert!(failure.message.contains("index 4"));
//! ```

mod strategy;
mod validator;

pub use strategy::affix::{EndWith, StartWith};
pub use strategy::contain::Contain;
pub use strategy::equality::BeEqual;
pub use strategy::wildcard::MatchWildcard;
pub use strategy::{Casing, CompareStrategy};
pub use validator::{HUMAN_READABLE_LENGTH, StringValidator};

// Re-export the core types callers need to construct validators and
// consume their outcomes.
pub use affirm::{AssertionFailure, FormatArg, Verification};
