//! Wildcard pattern matching.
//!
//! Pattern language: `*` matches any run of characters (including none,
//! across line breaks), `?` matches exactly one character, everything
//! else is literal. Patterns are compiled to anchored regexes with all
//! literal runs escaped, so regex metacharacters in the expected string
//! are inert.

use affirm::{AssertionFailure, FormatArg, Verification};
use regex::Regex;

use super::{Casing, CompareStrategy};

/// Requires the whole subject to match the expected wildcard pattern.
#[derive(Debug, Clone, Copy)]
pub struct MatchWildcard {
    casing: Casing,
}

impl MatchWildcard {
    /// Wildcard matching with the given case handling.
    #[must_use]
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }
}

impl CompareStrategy for MatchWildcard {
    fn expectation_description(&self) -> &'static str {
        match self.casing {
            Casing::Sensitive => "Expected string to match ",
            Casing::Insensitive => "Expected string to match equivalent of ",
        }
    }

    fn validate_against_mismatch(
        &self,
        verification: &Verification,
        subject: &str,
        expected: &str,
    ) -> Result<(), AssertionFailure> {
        let source = wildcard_to_regex(expected, self.casing);
        let matcher = match Regex::new(&source) {
            Ok(matcher) => matcher,
            Err(err) => {
                // Escaped literals cannot produce an invalid regex, but a
                // pattern long enough to blow the compiled-size limit can.
                let rendered = err.to_string();
                return Err(verification.fail_with(
                    "Could not compile wildcard pattern {0}{reason}: {1}.",
                    &[
                        FormatArg::Str(Some(expected)),
                        FormatArg::Str(Some(rendered.as_str())),
                    ],
                ));
            }
        };
        if matcher.is_match(subject) {
            return Ok(());
        }
        let expectation = self.expectation_description();
        Err(verification.fail_with(
            &format!("{expectation}{{0}}{{reason}}, but found {{1}}."),
            &[FormatArg::Str(Some(expected)), FormatArg::Str(Some(subject))],
        ))
    }
}

fn wildcard_to_regex(pattern: &str, casing: Casing) -> String {
    let mut source = String::with_capacity(pattern.len() + 12);
    source.push_str("(?s)");
    if casing == Casing::Insensitive {
        source.push_str("(?i)");
    }
    source.push('^');

    let mut literal = String::new();
    for ch in pattern.chars() {
        match ch {
            '*' => {
                flush_literal(&mut source, &mut literal);
                source.push_str(".*");
            }
            '?' => {
                flush_literal(&mut source, &mut literal);
                source.push('.');
            }
            other => literal.push(other),
        }
    }
    flush_literal(&mut source, &mut literal);
    source.push('$');
    source
}

fn flush_literal(source: &mut String, literal: &mut String) {
    if !literal.is_empty() {
        source.push_str(&regex::escape(literal));
        literal.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::{Casing, wildcard_to_regex};

    #[test]
    fn test_translation_escapes_literals() {
        assert_eq!(
            wildcard_to_regex("a.b*c?d", Casing::Sensitive),
            "(?s)^a\\.b.*c.d$"
        );
    }

    #[test]
    fn test_translation_adds_case_flag() {
        assert_eq!(wildcard_to_regex("ab", Casing::Insensitive), "(?s)(?i)^ab$");
    }

    #[test]
    fn test_empty_pattern_matches_only_empty() {
        assert_eq!(wildcard_to_regex("", Casing::Sensitive), "(?s)^$");
    }
}
