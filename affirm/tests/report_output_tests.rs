//! Integration tests for `affirm` report collection and output writers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use affirm::{AssertionScope, FormatArg, Verification, output};

fn failing_check(expected: &str, actual: &str) -> Result<(), affirm::AssertionFailure> {
    let verification = Verification::because_of("the fixture says so", &[])
        .with_values(Some(expected), Some(actual));
    Err(verification.fail_with(
        "Expected string to be {0}{reason}, but found {1}.",
        &[FormatArg::Str(Some(expected)), FormatArg::Str(Some(actual))],
    ))
}

#[test]
fn test_report_json_output() {
    let mut scope = AssertionScope::new();
    scope.check(Ok(()));
    scope.check(failing_check("alpha", "beta"));
    let report = scope.into_report();

    let mut buffer = Vec::new();
    output::write_json(&report, &mut buffer).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(json["checks_run"], 2);
    assert_eq!(json["ok"], false);
    assert_eq!(json["failures"].as_array().unwrap().len(), 1);
    assert_eq!(json["failures"][0]["expected"], "alpha");
    assert_eq!(json["failures"][0]["actual"], "beta");
    let message = json["failures"][0]["message"].as_str().unwrap();
    assert!(message.contains("because the fixture says so"), "got: {message}");
}

#[test]
fn test_report_human_output_with_failures() {
    let mut scope = AssertionScope::new();
    scope.check(failing_check("alpha", "beta"));
    let report = scope.into_report();

    let mut buffer = Vec::new();
    output::write_human(&report, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("STRING ASSERTION REPORT"), "got: {text}");
    assert!(text.contains("Checks run:  1"), "got: {text}");
    assert!(text.contains("Failures:    1"), "got: {text}");
    assert!(text.contains("Expected string to be \"alpha\""), "got: {text}");
    assert!(text.contains("\u{2717} 1 of 1 checks failed"), "got: {text}");
}

#[test]
fn test_report_human_output_all_passing() {
    let mut scope = AssertionScope::new();
    scope.check(Ok(()));
    scope.check(Ok(()));
    let report = scope.into_report();

    let mut buffer = Vec::new();
    output::write_human(&report, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("\u{2713} All 2 checks passed"), "got: {text}");
    assert!(!text.contains("FAILURES"), "got: {text}");
}
