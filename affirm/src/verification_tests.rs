#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::format::FormatArg;
    use crate::verification::Verification;

    #[test]
    fn test_fail_with_assembles_message() {
        let verification = Verification::because_of("ids must line up", &[]);
        let failure = verification.fail_with(
            "Expected string to be {0}{reason}, but found {1}.",
            &[FormatArg::Str(Some("abc")), FormatArg::Str(Some("abd"))],
        );
        assert_eq!(
            failure.message,
            "Expected string to be \"abc\" because ids must line up, but found \"abd\"."
        );
    }

    #[test]
    fn test_fail_with_empty_reason_leaves_no_trace() {
        let verification = Verification::because_of("", &[]);
        let failure = verification.fail_with(
            "Expected string to be {0}{reason}, but found {1}.",
            &[FormatArg::Str(Some("a")), FormatArg::Str(None)],
        );
        assert_eq!(
            failure.message,
            "Expected string to be \"a\", but found <null>."
        );
    }

    #[test]
    fn test_with_values_recorded_on_failure() {
        let verification =
            Verification::because_of("", &[]).with_values(Some("want"), Some("got"));
        let failure = verification.fail_with("nope{reason}", &[]);
        assert_eq!(failure.expected.as_deref(), Some("want"));
        assert_eq!(failure.actual.as_deref(), Some("got"));
    }

    #[test]
    fn test_absent_values_stay_absent() {
        let verification = Verification::because_of("", &[]).with_values(None, Some("got"));
        let failure = verification.fail_with("nope", &[]);
        assert!(failure.expected.is_none());
        assert_eq!(failure.actual.as_deref(), Some("got"));
    }

    #[test]
    fn test_line_breaks_switch_is_one_way() {
        let verification = Verification::because_of("", &[]);
        assert!(!verification.uses_line_breaks());
        let verification = verification.using_line_breaks();
        assert!(verification.uses_line_breaks());
        // A second switch is a no-op, never a reset.
        let verification = verification.using_line_breaks();
        assert!(verification.uses_line_breaks());
    }

    #[test]
    fn test_line_breaks_change_value_rendering() {
        let verification = Verification::because_of("", &[]).using_line_breaks();
        let failure = verification.fail_with(
            "Expected string to be {0}, but found {1}.",
            &[
                FormatArg::Str(Some("first\nsecond")),
                FormatArg::Str(Some("other")),
            ],
        );
        assert_eq!(
            failure.message,
            "Expected string to be \n\"first\nsecond\", but found \n\"other\"."
        );
    }
}
