//! Message template and value formatting.
//!
//! Failure messages are built from templates with positional `{0}`, `{1}`…
//! placeholders plus the special `{reason}` placeholder. Values render
//! quoted and escaped when inline, or on their own line when the
//! verification context has switched to line-break formatting.

/// Rendering of an absent (null) string value in failure messages.
pub const NULL_MARKER: &str = "<null>";

/// A value substituted into a message template.
#[derive(Debug, Clone, Copy)]
pub enum FormatArg<'a> {
    /// A string value; `None` renders as [`NULL_MARKER`].
    Str(Option<&'a str>),
    /// A plain number (lengths, indexes). Always renders inline.
    Int(usize),
}

/// Render a single argument.
///
/// Present strings are double-quoted. Inline mode escapes control
/// characters so the message stays on one line; line-break mode emits the
/// raw value in quotes on its own line instead, which keeps multi-line
/// diffs readable. Numbers and [`NULL_MARKER`] render inline either way.
pub fn render_arg(arg: FormatArg<'_>, use_line_breaks: bool) -> String {
    match arg {
        FormatArg::Int(number) => number.to_string(),
        FormatArg::Str(None) => NULL_MARKER.to_owned(),
        FormatArg::Str(Some(value)) => {
            if use_line_breaks {
                format!("\n\"{value}\"")
            } else {
                format!("\"{}\"", escape_inline(value))
            }
        }
    }
}

fn escape_inline(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Expand a message template.
///
/// `{n}` placeholders are replaced by the n-th argument, `{reason}` by the
/// pre-normalized reason text. Placeholders that name a missing argument,
/// or anything else between braces, are left verbatim.
pub fn expand_template(
    template: &str,
    args: &[FormatArg<'_>],
    reason: &str,
    use_line_breaks: bool,
) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unterminated brace: keep the remainder verbatim.
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        if name == "reason" {
            out.push_str(reason);
        } else if let Some(arg) = name.parse::<usize>().ok().and_then(|i| args.get(i)) {
            out.push_str(&render_arg(*arg, use_line_breaks));
        } else {
            out.push('{');
            out.push_str(name);
            out.push('}');
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Normalize a user-supplied reason into the text inserted at `{reason}`.
///
/// Positional placeholders in the reason are expanded first (inline mode,
/// since the reason is always embedded mid-sentence). An empty reason
/// renders as nothing; otherwise the result reads `" because <reason>"`,
/// without doubling an existing leading "because".
pub fn normalize_reason(reason: &str, args: &[FormatArg<'_>]) -> String {
    let expanded = expand_template(reason, args, "", false);
    let trimmed = expanded.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.to_lowercase().starts_with("because") {
        format!(" {trimmed}")
    } else {
        format!(" because {trimmed}")
    }
}
