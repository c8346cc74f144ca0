use std::fmt;

/// Byte range within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// All errors produced by timeframe.
///
/// Only two kinds exist: a time-frames string that fails grammar validation,
/// and exhaustion of the forward search — the latter cannot happen for a
/// schedule built from a validated string, so it surfaces as fatal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum TimeframeError {
    Invalid {
        message: String,
        span: Span,
        input: String,
        suggestion: Option<String>,
    },

    Exhausted {
        message: String,
    },
}

impl fmt::Display for TimeframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { message, .. } => write!(f, "{message}"),
            Self::Exhausted { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for TimeframeError {}

impl TimeframeError {
    pub fn invalid(
        message: impl Into<String>,
        span: Span,
        input: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        Self::Invalid {
            message: message.into(),
            span,
            input: input.into(),
            suggestion,
        }
    }

    pub fn exhausted(message: impl Into<String>) -> Self {
        Self::Exhausted {
            message: message.into(),
        }
    }

    /// True for caller-input errors (the boundary maps these to exit code 2).
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Format a rich error with underline and optional suggestion.
    pub fn display_rich(&self) -> String {
        match self {
            Self::Invalid {
                message,
                span,
                input,
                suggestion,
            } => format_span_error("error", message, span, input, suggestion.as_deref()),
            Self::Exhausted { message } => format!("error: {message}"),
        }
    }
}

fn format_span_error(
    prefix: &str,
    message: &str,
    span: &Span,
    input: &str,
    suggestion: Option<&str>,
) -> String {
    let mut out = format!("{prefix}: {message}\n");
    out.push_str(&format!("  {input}\n"));
    let padding = " ".repeat(span.start + 2);
    let underline = "^".repeat((span.end - span.start).max(1));
    out.push_str(&padding);
    out.push_str(&underline);
    if let Some(sug) = suggestion {
        out.push_str(&format!(" try: \"{sug}\""));
    }
    out
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
