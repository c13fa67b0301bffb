//! Parse errors.

use nullang_diagnostic::{Diagnostic, ErrorCode};
use nullang_ir::{Position, Span};

/// A syntax error at one token.
///
/// Parsing stops at the first error, so there is never more than one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// The offending token.
    pub span: Span,
    pub position: Position,
    /// Description of the offending token, e.g. ``"`)`"`` or `"end of input"`.
    pub found: String,
    /// What would have been accepted instead.
    pub expected: Vec<&'static str>,
    /// For unclosed delimiters, where the delimiter was opened.
    pub opened_at: Option<Span>,
}

impl ParseError {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        position: Position,
        found: impl Into<String>,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            position,
            found: found.into(),
            expected: Vec::new(),
            opened_at: None,
        }
    }

    #[must_use]
    pub fn with_expected(mut self, expected: &[&'static str]) -> Self {
        self.expected = expected.to_vec();
        self
    }

    #[must_use]
    pub fn with_opened_at(mut self, span: Span) -> Self {
        self.opened_at = Some(span);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.expected.as_slice() {
            [] => String::new(),
            [only] => format!("expected {only}"),
            _ => "unexpected token".to_string(),
        };
        let mut diagnostic = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        if let Some(opened_at) = self.opened_at {
            diagnostic = diagnostic.with_secondary_label(opened_at, "unclosed delimiter");
        }
        if self.expected.len() > 1 {
            diagnostic =
                diagnostic.with_note(format!("expected one of {}", self.expected.join(", ")));
        }
        diagnostic
    }
}
