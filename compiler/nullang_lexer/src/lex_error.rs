//! Lexer errors.

use nullang_diagnostic::{Diagnostic, ErrorCode};
use nullang_ir::{Position, Span};

/// A malformed token, reported at the offending source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A `"` with no closing quote on the same line. Reported at the
    /// opening quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
    #[error("invalid escape sequence `\\{found}`")]
    InvalidEscape { found: char },
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidNumber { .. } => ErrorCode::E0003,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0004,
        }
    }
}

impl LexError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::UnexpectedCharacter { .. } => "not valid here",
            LexErrorKind::InvalidEscape { .. } => "unknown escape",
            LexErrorKind::InvalidNumber { .. } => "malformed number",
        };
        let diagnostic = Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::InvalidEscape { .. } => {
                diagnostic.with_note("valid escapes are \\n \\t \\r \\0 \\\\ and \\\"")
            }
            LexErrorKind::UnterminatedString => {
                diagnostic.with_note("strings must be closed on the line they start")
            }
            _ => diagnostic,
        }
    }
}
