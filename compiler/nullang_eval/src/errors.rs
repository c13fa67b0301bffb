//! Evaluation errors.
//!
//! Each failure mode is an [`EvalErrorKind`] variant; the `#[cold]` factory
//! functions below build the [`EvalError`] for it so call sites in the
//! interpreter stay one line long.

use std::fmt;

use nullang_diagnostic::{Diagnostic, ErrorCode, ErrorKind};
use nullang_ir::{format_number, Span};

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("`{name}` is already declared in this scope")]
    Redeclaration { name: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("cannot apply `{op}` to {left} and {right}")]
    InvalidBinaryOp {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("cannot apply `{op}` to {operand}")]
    InvalidUnaryOp {
        op: &'static str,
        operand: &'static str,
    },

    /// A builtin argument or index of the wrong kind.
    #[error("{operation} expects {expected}, found {found}")]
    TypeMismatch {
        operation: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value of type {type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("{callee} expects {expected} {}, got {got}", arguments(.expected))]
    ArityMismatch {
        callee: String,
        expected: usize,
        got: usize,
    },

    #[error("`{keyword}` outside of {context}")]
    ControlFlow {
        keyword: &'static str,
        context: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: String, len: usize },

    #[error("maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize },
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "error format arguments bind fields by reference"
)]
fn arguments(n: &usize) -> &'static str {
    if *n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Redeclaration { .. } => ErrorCode::E2001,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2002,
            EvalErrorKind::InvalidBinaryOp { .. }
            | EvalErrorKind::InvalidUnaryOp { .. }
            | EvalErrorKind::TypeMismatch { .. } => ErrorCode::E2003,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E2004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2005,
            EvalErrorKind::ControlFlow { .. } => ErrorCode::E2006,
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => ErrorCode::E2007,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E2008,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E2009,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EvalErrorKind::Redeclaration { .. } => "declared again here",
            EvalErrorKind::UndefinedVariable { .. } => "not found in this scope",
            EvalErrorKind::InvalidBinaryOp { .. }
            | EvalErrorKind::InvalidUnaryOp { .. }
            | EvalErrorKind::TypeMismatch { .. } => "wrong type",
            EvalErrorKind::NotCallable { .. } => "called here",
            EvalErrorKind::ArityMismatch { .. } => "wrong number of arguments",
            EvalErrorKind::ControlFlow { .. } => "not allowed here",
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => "divisor is zero",
            EvalErrorKind::IndexOutOfBounds { .. } => "index out of bounds",
            EvalErrorKind::StackOverflow { .. } => "call depth limit reached here",
        }
    }
}

/// One active call at the moment an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    pub call_span: Span,
}

/// Active calls at the error site, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        EvalBacktrace { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {} at {}", frame.name, frame.call_span)?;
        }
        Ok(())
    }
}

/// A runtime failure, attributed to the node that raised it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError {
            kind,
            span,
            backtrace: EvalBacktrace::default(),
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.kind.code().kind()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.label());
        for frame in self.backtrace.frames().iter().take(MAX_FRAME_LABELS) {
            diagnostic = diagnostic
                .with_secondary_label(frame.call_span, format!("in call to `{}`", frame.name));
        }
        if self.backtrace.frames().len() > MAX_FRAME_LABELS {
            diagnostic = diagnostic.with_note(format!(
                "{} more active calls not shown",
                self.backtrace.frames().len() - MAX_FRAME_LABELS
            ));
        }
        diagnostic
    }
}

const MAX_FRAME_LABELS: usize = 3;

#[cold]
pub fn redeclaration(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::Redeclaration {
            name: name.to_string(),
        },
        span,
    )
}

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedVariable {
            name: name.to_string(),
        },
        span,
    )
}

#[cold]
pub fn not_callable(type_name: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name }, span)
}

#[cold]
pub fn wrong_arg_count(callee: &str, expected: usize, got: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::ArityMismatch {
            callee: callee.to_string(),
            expected,
            got,
        },
        span,
    )
}

#[cold]
pub fn control_flow_outside(keyword: &'static str, context: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ControlFlow { keyword, context }, span)
}

#[cold]
pub fn index_out_of_bounds(index: f64, len: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::IndexOutOfBounds {
            index: format_number(index),
            len,
        },
        span,
    )
}

#[cold]
pub fn type_mismatch(
    operation: impl Into<String>,
    expected: &'static str,
    found: &'static str,
    span: Span,
) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch {
            operation: operation.into(),
            expected,
            found,
        },
        span,
    )
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { limit }, span)
}
