//! Source text to value in one call.

use nullang_diagnostic::{Diagnostic, ErrorKind};
use nullang_ir::Span;
use nullang_lexer::LexError;
use nullang_parse::ParseError;

use crate::{EvalError, Interpreter, Value};

/// A failure from any stage of the pipeline.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(err) => err.kind.code().kind(),
            Error::Parse(err) => err.code.kind(),
            Error::Eval(err) => err.error_kind(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => err.span,
            Error::Parse(err) => err.span,
            Error::Eval(err) => err.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.to_diagnostic(),
            Error::Parse(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl Interpreter {
    /// Lex, parse and evaluate `source` as one unit.
    pub fn run_source(&mut self, source: &str) -> Result<Value, Error> {
        let tokens = nullang_lexer::lex(source, self.interner())?;
        let parsed = nullang_parse::parse(&tokens, self.interner())?;
        Ok(self.run(parsed)?)
    }
}
