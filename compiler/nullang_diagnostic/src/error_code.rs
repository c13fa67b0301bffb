//! Error codes and the kinds they report as.

use std::fmt;

/// The user-facing error taxonomy.
///
/// Every [`ErrorCode`] belongs to exactly one kind. The kind is what the REPL
/// prints first, e.g. `SyntaxError[E1003]: ...`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed token.
    LexicalError,
    /// Malformed grammar.
    SyntaxError,
    /// Name declared twice in one scope.
    RedeclarationError,
    /// Name not bound in any enclosing scope.
    UndefinedVariableError,
    /// Operation applied to values of the wrong kind.
    TypeError,
    /// Wrong number of call arguments.
    ArityError,
    /// `break`, `continue` or `return` outside their construct.
    ControlFlowError,
    /// Any other failure during evaluation.
    RuntimeError,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LexicalError => "LexicalError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RedeclarationError => "RedeclarationError",
            ErrorKind::UndefinedVariableError => "UndefinedVariableError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ArityError => "ArityError",
            ErrorKind::ControlFlowError => "ControlFlowError",
            ErrorKind::RuntimeError => "RuntimeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit is the stage:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: evaluator
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,
    /// Duplicate parameter name
    E1006,

    // Evaluation Errors (E2xxx)
    /// Name already declared in this scope
    E2001,
    /// Undefined variable
    E2002,
    /// Operand type mismatch
    E2003,
    /// Value is not callable
    E2004,
    /// Wrong number of arguments
    E2005,
    /// `break`/`continue`/`return` outside its construct
    E2006,
    /// Division or modulo by zero
    E2007,
    /// Index out of bounds
    E2008,
    /// Maximum call depth exceeded
    E2009,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
        }
    }

    /// The taxonomy entry this code reports under.
    pub const fn kind(self) -> ErrorKind {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004 => {
                ErrorKind::LexicalError
            }
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006 => ErrorKind::SyntaxError,
            ErrorCode::E2001 => ErrorKind::RedeclarationError,
            ErrorCode::E2002 => ErrorKind::UndefinedVariableError,
            ErrorCode::E2003 | ErrorCode::E2004 => ErrorKind::TypeError,
            ErrorCode::E2005 => ErrorKind::ArityError,
            ErrorCode::E2006 => ErrorKind::ControlFlowError,
            ErrorCode::E2007 | ErrorCode::E2008 | ErrorCode::E2009 => ErrorKind::RuntimeError,
        }
    }

    pub const fn is_lexer_error(self) -> bool {
        matches!(self.kind(), ErrorKind::LexicalError)
    }

    pub const fn is_parser_error(self) -> bool {
        matches!(self.kind(), ErrorKind::SyntaxError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
