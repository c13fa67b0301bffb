//! Recursive descent parser for Nullang.
//!
//! [`parse`] turns a token list into a [`ParseOutput`]: the program's
//! top-level statements plus the arena that owns every node. Parsing stops
//! at the first syntax error.

mod cursor;
mod error;
mod grammar;

use nullang_ir::ast::Program;
use nullang_ir::{ExprArena, Position, Span, StringInterner, Token, TokenKind, TokenList};

use cursor::Cursor;
pub use error::ParseError;

/// Stand-in stream for an empty token list.
static EOF_ONLY: [Token; 1] = [Token::new(TokenKind::Eof, Span::DUMMY, Position::START)];

/// A successfully parsed source unit.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
}

/// Parser state: the token cursor and the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        let slice = if tokens.is_empty() {
            &EOF_ONLY[..]
        } else {
            tokens.as_slice()
        };
        Parser {
            cursor: Cursor::new(slice, interner),
            arena: ExprArena::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let mut body = Vec::new();
        loop {
            self.skip_empty_statements();
            if self.cursor.is_at_end() {
                break;
            }
            body.push(self.parse_stmt()?);
        }
        let body = self.arena.alloc_stmt_list(body);
        Ok(ParseOutput {
            program: Program { body },
            arena: self.arena,
        })
    }
}

/// Parse a lexed source unit.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let output = Parser::new(tokens, interner).parse_program()?;
    tracing::debug!(
        exprs = output.arena.expr_count(),
        stmts = output.arena.stmt_count(),
        "parsed"
    );
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
