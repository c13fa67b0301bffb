//! Token cursor.
//!
//! Wraps the token slice with lookahead, consumption and `expect` helpers.
//! The slice always ends with `Eof`, and the cursor never moves past it.

use nullang_diagnostic::ErrorCode;
use nullang_ir::{Name, Span, StringInterner, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// `tokens` must be non-empty and end with `Eof`, as produced by the lexer.
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)),
            "token stream must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.pos.min(tokens.len() - 1)]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token `n` positions ahead, saturating at `Eof`.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// True when the current token has the same kind as `kind`, ignoring
    /// literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume and return the current token. Stays on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind.display_name()))
        }
    }

    /// Like [`expect`](Self::expect) for a closing delimiter; reaching end
    /// of input reports the delimiter opened at `opened_at` as unclosed.
    pub fn expect_closing(
        &mut self,
        kind: &TokenKind,
        opened_at: Span,
    ) -> Result<&'a Token, ParseError> {
        if self.is_at_end() && !self.check(kind) {
            let found = self.describe_current();
            let token = self.current();
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!(
                    "unclosed delimiter: expected {}, found {found}",
                    kind.display_name()
                ),
                token.span,
                token.position,
                found,
            )
            .with_expected(&[kind.display_name()])
            .with_opened_at(opened_at));
        }
        self.expect(kind)
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            let mut error = self.make_expect_error("identifier");
            error.code = ErrorCode::E1004;
            Err(error)
        }
    }

    /// Describe the current token for "found X" messages, including the
    /// text of identifiers.
    pub fn describe_current(&self) -> String {
        match self.current_kind() {
            TokenKind::Ident(name) => format!("identifier `{}`", self.interner.lookup(name)),
            kind => kind.display_name().to_string(),
        }
    }

    /// Error for the current token when `expected` was required.
    #[cold]
    #[inline(never)]
    pub fn make_expect_error(&self, expected: &'static str) -> ParseError {
        let found = self.describe_current();
        let token = self.current();
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {found}"),
            token.span,
            token.position,
            found,
        )
        .with_expected(&[expected])
    }
}
