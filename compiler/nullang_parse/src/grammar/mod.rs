//! Grammar productions, split by statement and expression level.

mod expr;
mod operators;
mod stmt;

use nullang_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Skip stray `;` tokens between statements.
    pub(crate) fn skip_empty_statements(&mut self) {
        while self.cursor.eat(&TokenKind::Semicolon) {}
    }

    /// Parse `item (, item)* ,?` up to and including `close`.
    ///
    /// The opening delimiter at `opened_at` has already been consumed.
    /// Returns the items and the span of the closing delimiter.
    fn parse_comma_list<T>(
        &mut self,
        close: &TokenKind,
        opened_at: Span,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, Span), ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) && !self.cursor.is_at_end() {
            items.push(item(self)?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        let close_span = self.cursor.expect_closing(close, opened_at)?.span;
        Ok((items, close_span))
    }
}
