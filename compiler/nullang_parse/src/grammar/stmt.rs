//! Statement parsing.

use nullang_ir::ast::{Stmt, StmtKind};
use nullang_ir::{Span, StmtId, StmtRange, TokenKind};
use nullang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let | TokenKind::Var => self.parse_var_decl(),
            TokenKind::Fn if matches!(self.cursor.peek_kind_at(1), TokenKind::Ident(_)) => {
                let func = self.parse_function(true)?;
                let span = self.arena.get_function(func).span;
                Ok(self.alloc_stmt(StmtKind::Function(func), span))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Return => {
                let start = self.cursor.advance().span;
                let value = if self.at_statement_end() {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                let end = value.map_or(start, |v| self.arena.get_expr(v).span);
                self.expect_terminator()?;
                Ok(self.alloc_stmt(StmtKind::Return(value), start.merge(end)))
            }
            TokenKind::Break => {
                let span = self.cursor.advance().span;
                self.expect_terminator()?;
                Ok(self.alloc_stmt(StmtKind::Break, span))
            }
            TokenKind::Continue => {
                let span = self.cursor.advance().span;
                self.expect_terminator()?;
                Ok(self.alloc_stmt(StmtKind::Continue, span))
            }
            _ => {
                let expr = self.parse_expr()?;
                let span = self.arena.get_expr(expr).span;
                self.expect_terminator()?;
                Ok(self.alloc_stmt(StmtKind::Expr(expr), span))
            }
        }
    }

    fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    /// True at `;`, `}` or end of input.
    fn at_statement_end(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        )
    }

    /// `;` ends a simple statement. It may be left out before `}` or at end
    /// of input.
    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(&TokenKind::Semicolon) || self.at_statement_end() {
            Ok(())
        } else {
            Err(self.cursor.make_expect_error("`;`"))
        }
    }

    /// `let name = init;` or `var name;`
    fn parse_var_decl(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let (name, name_span) = self.cursor.expect_ident()?;
        let init = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let end = init.map_or(name_span, |i| self.arena.get_expr(i).span);
        self.expect_terminator()?;
        Ok(self.alloc_stmt(StmtKind::VarDecl { name, init }, start.merge(end)))
    }

    /// `if cond { ... } (else (if ... | { ... }))?`
    ///
    /// A trailing `else` belongs to the nearest `if`.
    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.expect(&TokenKind::If)?.span;
        let cond = self.parse_expr()?;
        let then_branch = self.parse_block()?;
        let mut end = self.arena.get_stmt(then_branch).span;

        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            let branch = if self.cursor.check(&TokenKind::If) {
                ensure_sufficient_stack(|| self.parse_if())?
            } else {
                self.parse_block()?
            };
            end = self.arena.get_stmt(branch).span;
            Some(branch)
        } else {
            None
        };

        Ok(self.alloc_stmt(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            start.merge(end),
        ))
    }

    /// `while cond { ... }`
    fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.expect(&TokenKind::While)?.span;
        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        let span = start.merge(self.arena.get_stmt(body).span);
        Ok(self.alloc_stmt(StmtKind::While { cond, body }, span))
    }

    /// `{ stmts }` as a block statement.
    fn parse_block(&mut self) -> Result<StmtId, ParseError> {
        let (body, span) = self.parse_block_body()?;
        Ok(self.alloc_stmt(StmtKind::Block(body), span))
    }

    /// `{ stmts }`, returning the statements and the span including braces.
    pub(crate) fn parse_block_body(&mut self) -> Result<(StmtRange, Span), ParseError> {
        let open = self.cursor.expect(&TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        loop {
            self.skip_empty_statements();
            if self.cursor.check(&TokenKind::RBrace) || self.cursor.is_at_end() {
                break;
            }
            stmts.push(self.parse_stmt()?);
        }
        let close = self.cursor.expect_closing(&TokenKind::RBrace, open)?.span;
        Ok((self.arena.alloc_stmt_list(stmts), open.merge(close)))
    }
}
