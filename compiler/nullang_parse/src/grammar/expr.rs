//! Expression parsing.
//!
//! Precedence, loosest first: assignment (right associative), `||`, `&&`,
//! equality, comparison, additive, multiplicative, prefix, then postfix
//! calls and indexing. Binary levels are left associative.

use nullang_diagnostic::ErrorCode;
use nullang_ir::ast::{BinaryOp, Expr, ExprKind, FunctionDef};
use nullang_ir::{ExprId, FunctionId, Name, Span, TokenKind};
use nullang_stack::ensure_sufficient_stack;

use super::operators::{
    match_additive_op, match_and_op, match_comparison_op, match_equality_op,
    match_multiplicative_op, match_or_op, match_unary_op,
};
use crate::{ParseError, Parser};

/// Tokens that can start an expression, for "expected expression" errors.
const EXPRESSION_STARTS: &[&str] = &[
    "number",
    "string",
    "identifier",
    "`true`",
    "`false`",
    "`null`",
    "`fn`",
    "`(`",
    "`[`",
    "`-`",
    "`!`",
];

type Level<'a> = fn(&mut Parser<'a>) -> Result<ExprId, ParseError>;

impl<'a> Parser<'a> {
    /// Parse a full expression.
    #[inline]
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// `target = value`, right associative.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_or()?;
        if !self.cursor.check(&TokenKind::Eq) {
            return Ok(target);
        }

        let eq = *self.cursor.current();
        let target_expr = *self.arena.get_expr(target);
        let ExprKind::Ident(name) = target_expr.kind else {
            return Err(ParseError::new(
                ErrorCode::E1005,
                "invalid assignment target: only variables can be assigned",
                eq.span,
                eq.position,
                "`=`",
            ));
        };
        self.cursor.advance();
        let value = self.parse_expr()?;
        let span = target_expr.span.merge(self.span_of(value));
        Ok(self.alloc(ExprKind::Assign { target: name, value }, span))
    }

    /// One left-associative binary level: `next (op next)*`.
    fn parse_binary_level(
        &mut self,
        next: Level<'a>,
        match_op: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(&self.cursor.current_kind()) {
            self.cursor.advance();
            let right = next(self)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_and, match_or_op)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_equality, match_and_op)
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_comparison, match_equality_op)
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_additive, match_comparison_op)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_unary, match_multiplicative_op)
    }

    /// Prefix `-` and `!`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = match_unary_op(&self.cursor.current_kind()) else {
            return self.parse_postfix();
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// Calls `f(a, b)` and indexing `xs[i]`, chained left to right.
    fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => {
                    let open = self.cursor.advance().span;
                    let (args, close) =
                        self.parse_comma_list(&TokenKind::RParen, open, Self::parse_expr)?;
                    let args = self.arena.alloc_expr_list(args);
                    let span = self.span_of(expr).merge(close);
                    expr = self.alloc(ExprKind::Call { func: expr, args }, span);
                }
                TokenKind::LBracket => {
                    let open = self.cursor.advance().span;
                    let index = self.parse_expr()?;
                    let close = self
                        .cursor
                        .expect_closing(&TokenKind::RBracket, open)?
                        .span;
                    let span = self.span_of(expr).merge(close);
                    expr = self.alloc(
                        ExprKind::Index {
                            target: expr,
                            index,
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = *self.cursor.current();
        let kind = match token.kind {
            TokenKind::Number(n) => ExprKind::Number(n),
            TokenKind::Str(s) => ExprKind::Str(s),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Null => ExprKind::Null,
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => return self.parse_grouped(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::Fn => {
                let func = self.parse_function(false)?;
                let span = self.arena.get_function(func).span;
                return Ok(self.alloc(ExprKind::Function(func), span));
            }
            _ => {
                let found = self.cursor.describe_current();
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!("expected expression, found {found}"),
                    token.span,
                    token.position,
                    found,
                )
                .with_expected(EXPRESSION_STARTS));
            }
        };
        self.cursor.advance();
        Ok(self.alloc(kind, token.span))
    }

    /// `( expr )`. Grouping leaves no node of its own.
    fn parse_grouped(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let inner = self.parse_expr()?;
        self.cursor.expect_closing(&TokenKind::RParen, open)?;
        Ok(inner)
    }

    /// `[a, b, c]`
    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let (items, close) =
            self.parse_comma_list(&TokenKind::RBracket, open, Self::parse_expr)?;
        let items = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::List(items), open.merge(close)))
    }

    /// `fn name? (params) { body }`, starting at `fn`.
    ///
    /// `named` requires the name (declarations); otherwise no name is
    /// allowed (literals).
    pub(crate) fn parse_function(
        &mut self,
        named: bool,
    ) -> Result<FunctionId, ParseError> {
        let start = self.cursor.expect(&TokenKind::Fn)?.span;
        let name = if named {
            Some(self.cursor.expect_ident()?.0)
        } else {
            None
        };

        let open = self.cursor.expect(&TokenKind::LParen)?.span;
        let mut seen: Vec<Name> = Vec::new();
        let (params, _) = self.parse_comma_list(&TokenKind::RParen, open, |p| {
            let token = *p.cursor.current();
            let (param, _) = p.cursor.expect_ident()?;
            if seen.contains(&param) {
                return Err(ParseError::new(
                    ErrorCode::E1006,
                    format!(
                        "duplicate parameter `{}`",
                        p.cursor.interner().lookup(param)
                    ),
                    token.span,
                    token.position,
                    p.cursor.interner().lookup(param),
                ));
            }
            seen.push(param);
            Ok(param)
        })?;
        let params = self.arena.alloc_params(params);

        let (body, body_span) = self.parse_block_body()?;
        Ok(self.arena.alloc_function(FunctionDef {
            name,
            params,
            body,
            span: start.merge(body_span),
        }))
    }
}
