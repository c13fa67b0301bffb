//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, FunctionId, Name, Span};

/// Expression node.
#[derive(Copy, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    /// String literal, escapes already resolved.
    Str(Name),
    Bool(bool),
    Null,

    /// Variable reference.
    Ident(Name),

    /// `[a, b, c]`
    List(ExprRange),

    /// `target[index]`
    Index { target: ExprId, index: ExprId },

    Unary { op: UnaryOp, operand: ExprId },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `name = value`; the target is always a plain identifier.
    Assign { target: Name, value: ExprId },

    /// `func(args)`
    Call { func: ExprId, args: ExprRange },

    /// Anonymous `fn(params) { body }`.
    Function(FunctionId),
}
