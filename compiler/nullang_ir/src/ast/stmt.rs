//! Statement nodes and function definitions.

use std::fmt;

use crate::{ExprId, FunctionId, Name, ParamRange, Span, StmtId, StmtRange};

/// Statement node.
#[derive(Copy, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// Expression evaluated for its value or effect.
    Expr(ExprId),

    /// `let name = init;` or `var name = init;`. A missing initializer
    /// binds `null`.
    VarDecl { name: Name, init: Option<ExprId> },

    /// `fn name(params) { body }` declares `name` in the current scope.
    Function(FunctionId),

    /// `{ ... }` with its own scope.
    Block(StmtRange),

    /// `if cond { ... } else ...`; `else_branch` is a block or another `if`.
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },

    /// `while cond { ... }`
    While { cond: ExprId, body: StmtId },

    Return(Option<ExprId>),
    Break,
    Continue,
}

/// A function literal or declaration.
///
/// The body runs in the scope that binds the parameters, so it is stored as
/// a statement range rather than a block statement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FunctionDef {
    /// `None` for anonymous `fn(...)` literals.
    pub name: Option<Name>,
    pub params: ParamRange,
    pub body: StmtRange,
    pub span: Span,
}

impl FunctionDef {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A parsed source unit: its top-level statements.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: StmtRange,
}
