//! AST node definitions.
//!
//! Nodes are plain `Copy` data; children are arena handles. See
//! [`ExprArena`](crate::ExprArena) for storage and [`dump`] for a textual
//! rendering used by the CLI and tests.

pub mod dump;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{FunctionDef, Program, Stmt, StmtKind};
