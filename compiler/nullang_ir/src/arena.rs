//! Flat storage for one parse's AST.

use std::sync::Arc;

use crate::ast::{Expr, FunctionDef, Stmt};
use crate::{ExprId, ExprRange, FunctionId, Name, ParamRange, StmtId, StmtRange};

/// Convert a table length to a `u32` handle index.
///
/// # Panics
/// Panics past `u32::MAX` entries; the lexer cannot produce that many tokens
/// from a source whose spans fit in `u32`.
#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

/// Arena owning every node of one parsed program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    functions: Vec<FunctionDef>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    params: Vec<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_function(&mut self, function: FunctionDef) -> FunctionId {
        let id = FunctionId::new(to_index(self.functions.len()));
        self.functions.push(function);
        id
    }

    #[inline]
    #[track_caller]
    pub fn get_function(&self, id: FunctionId) -> &FunctionDef {
        &self.functions[id.index()]
    }

    /// Store a list of expression handles contiguously.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(ids);
        ExprRange::new(start, to_index(self.expr_lists.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_index(self.stmt_lists.len());
        self.stmt_lists.extend(ids);
        StmtRange::new(start, to_index(self.stmt_lists.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(names);
        ParamRange::new(start, to_index(self.params.len()) - start)
    }

    #[inline]
    #[track_caller]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

/// Shared, immutable arena.
///
/// Function values keep the arena holding their body alive after the
/// source unit that defined them has finished evaluating.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// True when both handles point at the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
