use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{ExprKind, StmtKind};
use crate::Span;

#[test]
fn alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(Expr::new(ExprKind::Number(42.0), Span::new(0, 2)));
    assert_eq!(arena.get_expr(id).kind, ExprKind::Number(42.0));
    assert_eq!(arena.expr_count(), 1);
}

#[test]
fn expr_lists_are_contiguous() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(Expr::new(ExprKind::Null, Span::DUMMY));
    let b = arena.alloc_expr(Expr::new(ExprKind::Bool(true), Span::DUMMY));
    let first = arena.alloc_expr_list([a, b]);
    let second = arena.alloc_expr_list([b]);
    assert_eq!(arena.get_expr_list(first), &[a, b]);
    assert_eq!(arena.get_expr_list(second), &[b]);
    assert!(arena.alloc_expr_list([]).is_empty());
}

#[test]
fn stmt_lists_and_params() {
    let mut arena = ExprArena::new();
    let s = arena.alloc_stmt(Stmt::new(StmtKind::Break, Span::new(0, 5)));
    let body = arena.alloc_stmt_list([s]);
    let params = arena.alloc_params([Name::new(3), Name::new(4)]);
    let f = arena.alloc_function(FunctionDef {
        name: None,
        params,
        body,
        span: Span::new(0, 10),
    });
    let def = *arena.get_function(f);
    assert_eq!(def.arity(), 2);
    assert_eq!(arena.get_stmt_list(def.body), &[s]);
    assert_eq!(arena.get_params(def.params), &[Name::new(3), Name::new(4)]);
}

#[test]
fn shared_arena_identity() {
    let a = SharedArena::new(ExprArena::new());
    let b = a.clone();
    let c = SharedArena::new(ExprArena::new());
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
}
