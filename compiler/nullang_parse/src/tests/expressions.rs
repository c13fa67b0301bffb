use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{dump, parse_source};
use nullang_ir::ast::{BinaryOp, ExprKind, StmtKind};
use nullang_ir::StringInterner;

#[test]
fn multiplication_binds_tighter_than_addition() {
    let interner = StringInterner::new();
    let output = parse_source("1 + 2 * 3", &interner).unwrap();
    let stmts = output.arena.get_stmt_list(output.program.body);
    assert_eq!(stmts.len(), 1);

    let StmtKind::Expr(root) = output.arena.get_stmt(stmts[0]).kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { op, left, right } = output.arena.get_expr(root).kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(output.arena.get_expr(left).kind, ExprKind::Number(1.0));
    let ExprKind::Binary { op: inner, .. } = output.arena.get_expr(right).kind else {
        panic!("expected nested binary expression");
    };
    assert_eq!(inner, BinaryOp::Mul);
}

#[test]
fn precedence_ladder() {
    assert_eq!(
        dump("a || b && c == d < e + f * -g"),
        "(|| a (&& b (== c (< d (+ e (* f (- g)))))))"
    );
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(dump("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(dump("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(dump("a == b != c"), "(!= (== a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(dump("a = b = 3"), "(= a (= b 3))");
    assert_eq!(dump("x = 1 + 2"), "(= x (+ 1 2))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(dump("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn unary_operators_nest() {
    assert_eq!(dump("!!ok"), "(! (! ok))");
    assert_eq!(dump("--1"), "(- (- 1))");
    assert_eq!(dump("-a * b"), "(* (- a) b)");
}

#[test]
fn calls_and_indexing_chain() {
    assert_eq!(dump("f(1, 2)(3)"), "(call (call f 1 2) 3)");
    assert_eq!(dump("xs[0][1]"), "(index (index xs 0) 1)");
    assert_eq!(dump("make()[i + 1]"), "(index (call make) (+ i 1))");
    assert_eq!(dump("f(a,)"), "(call f a)");
}

#[test]
fn literals() {
    assert_eq!(
        dump(r#"[1, "two", true, false, null, 2.5]"#),
        r#"(list 1 "two" true false null 2.5)"#
    );
    assert_eq!(dump("[]"), "(list)");
}

#[test]
fn function_literals() {
    assert_eq!(dump("fn(a, b) { a + b }"), "(fn (a b) (+ a b))");
    assert_eq!(dump("fn() {}"), "(fn ())");
    assert_eq!(dump("fn(x) { x }(5)"), "(call (fn (x) x) 5)");
}

#[test]
fn spans_cover_operands() {
    let interner = StringInterner::new();
    let output = parse_source("foo + bar", &interner).unwrap();
    let stmts = output.arena.get_stmt_list(output.program.body);
    let StmtKind::Expr(root) = output.arena.get_stmt(stmts[0]).kind else {
        panic!("expected expression statement");
    };
    let span = output.arena.get_expr(root).span;
    assert_eq!((span.start, span.end), (0, 9));
}

#[test]
fn deeply_nested_parentheses_do_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(dump(&source), "1");
}

proptest! {
    #[test]
    fn parsing_is_deterministic(a in 0u32..100, b in 0u32..100, c in 0u32..100) {
        let source = format!("let r = {a} + {b} * ({c} - {a}); r = r / 2;");
        let interner = StringInterner::new();
        let first = parse_source(&source, &interner).unwrap();
        let second = parse_source(&source, &interner).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn left_associative_chains(ops in proptest::collection::vec(prop_oneof![Just('+'), Just('-')], 1..8)) {
        let mut source = String::from("0");
        let mut expected = String::from("0");
        for (i, op) in ops.iter().enumerate() {
            source.push_str(&format!(" {op} {}", i + 1));
            expected = format!("({op} {expected} {})", i + 1);
        }
        prop_assert_eq!(dump(&source), expected);
    }
}
