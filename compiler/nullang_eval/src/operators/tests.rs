use nullang_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    evaluate_binary(op, left, right, Span::DUMMY)
}

#[test]
fn arithmetic() {
    assert_eq!(binary(BinaryOp::Add, &num(1.0), &num(2.0)).unwrap(), num(3.0));
    assert_eq!(binary(BinaryOp::Sub, &num(1.0), &num(2.0)).unwrap(), num(-1.0));
    assert_eq!(binary(BinaryOp::Mul, &num(3.0), &num(2.5)).unwrap(), num(7.5));
    assert_eq!(binary(BinaryOp::Div, &num(7.0), &num(2.0)).unwrap(), num(3.5));
    assert_eq!(binary(BinaryOp::Mod, &num(-7.0), &num(3.0)).unwrap(), num(-1.0));
}

#[test]
fn division_and_modulo_by_zero_fail() {
    let err = binary(BinaryOp::Div, &num(10.0), &num(0.0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.code(), ErrorCode::E2007);

    let err = binary(BinaryOp::Mod, &num(10.0), &num(-0.0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(err.code(), ErrorCode::E2007);
}

#[test]
fn string_concatenation_and_comparison() {
    let a = Value::string("ab");
    let b = Value::string("cd");
    assert_eq!(binary(BinaryOp::Add, &a, &b).unwrap(), Value::string("abcd"));
    assert_eq!(binary(BinaryOp::Lt, &a, &b).unwrap(), Value::Bool(true));
    assert_eq!(binary(BinaryOp::GtEq, &a, &b).unwrap(), Value::Bool(false));
}

#[test]
fn list_concatenation() {
    let a = Value::list(vec![num(1.0)]);
    let b = Value::list(vec![num(2.0), num(3.0)]);
    assert_eq!(
        binary(BinaryOp::Add, &a, &b).unwrap(),
        Value::list(vec![num(1.0), num(2.0), num(3.0)])
    );
}

#[test]
fn mixed_kinds_are_type_errors() {
    let err = binary(BinaryOp::Add, &num(1.0), &Value::string("a")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2003);
    assert_eq!(err.to_string(), "cannot apply `+` to number and string");

    let lists = Value::list(vec![]);
    let err = binary(BinaryOp::Lt, &lists, &lists).unwrap_err();
    assert_eq!(err.to_string(), "cannot apply `<` to list and list");

    let err = binary(BinaryOp::Sub, &Value::string("a"), &Value::string("b")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn equality_accepts_any_kinds() {
    assert_eq!(
        binary(BinaryOp::Eq, &num(1.0), &Value::string("1")).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        binary(BinaryOp::NotEq, &Value::Null, &Value::Bool(false)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(binary(BinaryOp::Eq, &Value::Null, &Value::Null).unwrap(), Value::Bool(true));
}

#[test]
fn unary() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &num(2.0), Span::DUMMY).unwrap(), num(-2.0));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Null, Span::DUMMY).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &num(0.0), Span::DUMMY).unwrap(),
        Value::Bool(false)
    );
    let err = evaluate_unary(UnaryOp::Neg, &Value::string("x"), Span::DUMMY).unwrap_err();
    assert_eq!(err.to_string(), "cannot apply `-` to string");
}

proptest! {
    #[test]
    fn small_integer_arithmetic_matches_host(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        let (x, y) = (num(f64::from(a)), num(f64::from(b)));
        prop_assert_eq!(binary(BinaryOp::Add, &x, &y).unwrap(), num(f64::from(a + b)));
        prop_assert_eq!(binary(BinaryOp::Sub, &x, &y).unwrap(), num(f64::from(a - b)));
        prop_assert_eq!(binary(BinaryOp::Mul, &x, &y).unwrap(), num(f64::from(a * b)));
        prop_assert_eq!(binary(BinaryOp::Lt, &x, &y).unwrap(), Value::Bool(a < b));
        if b != 0 {
            prop_assert_eq!(binary(BinaryOp::Mod, &x, &y).unwrap(), num(f64::from(a % b)));
        }
    }
}
