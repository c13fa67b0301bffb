use pretty_assertions::assert_eq;

use super::parse_err;
use nullang_diagnostic::{ErrorCode, ErrorKind};
use nullang_ir::Position;

#[test]
fn missing_closing_brace_is_syntax_error() {
    let err = parse_err("{ print(1);");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.code.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.found, "end of input");
    assert_eq!(err.expected, vec!["`}`"]);
    assert_eq!(err.position, Position::new(1, 12));
    assert_eq!(err.opened_at.map(|s| s.start), Some(0));
}

#[test]
fn missing_closing_paren() {
    let err = parse_err("print(1");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.message, "unclosed delimiter: expected `)`, found end of input");
}

#[test]
fn missing_operand() {
    let err = parse_err("1 +");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "expected expression, found end of input");
    assert!(err.expected.contains(&"identifier"));
}

#[test]
fn missing_semicolon_between_statements() {
    let err = parse_err("x = 1 y = 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `;`, found identifier `y`");
    assert_eq!(err.position, Position::new(1, 7));
}

#[test]
fn invalid_assignment_target() {
    let err = parse_err("1 + 2 = 3;");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.position, Position::new(1, 7));
}

#[test]
fn duplicate_parameter() {
    let err = parse_err("fn f(a, b, a) {}");
    assert_eq!(err.code, ErrorCode::E1006);
    assert_eq!(err.message, "duplicate parameter `a`");
}

#[test]
fn declaration_needs_identifier() {
    let err = parse_err("let 5 = x;");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.message, "expected identifier, found number");
}

#[test]
fn if_body_must_be_block() {
    let err = parse_err("if x print(1);");
    assert_eq!(err.message, "expected `{`, found identifier `print`");
}

#[test]
fn unexpected_closing_token() {
    let err = parse_err("}");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.found, "`}`");
}

#[test]
fn diagnostic_carries_opening_delimiter() {
    let diag = parse_err("[1, 2").to_diagnostic();
    assert_eq!(diag.kind(), ErrorKind::SyntaxError);
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
}
