use super::*;

#[test]
fn keywords_map_to_kinds() {
    assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
    assert_eq!(TokenKind::keyword("var"), Some(TokenKind::Var));
    assert_eq!(TokenKind::keyword("null"), Some(TokenKind::Null));
    assert_eq!(TokenKind::keyword("letter"), None);
}

#[test]
fn categories() {
    assert_eq!(TokenKind::Number(1.0).category(), TokenCategory::NumberLiteral);
    assert_eq!(TokenKind::While.category(), TokenCategory::Keyword);
    assert_eq!(TokenKind::LtEq.category(), TokenCategory::Operator);
    assert_eq!(TokenKind::Semicolon.category(), TokenCategory::Delimiter);
    assert_eq!(TokenKind::Eof.category(), TokenCategory::EndOfInput);
}

#[test]
fn same_kind_ignores_payload() {
    assert!(TokenKind::Number(1.0).same_kind(&TokenKind::Number(2.0)));
    assert!(!TokenKind::Number(1.0).same_kind(&TokenKind::Plus));
}

#[test]
fn lexeme_slices_source() {
    let source = "let answer = 42;";
    let token = Token::new(
        TokenKind::Number(42.0),
        Span::new(13, 15),
        Position::new(1, 14),
    );
    assert_eq!(token.lexeme(source), "42");
    assert_eq!(token.position.to_string(), "1:14");
}
