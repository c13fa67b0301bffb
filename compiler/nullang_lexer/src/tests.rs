use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner)
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn lex_err(source: &str) -> LexError {
    let interner = StringInterner::new();
    lex(source, &interner).unwrap_err()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t // only a comment"), vec![TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    let interner = StringInterner::new();
    let tokens = lex("let var fn letter _x1", &interner).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::Ident(interner.intern("letter")));
    assert_eq!(tokens[4].kind, TokenKind::Ident(interner.intern("_x1")));
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn operators_use_maximal_munch() {
    assert_eq!(
        kinds("<= < == = != ! >= > && ||"),
        vec![
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Bang,
            TokenKind::GtEq,
            TokenKind::Gt,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("==="),
        vec![TokenKind::EqEq, TokenKind::Eq, TokenKind::Eof]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("0 42 3.25 1_000"),
        vec![
            TokenKind::Number(0.0),
            TokenKind::Number(42.0),
            TokenKind::Number(3.25),
            TokenKind::Number(1000.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn strings_resolve_escapes() {
    let interner = StringInterner::new();
    let tokens = lex(r#""a\tb\n\"q\"\\""#, &interner).unwrap();
    let TokenKind::Str(name) = tokens[0].kind else {
        panic!("expected string, got {:?}", tokens[0].kind);
    };
    assert_eq!(interner.lookup(name), "a\tb\n\"q\"\\");
}

#[test]
fn repeated_string_literals_share_one_entry() {
    let interner = StringInterner::new();
    let first = lex(r#""hello""#, &interner).unwrap();
    let before = interner.len();
    let second = lex(r#""hello" "hello""#, &interner).unwrap();
    assert_eq!(first[0].kind, second[0].kind);
    assert_eq!(second[0].kind, second[1].kind);
    assert_eq!(interner.len(), before);
}

#[test]
fn positions_track_lines_and_columns() {
    let interner = StringInterner::new();
    let source = "let x = 1;\n  print(x);";
    let tokens = lex(source, &interner).unwrap();
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[5].position, Position::new(2, 3));
    assert_eq!(tokens[5].lexeme(source), "print");
    let eof = tokens.iter().last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position, Position::new(2, 12));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("1 // one\n2"),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
    );
}

#[test]
fn unterminated_string_reports_opening_quote() {
    let err = lex_err("let s = \"abc");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span.start, 8);
    assert_eq!(err.position, Position::new(1, 9));
}

#[test]
fn string_cannot_span_lines() {
    let err = lex_err("\"abc\ndef\"");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position, Position::new(1, 1));
}

#[test]
fn unexpected_character() {
    let err = lex_err("1 + @");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '@' });
    assert_eq!(err.position, Position::new(1, 5));
    assert_eq!(err.to_string(), "unexpected character '@' at 1:5");
}

#[test]
fn lone_ampersand_is_rejected() {
    let err = lex_err("a & b");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '&' });
}

#[test]
fn invalid_escape_points_at_backslash() {
    let err = lex_err(r#"x = "ok\q";"#);
    assert_eq!(err.kind, LexErrorKind::InvalidEscape { found: 'q' });
    assert_eq!(err.span, Span::new(7, 9));
    assert_eq!(err.position, Position::new(1, 8));
}

#[test]
fn iterator_stops_after_first_error() {
    let interner = StringInterner::new();
    let items: Vec<_> = tokenize("1 @ 2", &interner).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn iterator_is_lazy_and_restartable() {
    let interner = StringInterner::new();
    let mut first = tokenize("a b @", &interner);
    assert!(matches!(first.next(), Some(Ok(_))));
    let again: Vec<_> = tokenize("a b @", &interner).take(2).collect();
    assert!(again.iter().all(Result::is_ok));
}

#[test]
fn errors_convert_to_lexical_diagnostics() {
    use nullang_diagnostic::{ErrorCode, ErrorKind};

    let diag = lex_err("\"open").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.kind(), ErrorKind::LexicalError);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 5)));
}

proptest! {
    #[test]
    fn lexing_never_panics(source in "\\PC{0,64}") {
        let interner = StringInterner::new();
        let _ = lex(&source, &interner);
    }

    #[test]
    fn integer_literals_round_trip(n in 0u32..1_000_000) {
        let source = n.to_string();
        prop_assert_eq!(kinds(&source), vec![TokenKind::Number(f64::from(n)), TokenKind::Eof]);
    }

    #[test]
    fn identifiers_round_trip(ident in "[a-z_][a-z0-9_]{0,12}") {
        prop_assume!(TokenKind::keyword(&ident).is_none());
        let interner = StringInterner::new();
        let tokens = lex(&ident, &interner).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident(interner.intern(&ident)));
        prop_assert_eq!(tokens[0].lexeme(&ident), ident.as_str());
    }
}
