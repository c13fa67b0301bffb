use super::*;

#[test]
fn codes_map_to_stage_kinds() {
    assert_eq!(ErrorCode::E0001.kind(), ErrorKind::LexicalError);
    assert_eq!(ErrorCode::E1003.kind(), ErrorKind::SyntaxError);
    assert_eq!(ErrorCode::E2001.kind(), ErrorKind::RedeclarationError);
    assert_eq!(ErrorCode::E2002.kind(), ErrorKind::UndefinedVariableError);
    assert_eq!(ErrorCode::E2004.kind(), ErrorKind::TypeError);
    assert_eq!(ErrorCode::E2005.kind(), ErrorKind::ArityError);
    assert_eq!(ErrorCode::E2006.kind(), ErrorKind::ControlFlowError);
    assert_eq!(ErrorCode::E2007.kind(), ErrorKind::RuntimeError);
    assert_eq!(ErrorCode::E2009.kind(), ErrorKind::RuntimeError);
}

#[test]
fn stage_predicates() {
    assert!(ErrorCode::E0004.is_lexer_error());
    assert!(!ErrorCode::E0004.is_parser_error());
    assert!(ErrorCode::E1006.is_parser_error());
    assert!(!ErrorCode::E2003.is_parser_error());
}

#[test]
fn display_formats() {
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    assert_eq!(ErrorKind::UndefinedVariableError.to_string(), "UndefinedVariableError");
}
