mod errors;
mod expressions;

use nullang_ir::ast::dump::dump_program;
use nullang_ir::StringInterner;

use crate::{parse, ParseError, ParseOutput};

fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = nullang_lexer::lex(source, interner).unwrap();
    parse(&tokens, interner)
}

/// Parse and render as S-expressions.
fn dump(source: &str) -> String {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner).unwrap();
    dump_program(&output.arena, output.program, &interner)
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    parse_source(source, &interner).unwrap_err()
}
