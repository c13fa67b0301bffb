//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;
use std::path::Path;

use nullang_diagnostic::emitter::TerminalEmitter;
use nullang_eval::Error;
use nullang_ir::ast::dump::dump_program;
use nullang_ir::{StringInterner, TokenCategory};

use super::{read_file, CommandError};

/// Print the token stream of a file, one `kind lexeme @ line:col` per line.
pub fn lex_file<W: Write, E: Write>(
    path: &Path,
    out: &mut W,
    diagnostics: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let tokens = match nullang_lexer::lex(&source, &interner) {
        Ok(tokens) => tokens,
        Err(err) => return report(diagnostics, &Error::Lex(err), &source),
    };

    writeln!(out, "Tokens for '{}' ({} tokens):", path.display(), tokens.len())?;
    for token in &tokens {
        let category = token.kind.category();
        if category == TokenCategory::EndOfInput {
            writeln!(out, "  {category:?} @ {}", token.position)?;
        } else {
            writeln!(
                out,
                "  {category:?} `{}` @ {}",
                token.lexeme(&source),
                token.position
            )?;
        }
    }
    Ok(())
}

/// Print a summary of a file's syntax tree and one S-expression per
/// top-level statement.
pub fn parse_file<W: Write, E: Write>(
    path: &Path,
    out: &mut W,
    diagnostics: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let parsed = nullang_lexer::lex(&source, &interner)
        .map_err(Error::from)
        .and_then(|tokens| nullang_parse::parse(&tokens, &interner).map_err(Error::from));
    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(err) => return report(diagnostics, &err, &source),
    };

    writeln!(out, "Parse result for '{}':", path.display())?;
    writeln!(out, "  Statements: {}", parsed.arena.stmt_count())?;
    writeln!(out, "  Expressions: {}", parsed.arena.expr_count())?;
    writeln!(out, "  Functions: {}", parsed.arena.function_count())?;
    let dump = dump_program(&parsed.arena, parsed.program, &interner);
    if !dump.is_empty() {
        writeln!(out)?;
        for line in dump.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

fn report<E: Write>(
    diagnostics: &mut TerminalEmitter<E>,
    err: &Error,
    source: &str,
) -> Result<(), CommandError> {
    diagnostics.emit(&err.to_diagnostic(), source)?;
    diagnostics.flush()?;
    Err(CommandError::Reported(err.kind()))
}
