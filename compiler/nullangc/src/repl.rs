//! The read-eval-print loop.
//!
//! An input unit is one line, extended with further lines while it leaves
//! `(`, `[` or `{` open. Each unit is evaluated in the same interpreter, so
//! bindings persist for the whole session. Errors are reported and the loop
//! continues; only an I/O failure ends it early.

use std::io::{self, BufRead, Write};

use nullang_diagnostic::emitter::TerminalEmitter;
use nullang_eval::Interpreter;
use nullang_ir::{StringInterner, TokenKind};

const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";

/// Line that ends the session.
const EXIT_COMMAND: &str = "exit";

/// A session over arbitrary input and output streams.
pub struct Repl<R: BufRead, W: Write, E: Write> {
    interpreter: Interpreter,
    input: R,
    out: W,
    diagnostics: TerminalEmitter<E>,
    show_prompt: bool,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(
        interpreter: Interpreter,
        input: R,
        out: W,
        diagnostics: TerminalEmitter<E>,
    ) -> Self {
        Repl {
            interpreter,
            input,
            out,
            diagnostics,
            show_prompt: false,
        }
    }

    /// Write prompts before each line. Off by default.
    #[must_use]
    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    /// Loop until end of input or `exit`.
    ///
    /// Input that is not valid UTF-8 is decoded lossily, so a stray byte
    /// spoils only the unit it appears in.
    pub fn run(&mut self) -> io::Result<()> {
        let mut unit = String::new();
        let mut raw = Vec::new();
        loop {
            self.prompt(unit.is_empty())?;
            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                if !unit.trim().is_empty() {
                    self.submit(&unit)?;
                }
                return Ok(());
            }

            let line = String::from_utf8_lossy(&raw);
            if unit.is_empty() {
                match line.trim() {
                    "" => continue,
                    EXIT_COMMAND => return Ok(()),
                    _ => {}
                }
            }

            unit.push_str(&line);
            if has_open_delimiters(&unit, self.interpreter.interner()) {
                continue;
            }
            self.submit(&unit)?;
            unit.clear();
        }
    }

    /// Evaluate one unit and report its value or error.
    fn submit(&mut self, unit: &str) -> io::Result<()> {
        tracing::debug!(bytes = unit.len(), "submit unit");
        match self.interpreter.run_source(unit) {
            Ok(value) if value.is_null() => {}
            Ok(value) => writeln!(self.out, "{}", value.repr())?,
            Err(err) => {
                self.out.flush()?;
                self.diagnostics.emit(&err.to_diagnostic(), unit)?;
                self.diagnostics.flush()?;
            }
        }
        self.out.flush()
    }

    fn prompt(&mut self, fresh: bool) -> io::Result<()> {
        if !self.show_prompt {
            return Ok(());
        }
        let prompt = if fresh { PROMPT } else { CONTINUATION_PROMPT };
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Give back the output streams.
    pub fn into_output(self) -> (W, E) {
        (self.out, self.diagnostics.into_inner())
    }
}

/// True while `source` opens more `(`, `[` or `{` than it closes.
///
/// Counting stops at the first lexical error: the unit is then submitted
/// as is and the error reported.
pub fn has_open_delimiters(source: &str, interner: &StringInterner) -> bool {
    let mut depth: i64 = 0;
    for token in nullang_lexer::tokenize(source, interner) {
        let Ok(token) = token else {
            return false;
        };
        match token.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => depth -= 1,
            _ => {}
        }
    }
    depth > 0
}
