//! `nullang run <file>`: evaluate a file as a single unit.

use std::io::Write;
use std::path::Path;

use nullang_diagnostic::emitter::TerminalEmitter;
use nullang_eval::Interpreter;

use super::{read_file, CommandError};

/// Evaluate the file at `path`. Output from `print` goes through the
/// interpreter's print handler; a failure is rendered to `diagnostics`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn run_file<E: Write>(
    path: &Path,
    interpreter: &mut Interpreter,
    diagnostics: &mut TerminalEmitter<E>,
) -> Result<(), CommandError> {
    let source = read_file(path)?;
    match interpreter.run_source(&source) {
        Ok(_) => Ok(()),
        Err(err) => {
            diagnostics.emit(&err.to_diagnostic(), &source)?;
            diagnostics.flush()?;
            Err(CommandError::Reported(err.kind()))
        }
    }
}
