//! Command handlers for the `nullang` CLI.
//!
//! Each handler writes to caller-supplied streams so the integration tests
//! can drive it without a process. [`execute`] wires them to stdio.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use nullang_diagnostic::emitter::TerminalEmitter;
use nullang_diagnostic::ErrorKind;
use nullang_eval::{stdout_handler, Interpreter};

use crate::config::{Command, Config, USAGE};
use crate::repl::Repl;

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Process exit statuses.
pub mod exit {
    pub const SUCCESS: u8 = 0;
    /// Usage errors and programs that failed.
    pub const FAILURE: u8 = 1;
    /// Reading input or writing output failed (`EX_IOERR`).
    pub const IO_ERROR: u8 = 74;
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The program failed; its diagnostic has already been written.
    #[error("{0} reported")]
    Reported(ErrorKind),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Read { .. } | CommandError::Reported(_) => exit::FAILURE,
            CommandError::Io(_) => exit::IO_ERROR,
        }
    }
}

/// Read a whole source file.
pub fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the session interpreter for `config`.
pub fn interpreter_for(config: &Config) -> Interpreter {
    Interpreter::builder()
        .max_call_depth(config.max_call_depth)
        .print_handler(stdout_handler())
        .build()
}

/// Run the configured command against the process's stdio.
pub fn execute(config: &Config) -> u8 {
    let stderr_is_tty = io::stderr().is_terminal();
    let mut diagnostics =
        TerminalEmitter::with_color_mode(io::stderr(), config.color, stderr_is_tty);

    let result = match &config.command {
        Command::Repl => {
            let mut repl = Repl::new(
                interpreter_for(config),
                io::stdin().lock(),
                io::stdout(),
                diagnostics,
            )
            .with_prompt(io::stdin().is_terminal());
            repl.run().map_err(CommandError::from)
        }
        Command::Run(path) => run_file(path, &mut interpreter_for(config), &mut diagnostics),
        Command::Lex(path) => lex_file(path, &mut io::stdout(), &mut diagnostics),
        Command::Parse(path) => parse_file(path, &mut io::stdout(), &mut diagnostics),
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
        Command::Version => {
            println!("nullang {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => exit::SUCCESS,
        Err(err) => {
            if !matches!(err, CommandError::Reported(_)) {
                eprintln!("error: {err}");
            }
            err.exit_code()
        }
    }
}
