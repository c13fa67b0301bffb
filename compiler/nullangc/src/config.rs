//! Command line parsing.
//!
//! Arguments are matched by hand: one optional command word, at most one
//! path, and `--flag=value` options anywhere on the line.

use std::path::PathBuf;

use nullang_diagnostic::emitter::ColorMode;
use nullang_eval::DEFAULT_MAX_CALL_DEPTH;

pub const USAGE: &str = "\
Nullang interpreter

Usage: nullang [command] [options]

Commands:
  repl            Start an interactive session (default)
  run <file>      Evaluate a file
  lex <file>      Tokenize a file and print the tokens
  parse <file>    Parse a file and print the syntax tree
  help            Show this help message
  version         Show version information

Options:
  --max-call-depth=<n>          Nested call limit (default: 1024)
  --color=<auto|always|never>   Colorize diagnostics (default: auto)

Environment:
  NULLANG_LOG     Log filter, e.g. `debug` or `nullang_parse=trace`
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(PathBuf),
    Lex(PathBuf),
    Parse(PathBuf),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub max_call_depth: usize,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            command: Command::Repl,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            color: ColorMode::Auto,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs a file path")]
    MissingPath(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `{option}`")]
    InvalidValue { option: &'static str, value: String },
}

impl Config {
    /// Parse the arguments after the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        let mut words = Vec::new();
        let mut flag_command = None;

        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--max-call-depth=") {
                config.max_call_depth = value
                    .parse::<usize>()
                    .ok()
                    .filter(|&depth| depth > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        option: "--max-call-depth",
                        value: value.to_string(),
                    })?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                config.color =
                    ColorMode::from_flag(value).ok_or_else(|| ConfigError::InvalidValue {
                        option: "--color",
                        value: value.to_string(),
                    })?;
            } else if matches!(arg, "--help" | "-h") {
                flag_command = Some(Command::Help);
            } else if matches!(arg, "--version" | "-V") {
                flag_command = flag_command.or(Some(Command::Version));
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            } else {
                words.push(arg);
            }
        }

        // `--help` and `--version` win over any command on the line.
        if let Some(command) = flag_command {
            config.command = command;
            return Ok(config);
        }

        let mut words = words.into_iter();
        config.command = match words.next() {
            None | Some("repl") => Command::Repl,
            Some("help") => Command::Help,
            Some("version") => Command::Version,
            Some("run") => Command::Run(next_path(&mut words, "run")?),
            Some("lex") => Command::Lex(next_path(&mut words, "lex")?),
            Some("parse") => Command::Parse(next_path(&mut words, "parse")?),
            Some(other) => return Err(ConfigError::UnknownCommand(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ConfigError::UnexpectedArgument(extra.to_string())),
            None => Ok(config),
        }
    }
}

fn next_path<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<PathBuf, ConfigError> {
    words
        .next()
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingPath(command))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
