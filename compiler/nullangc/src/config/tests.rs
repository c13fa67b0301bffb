use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<Config, ConfigError> {
    Config::from_args(args)
}

#[test]
fn no_arguments_start_the_repl() {
    assert_eq!(parse(&[]).unwrap(), Config::default());
    assert_eq!(parse(&["repl"]).unwrap().command, Command::Repl);
}

#[test]
fn file_commands_take_a_path() {
    assert_eq!(
        parse(&["run", "main.nl"]).unwrap().command,
        Command::Run(PathBuf::from("main.nl"))
    );
    assert_eq!(
        parse(&["lex", "a.nl"]).unwrap().command,
        Command::Lex(PathBuf::from("a.nl"))
    );
    assert_eq!(
        parse(&["parse", "a.nl"]).unwrap().command,
        Command::Parse(PathBuf::from("a.nl"))
    );
    assert_eq!(parse(&["run"]), Err(ConfigError::MissingPath("run")));
}

#[test]
fn options_anywhere_on_the_line() {
    let config = parse(&["--color=never", "run", "x.nl", "--max-call-depth=64"]).unwrap();
    assert_eq!(config.command, Command::Run(PathBuf::from("x.nl")));
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.max_call_depth, 64);
}

#[test]
fn invalid_option_values() {
    assert_eq!(
        parse(&["--max-call-depth=lots"]),
        Err(ConfigError::InvalidValue {
            option: "--max-call-depth",
            value: "lots".to_string(),
        })
    );
    assert!(parse(&["--max-call-depth=0"]).is_err());
    assert!(parse(&["--color=rainbow"]).is_err());
    assert_eq!(
        parse(&["--verbose"]),
        Err(ConfigError::UnknownOption("--verbose".to_string()))
    );
}

#[test]
fn unknown_command_and_extra_arguments() {
    assert_eq!(
        parse(&["compile"]),
        Err(ConfigError::UnknownCommand("compile".to_string()))
    );
    assert_eq!(
        parse(&["run", "a.nl", "b.nl"]),
        Err(ConfigError::UnexpectedArgument("b.nl".to_string()))
    );
}

#[test]
fn help_and_version_flags() {
    assert_eq!(parse(&["help"]).unwrap().command, Command::Help);
    assert_eq!(parse(&["run", "--help"]).unwrap().command, Command::Help);
    assert_eq!(parse(&["--version"]).unwrap().command, Command::Version);
    assert_eq!(parse(&["version"]).unwrap().command, Command::Version);
}
