//! Nullang command line driver.
//!
//! The `nullang` binary is a thin wrapper around this library: argument
//! parsing lives in [`config`], the interactive loop in [`repl`], and the
//! file commands in [`commands`].

pub mod commands;
pub mod config;
pub mod repl;

pub use config::{Command, Config, ConfigError};
pub use repl::Repl;
