//! Diagnostics for the Nullang pipeline.
//!
//! - [`ErrorCode`] identifies each failure and maps it to an [`ErrorKind`]
//! - [`Diagnostic`] is the common report every stage's error converts into
//! - [`span_utils::LineOffsetTable`] turns byte spans into line/column
//! - [`emitter::TerminalEmitter`] renders reports with source snippets

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, ErrorKind};
