//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Renders diagnostics as source snippets with caret underlines.
///
/// ```text
/// SyntaxError[E1003]: unclosed delimiter: expected `}`, found end of input
///  --> 1:12
///   |
/// 1 | { print(1);
///   |            ^ expected `}`
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Render `diagnostic`, resolving its spans against `source`.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        let table = LineOffsetTable::build(source);

        self.write_colored(diagnostic.kind().as_str(), colors::ERROR)?;
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD)?;
        writeln!(self.writer, ": {}", diagnostic.message)?;

        let width = diagnostic
            .labels
            .iter()
            .map(|label| table.line_from_offset(label.span.start).to_string().len())
            .max()
            .unwrap_or(1);
        let pad = " ".repeat(width);

        if let Some(primary) = diagnostic.labels.iter().find(|l| l.is_primary) {
            let position = table.span_position(source, primary.span);
            self.write_colored(&format!("{pad}--> "), colors::SECONDARY)?;
            writeln!(self.writer, "{position}")?;
        }

        for label in &diagnostic.labels {
            self.emit_label(label, source, &table, &pad)?;
        }

        for note in &diagnostic.notes {
            write!(self.writer, "{pad} ")?;
            self.write_colored("= note", colors::NOTE)?;
            writeln!(self.writer, ": {note}")?;
        }
        Ok(())
    }

    fn emit_label(
        &mut self,
        label: &Label,
        source: &str,
        table: &LineOffsetTable,
        pad: &str,
    ) -> io::Result<()> {
        let position = table.span_position(source, label.span);
        let text = table.line_text(source, position.line).unwrap_or("");

        let line_chars = text.chars().count();
        let start_col = (position.column as usize).saturating_sub(1);
        let span_chars = source
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
        let marks = span_chars.clamp(1, line_chars.saturating_sub(start_col).max(1));

        let (mark, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };

        self.write_colored(&format!("{pad} |"), colors::SECONDARY)?;
        writeln!(self.writer)?;
        self.write_colored(
            &format!("{:>width$} | ", position.line, width = pad.len()),
            colors::SECONDARY,
        )?;
        writeln!(self.writer, "{text}")?;
        self.write_colored(&format!("{pad} | "), colors::SECONDARY)?;

        let underline = mark.to_string().repeat(marks);
        write!(self.writer, "{}", " ".repeat(start_col))?;
        if label.message.is_empty() {
            self.write_colored(&underline, color)?;
        } else {
            self.write_colored(&format!("{underline} {}", label.message), color)?;
        }
        writeln!(self.writer)
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
