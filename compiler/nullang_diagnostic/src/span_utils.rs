//! Byte offset to line/column conversion.

use nullang_ir::{Position, Span};

/// Byte offsets of every line start in one source text.
///
/// Lookups are a binary search over line starts.
///
/// ```
/// use nullang_diagnostic::span_utils::LineOffsetTable;
/// use nullang_ir::Position;
///
/// let source = "let a = 1;\nlet b = 2;";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.position(source, 11), Position::new(2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based line and column of `offset`. Columns count characters.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).clamp(line_start, source.len());
        let chars = source.get(line_start..end).map_or(0, |s| s.chars().count());
        let column = u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1;
        Position::new(line, column)
    }

    /// Position of the start of `span`.
    pub fn span_position(&self, source: &str, span: Span) -> Position {
        self.position(source, span.start)
    }

    /// Byte offset where 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let index = line.checked_sub(1)?;
        self.offsets.get(index as usize).copied()
    }

    /// Text of 1-based `line` without its line terminator.
    pub fn line_text<'src>(&self, source: &'src str, line: u32) -> Option<&'src str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
