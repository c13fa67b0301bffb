//! Lexer for Nullang using logos with string interning.
//!
//! [`tokenize`] returns a lazy iterator of tokens; [`lex`] collects it into a
//! [`TokenList`]. Both stop at the first malformed token.

mod lex_error;

use logos::Logos;
use nullang_ir::{Position, Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos, before decoding literals and interning.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
enum RawToken {
    #[token("let")]
    Let,
    #[token("var")]
    Var,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?")]
    Number,

    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#)]
    String,

    /// Longest match wins, so this only fires when the closing quote is
    /// missing before the end of the line.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*"#)]
    UnterminatedString,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Tracks line and column while the lexer moves forward through the source.
struct LineCursor {
    offset: usize,
    line: u32,
    column: u32,
}

impl LineCursor {
    fn new() -> Self {
        LineCursor {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move to byte `target` (never backwards) and report its position.
    fn advance_to(&mut self, source: &str, target: usize) -> Position {
        if target > self.offset {
            let skipped = source.get(self.offset..target).unwrap_or("");
            for c in skipped.chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = target;
        }
        Position::new(self.line, self.column)
    }
}

/// Lazy token stream over one source text.
///
/// Yields `Ok` tokens ending with a single [`TokenKind::Eof`], or a single
/// `Err` after which the stream is exhausted.
pub struct Lexer<'a> {
    source: &'a str,
    raw: logos::Lexer<'a, RawToken>,
    interner: &'a StringInterner,
    cursor: LineCursor,
    done: bool,
}

/// Start lexing `source`. Identifiers and string contents are interned in
/// `interner`.
pub fn tokenize<'a>(source: &'a str, interner: &'a StringInterner) -> Lexer<'a> {
    Lexer {
        source,
        raw: RawToken::lexer(source),
        interner,
        cursor: LineCursor::new(),
        done: false,
    }
}

/// Lex all of `source`, stopping at the first error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let tokens = tokenize(source, interner).collect::<Result<TokenList, _>>()?;
    tracing::debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(raw) = self.raw.next() else {
            self.done = true;
            let end = self.source.len();
            let position = self.cursor.advance_to(self.source, end);
            return Some(Ok(Token::new(
                TokenKind::Eof,
                Span::from_range(end..end),
                position,
            )));
        };

        let range = self.raw.span();
        let span = Span::from_range(range.clone());
        let position = self.cursor.advance_to(self.source, range.start);
        let slice = self.raw.slice();

        let result = match raw {
            Ok(raw) => self.convert(raw, slice),
            Err(()) => Err(LexErrorKind::UnexpectedCharacter {
                found: slice.chars().next().unwrap_or('\0'),
            }),
        };

        Some(match result {
            Ok(kind) => Ok(Token::new(kind, span, position)),
            Err(kind) => {
                self.done = true;
                Err(self.error_at(kind, span, position))
            }
        })
    }
}

impl Lexer<'_> {
    fn convert(&self, raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
        let kind = match raw {
            RawToken::Let => TokenKind::Let,
            RawToken::Var => TokenKind::Var,
            RawToken::Fn => TokenKind::Fn,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::Break => TokenKind::Break,
            RawToken::Continue => TokenKind::Continue,
            RawToken::Return => TokenKind::Return,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Null => TokenKind::Null,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::AndAnd => TokenKind::AndAnd,
            RawToken::OrOr => TokenKind::OrOr,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Number => TokenKind::Number(parse_number(slice)?),
            RawToken::String => {
                let body = &slice[1..slice.len() - 1];
                let text = unescape_string(body).map_err(|(_, kind)| kind)?;
                TokenKind::Str(self.interner.intern(&text))
            }
            RawToken::UnterminatedString => return Err(LexErrorKind::UnterminatedString),
            RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),
        };
        Ok(kind)
    }

    /// Build the error, narrowing invalid escapes to the escape itself.
    fn error_at(&mut self, kind: LexErrorKind, span: Span, position: Position) -> LexError {
        match kind {
            LexErrorKind::InvalidEscape { .. } => {
                let token = self.raw.slice();
                let body = &token[1..token.len() - 1];
                let offset = unescape_string(body).err().map_or(0, |(at, _)| at);
                let start = span.start as usize + 1 + offset;
                let escape_len = 1 + body[offset + 1..].chars().next().map_or(0, char::len_utf8);
                let escape_span = Span::from_range(start..start + escape_len);
                let escape_position = self.cursor.advance_to(self.source, start);
                LexError {
                    kind,
                    span: escape_span,
                    position: escape_position,
                }
            }
            _ => LexError {
                kind,
                span,
                position,
            },
        }
    }
}

fn parse_number(slice: &str) -> Result<f64, LexErrorKind> {
    slice
        .replace('_', "")
        .parse::<f64>()
        .map_err(|_| LexErrorKind::InvalidNumber {
            text: slice.to_string(),
        })
}

/// Resolve escapes in a string literal body (the text between the quotes).
///
/// On failure returns the byte offset of the offending backslash in `body`.
fn unescape_string(body: &str) -> Result<String, (usize, LexErrorKind)> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // The literal regex guarantees a character after every backslash.
        let escaped = chars.next().map_or('\\', |(_, e)| e);
        let resolved = match escaped {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '"' => '"',
            other => return Err((i, LexErrorKind::InvalidEscape { found: other })),
        };
        out.push(resolved);
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
