//! Streaming token scanner: lexer and structural validator in one pass.
//!
//! [`Scanner`] borrows the input buffer and produces one [`Token`] per
//! [`next_token`] call, enforcing delimiter nesting and separator grammar as
//! it goes. It is re-entrant across calls using only its own state, which
//! makes it a pull-style cursor: callers that want tokens without a tree can
//! drive it directly, and the tree builder behind [`crate::parse`] is exactly
//! such a caller.
//!
//! Structural tracking lives in an explicit stack of frames, one per open
//! `{` or `[`. Each object frame carries what the grammar expects next
//! inside that object (a member name or the closing brace, a colon, or a
//! member value), so closing and re-entering nested containers restores the
//! enclosing object's expectations. A separate flag records that a value or
//! closer was just produced, after which only a separator or a closer may
//! follow.
//!
//! [`next_token`]: Scanner::next_token

use alloc::vec::Vec;

use bstr::BString;

use crate::{
    error::{ErrorSource, ParseError, SyntaxError},
    escape, reserve,
};

/// One lexical unit of a JSON document.
///
/// The four start/end markers only exist between the scanner and its caller;
/// a finished [`crate::Value`] tree never contains them.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// The `null` literal.
    Null,
    /// A `true` or `false` literal.
    Boolean(bool),
    /// A string literal, escapes decoded.
    String(BString),
    /// A `{`.
    ObjectStart,
    /// A `}`.
    ObjectEnd,
    /// A `[`.
    ArrayStart,
    /// A `]`.
    ArrayEnd,
}

/// What the grammar expects next inside the innermost open object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expect {
    NameOrClose,
    Colon,
    Value,
}

/// One open `{` or `[`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Array,
    Object(Expect),
}

/// A pull-based scanner over one in-memory JSON document.
///
/// # Examples
///
/// ```
/// use jsontree::{Scanner, Token};
///
/// let mut scanner = Scanner::new(b"[null]");
/// assert_eq!(scanner.next_token().unwrap(), Some(Token::ArrayStart));
/// assert_eq!(scanner.next_token().unwrap(), Some(Token::Null));
/// assert_eq!(scanner.next_token().unwrap(), Some(Token::ArrayEnd));
/// assert_eq!(scanner.next_token().unwrap(), None);
/// ```
pub struct Scanner<'src> {
    buf: &'src [u8],
    pos: usize,
    frames: Vec<Frame>,
    /// A value or closer was just produced; only `,`, `:` handling, or a
    /// closer is grammatical until it is cleared.
    after_value: bool,
    line: usize,
    column: usize,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `buf`. The buffer is borrowed immutably and is
    /// left untouched by scanning.
    #[must_use]
    pub fn new(buf: &'src [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            frames: Vec::new(),
            after_value: false,
            line: 1,
            column: 1,
        }
    }

    /// Produces the next token.
    ///
    /// Returns `Ok(Some(token))` when a token was consumed, `Ok(None)` on a
    /// clean end of input (no unclosed structure; repeated calls keep
    /// returning `Ok(None)`), and `Err` on malformed input or allocation
    /// failure.
    ///
    /// # Errors
    ///
    /// Any grammar violation at the current position, an unterminated or
    /// malformed string literal, end of input with open structures, or a
    /// failed allocation.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        while let Some(&b) = self.buf.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.advance(),

                b'{' => {
                    self.check_value_start(b)?;
                    self.push_frame(Frame::Object(Expect::NameOrClose))?;
                    self.advance();
                    return Ok(Some(Token::ObjectStart));
                }

                b'}' => {
                    let closes_object = match self.frames.last() {
                        Some(Frame::Object(Expect::NameOrClose)) => true,
                        Some(Frame::Object(Expect::Value)) => self.after_value,
                        _ => false,
                    };
                    if !closes_object {
                        return Err(self.error(SyntaxError::MismatchedDelimiter('}')));
                    }
                    self.frames.pop();
                    self.advance();
                    self.after_value = true;
                    return Ok(Some(Token::ObjectEnd));
                }

                b'[' => {
                    self.check_value_start(b)?;
                    self.push_frame(Frame::Array)?;
                    self.advance();
                    return Ok(Some(Token::ArrayStart));
                }

                b']' => {
                    if !matches!(self.frames.last(), Some(Frame::Array)) {
                        return Err(self.error(SyntaxError::MismatchedDelimiter(']')));
                    }
                    self.frames.pop();
                    self.advance();
                    self.after_value = true;
                    return Ok(Some(Token::ArrayEnd));
                }

                b'"' => {
                    let expects_colon =
                        matches!(self.frames.last(), Some(Frame::Object(Expect::Colon)));
                    if self.after_value || expects_colon {
                        return Err(self.error(SyntaxError::InvalidCharacter('"')));
                    }
                    let is_name =
                        matches!(self.frames.last(), Some(Frame::Object(Expect::NameOrClose)));
                    let string = self.scan_string()?;
                    if is_name {
                        if let Some(Frame::Object(expect)) = self.frames.last_mut() {
                            *expect = Expect::Colon;
                        }
                    }
                    self.after_value = true;
                    return Ok(Some(Token::String(string)));
                }

                b'n' => return self.literal(b"null", Token::Null),
                b't' => return self.literal(b"true", Token::Boolean(true)),
                b'f' => return self.literal(b"false", Token::Boolean(false)),

                b',' => {
                    if !self.after_value {
                        return Err(self.error(SyntaxError::InvalidCharacter(',')));
                    }
                    self.advance();
                    if let Some(Frame::Object(expect)) = self.frames.last_mut() {
                        *expect = Expect::NameOrClose;
                    }
                    self.after_value = false;
                }

                b':' => {
                    match self.frames.last_mut() {
                        Some(Frame::Object(expect)) if *expect == Expect::Colon => {
                            *expect = Expect::Value;
                        }
                        _ => return Err(self.error(SyntaxError::InvalidCharacter(':'))),
                    }
                    self.advance();
                    self.after_value = false;
                }

                // TODO: lex numeric literals (RFC 7159 section 6) and
                // populate Value::Number.
                _ => return Err(self.error(SyntaxError::InvalidCharacter(b as char))),
            }
        }

        if self.frames.is_empty() {
            Ok(None)
        } else {
            Err(self.error(SyntaxError::UnexpectedEndOfInput))
        }
    }

    /// A value-starting token (`{`, `[`, `"`, `n`, `t`, `f`) is grammatical
    /// only when no value was just produced and the position expects a
    /// value: top level, inside an array, or an object's member value.
    fn check_value_start(&self, b: u8) -> Result<(), ParseError> {
        let value_slot = match self.frames.last() {
            None | Some(Frame::Array) => true,
            Some(Frame::Object(expect)) => *expect == Expect::Value,
        };
        if self.after_value || !value_slot {
            return Err(self.error(SyntaxError::InvalidCharacter(b as char)));
        }
        Ok(())
    }

    fn literal(
        &mut self,
        text: &'static [u8],
        token: Token,
    ) -> Result<Option<Token>, ParseError> {
        self.check_value_start(text[0])?;
        if !self.buf[self.pos..].starts_with(text) {
            return Err(self.error(SyntaxError::InvalidLiteral));
        }
        for _ in 0..text.len() {
            self.advance();
        }
        self.after_value = true;
        Ok(Some(token))
    }

    /// Consumes a string literal, opening quote through closing quote, and
    /// decodes its body. The closing quote is found with a backslash toggle
    /// (a `\` suppresses any special meaning of the following byte); escape
    /// validation itself belongs to the decoder.
    fn scan_string(&mut self) -> Result<BString, ParseError> {
        let quote_line = self.line;
        let quote_column = self.column;
        self.advance();

        let body_start = self.pos;
        let mut escaped = false;
        loop {
            let Some(&b) = self.buf.get(self.pos) else {
                return Err(ParseError {
                    source: SyntaxError::UnterminatedString.into(),
                    line: quote_line,
                    column: quote_column,
                });
            };
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                break;
            }
            self.advance();
        }
        let body = &self.buf[body_start..self.pos];
        self.advance();

        escape::unescape(body).map_err(|source| ParseError {
            source,
            line: quote_line,
            column: quote_column,
        })
    }

    fn push_frame(&mut self, frame: Frame) -> Result<(), ParseError> {
        reserve::grow(&mut self.frames, 1).map_err(|source| self.error(source))?;
        self.frames.push(frame);
        Ok(())
    }

    fn advance(&mut self) {
        if let Some(&b) = self.buf.get(self.pos) {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub(crate) fn error(&self, source: impl Into<ErrorSource>) -> ParseError {
        ParseError {
            source: source.into(),
            line: self.line,
            column: self.column,
        }
    }
}
