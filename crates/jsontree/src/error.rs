//! Error types reported by the scanner and the tree builder.

use thiserror::Error;

/// Error returned when a parse fails.
///
/// Carries the failure cause plus the 1-based line and column of the
/// offending byte. For string-literal failures the position is the opening
/// quote of the literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub(crate) source: ErrorSource,
    /// 1-based line of the offending byte.
    pub line: usize,
    /// 1-based column of the offending byte.
    pub column: usize,
}

impl ParseError {
    /// Returns `true` if the failure was malformed input.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.source, ErrorSource::Syntax(_))
    }

    /// Returns `true` if the failure was an allocation failure.
    #[must_use]
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self.source, ErrorSource::OutOfMemory)
    }
}

/// The cause of a [`ParseError`]: malformed input or resource exhaustion.
///
/// There is no recoverable/fatal split; callers decide. In either case the
/// parse returns no partial tree: everything built so far has already been
/// released when the error is observed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    /// The input violates the JSON grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// An allocation failed while building the tree.
    #[error("out of memory")]
    OutOfMemory,
}

/// A grammar violation in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A byte that cannot start or continue any token at this position.
    /// Digits, `-`, and `.` land here: numeric literals are not lexed.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// A backslash followed by a character that does not name an escape.
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    /// A non-hexadecimal digit inside a `\uXXXX` escape.
    #[error("invalid unicode escape character '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// A `\u` escape with fewer than four hexadecimal digits following.
    #[error("incomplete unicode escape sequence")]
    IncompleteUnicodeEscape,
    /// A raw control byte (< 0x20) inside a string literal.
    #[error("unescaped control character {0:#04x} in string")]
    UnescapedControl(u8),
    /// A string literal with no closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `}` or `]` that does not close the innermost open structure.
    #[error("mismatched closing delimiter '{0}'")]
    MismatchedDelimiter(char),
    /// An `n`/`t`/`f` not followed by the exact `null`/`true`/`false` bytes.
    #[error("invalid literal")]
    InvalidLiteral,
    /// Input ended while a value or an unclosed structure was pending.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A second top-level value after a complete document.
    #[error("trailing data after top-level value")]
    TrailingData,
    #[error("{0}")]
    #[doc(hidden)]
    Other(&'static str),
}
