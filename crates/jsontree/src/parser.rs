//! Recursive-descent tree builder over the token scanner.
//!
//! The builder pulls one token at a time from [`Scanner`] and assembles
//! owned [`Value`] trees. Scalars become leaves directly; a start marker
//! opens a loop that recurses per child until the matching end marker
//! arrives. All container growth is fallible, and any failure below a
//! container drops the children collected so far before propagating, so a
//! caller that observes an error holds no partial tree.

use alloc::vec::Vec;

use crate::{
    error::{ParseError, SyntaxError},
    reserve,
    scanner::{Scanner, Token},
    value::{Member, Value},
};

/// Parses a complete JSON document into one owned [`Value`].
///
/// The whole buffer must be a single document: after the root value is
/// built, one more scanner call confirms the input is fully consumed, and
/// any further token fails the parse even though a valid subtree was
/// produced. Dropping the returned value releases the entire tree.
///
/// # Examples
///
/// ```
/// use jsontree::Value;
///
/// let v = jsontree::parse(br#"["a", {"b": null}]"#).unwrap();
/// assert_eq!(v.as_array().unwrap().len(), 2);
///
/// assert!(jsontree::parse(b"[1]").is_err()); // numbers are not lexed
/// ```
///
/// # Errors
///
/// Syntax errors (including numeric literals, which are not implemented)
/// and allocation failures. No partial tree survives a failure.
pub fn parse(buf: &[u8]) -> Result<Value, ParseError> {
    let mut scanner = Scanner::new(buf);
    let root = next_value(&mut scanner)?;
    match scanner.next_token()? {
        None => Ok(root),
        Some(_) => Err(scanner.error(SyntaxError::TrailingData)),
    }
}

fn next_value(scanner: &mut Scanner<'_>) -> Result<Value, ParseError> {
    match scanner.next_token()? {
        Some(token) => value_from(scanner, token),
        None => Err(scanner.error(SyntaxError::UnexpectedEndOfInput)),
    }
}

fn value_from(scanner: &mut Scanner<'_>, token: Token) -> Result<Value, ParseError> {
    match token {
        Token::Null => Ok(Value::Null),
        Token::Boolean(value) => Ok(Value::Boolean(value)),
        Token::String(s) => Ok(Value::String(s)),
        Token::ArrayStart => array_values(scanner).map(Value::Array),
        Token::ObjectStart => object_members(scanner).map(Value::Object),
        // The scanner only emits end markers where they close the innermost
        // structure, so these arms are unreachable through `parse`.
        Token::ArrayEnd | Token::ObjectEnd => {
            Err(scanner.error(SyntaxError::Other("end marker in value position")))
        }
    }
}

fn array_values(scanner: &mut Scanner<'_>) -> Result<Vec<Value>, ParseError> {
    let mut values = Vec::new();
    loop {
        let token = match scanner.next_token()? {
            Some(Token::ArrayEnd) => return Ok(values),
            Some(token) => token,
            None => return Err(scanner.error(SyntaxError::UnexpectedEndOfInput)),
        };
        let value = value_from(scanner, token)?;
        reserve::grow(&mut values, 1).map_err(|source| scanner.error(source))?;
        values.push(value);
    }
}

fn object_members(scanner: &mut Scanner<'_>) -> Result<Vec<Member>, ParseError> {
    let mut members = Vec::new();
    loop {
        let name = match scanner.next_token()? {
            Some(Token::ObjectEnd) => return Ok(members),
            Some(Token::String(name)) => name,
            Some(_) => {
                return Err(scanner.error(SyntaxError::Other("member name must be a string")));
            }
            None => return Err(scanner.error(SyntaxError::UnexpectedEndOfInput)),
        };
        let value = next_value(scanner)?;
        reserve::grow(&mut members, 1).map_err(|source| scanner.error(source))?;
        members.push(Member { name, value });
    }
}
