//! In-memory JSON parsing into an owned value tree.
//!
//! The input is a byte buffer believed to be JSON per [RFC 7159], with the
//! following contract:
//!
//! - Only UTF-8 input is supported.
//! - String encoding is not validated; string payloads are byte strings
//!   ([`bstr::BString`]), not guaranteed-UTF-8 text.
//! - Surrogate pairs are not combined: each `\uXXXX` escape is transcoded on
//!   its own, so escapes for code points above the Basic Multilingual Plane
//!   decode to unpaired surrogate byte sequences.
//! - Numeric literals are not yet lexed and are rejected as syntax errors.
//!
//! Two layers do the work. [`Scanner`] is a pull-based lexer and structural
//! validator: each [`Scanner::next_token`] call consumes exactly one token,
//! validating delimiter nesting and separator grammar incrementally.
//! [`parse`] drives the scanner through a recursive tree builder and returns
//! a single owned [`Value`]; dropping the value releases the whole tree.
//!
//! ```
//! use jsontree::Value;
//!
//! let tree = jsontree::parse(br#"{"greeting": "hello"}"#).unwrap();
//! assert_eq!(tree.get(b"greeting"), Some(&Value::String("hello".into())));
//! ```
//!
//! [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod parser;
mod reserve;
mod scanner;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorSource, ParseError, SyntaxError};
pub use parser::parse;
pub use scanner::{Scanner, Token};
pub use value::{Member, Value};
