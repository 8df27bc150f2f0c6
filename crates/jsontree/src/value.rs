//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any parsed JSON
//! value, and [`Member`], one name/value pair of an object.

use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};

/// One member of a JSON object: a name paired with a value.
///
/// Objects keep their members in source order and do not deduplicate names;
/// a document with repeated names yields one `Member` per occurrence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// The member name, as decoded bytes.
    pub name: BString,
    /// The member value.
    pub value: Value,
}

/// A JSON value as defined by [RFC 7159].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// Strings are byte strings: input encoding is not validated, and `\uXXXX`
/// escapes for surrogate halves decode to byte sequences that are not valid
/// UTF-8. The parser never produces the `Number` variant (numeric literals
/// are rejected), but the variant is part of the model and may be
/// constructed directly.
///
/// # Examples
///
/// ```
/// use jsontree::{Member, Value};
///
/// let v = Value::Object(vec![Member {
///     name: "key".into(),
///     value: Value::String("value".into()),
/// }]);
/// assert!(v.is_object());
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// A `true` or `false` literal.
    Boolean(bool),
    /// A numeric value. Never produced by the parser.
    Number(f64),
    /// A decoded string.
    String(BString),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered sequence of members, in source order, names not
    /// deduplicated.
    Object(Vec<Member>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Boolean(true).is_bool());
    /// assert!(!Value::Null.is_bool());
    /// ```
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::String("foo".into()).is_string());
    /// assert!(!Value::Null.is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Object(Vec::new()).is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean payload, if this is a [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a [`String`].
    ///
    /// [`String`]: Value::String
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let v = Value::String("abc".into());
    /// assert_eq!(v.as_str().unwrap(), "abc");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }

    /// Returns the elements, if this is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the members, if this is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up an object member by name and returns its value.
    ///
    /// Returns `None` for non-objects and missing names. When a name is
    /// repeated, the first occurrence in source order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let v = jsontree::parse(br#"{"a": "1"}"#).unwrap();
    /// assert_eq!(v.get(b"a"), Some(&Value::String("1".into())));
    /// assert_eq!(v.get(b"b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &[u8]) -> Option<&Value> {
        match self {
            Self::Object(members) => members
                .iter()
                .find(|m| m.name.as_slice() == name)
                .map(|m| &m.value),
            _ => None,
        }
    }
}
