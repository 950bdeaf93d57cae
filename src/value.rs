//! Dynamic value representation for parsed token trees.
//!
//! This module provides the [`Value`] enum produced by [`parse`](crate::parse)
//! and the floating-point [`Number`] it carries.
//!
//! ## Null vs Absent
//!
//! `:null:` and `:undefined:` are different tokens and stay different values:
//! [`Value::Null`] is an explicit null, [`Value::Absent`] is an explicit
//! "no value". Both are first-class data and compare unequal.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use argv_tree::{value, Value};
//!
//! let null = Value::Null;
//! let absent = Value::Absent;
//! let number = Value::from(42.0);
//! let text = Value::from("hello");
//!
//! let obj = value!({ "name": "Alice", "tags": ["a", "b"] });
//! assert!(obj.is_object());
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use argv_tree::parse;
//!
//! let value = parse("{ @port :n:8080 @debug :b:true }").unwrap();
//! assert_eq!(value.get("port").and_then(|v| v.as_f64()), Some(8080.0));
//! assert_eq!(value.get("debug").and_then(|v| v.as_bool()), Some(true));
//! ```
//!
//! ### Rendering
//!
//! `Display` writes the tagged token syntax back out, so simple trees
//! survive a round trip through [`parse`](crate::parse):
//!
//! ```rust
//! use argv_tree::parse;
//!
//! let value = parse("[ :n:1 \":s:two words\" :u: ]").unwrap();
//! assert_eq!(value.to_string(), "[ :n:1 \":s:two words\" :u: ]");
//! assert_eq!(parse(value.to_string()).unwrap(), value);
//! ```

use crate::ArgMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value built from tagged tokens.
///
/// # Examples
///
/// ```rust
/// use argv_tree::{Number, Value};
///
/// let num = Value::Number(Number::Float(1.5));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert_ne!(Value::Null, Value::Absent);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Absent,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(ArgMap),
}

/// A floating-point number with explicit non-finite variants.
///
/// Keeping `NaN` as its own variant makes equality total, which matters
/// because `NaN` is what a malformed `:n:` literal degrades to.
///
/// # Examples
///
/// ```rust
/// use argv_tree::Number;
///
/// assert_eq!(Number::from(2.5), Number::Float(2.5));
/// assert_eq!(Number::from(f64::INFINITY), Number::Infinity);
/// assert_eq!(Number::from(f64::NAN), Number::NaN);
/// assert!(Number::NaN.is_nan());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` for finite values.
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for the non-numeric sentinel.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Number::NaN)
    }

    /// Converts this number to an `f64`.
    ///
    /// ```rust
    /// use argv_tree::Number;
    ///
    /// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
    /// assert_eq!(Number::NegativeInfinity.as_f64(), f64::NEG_INFINITY);
    /// assert!(Number::NaN.as_f64().is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Returns the value as `i64` when it is whole and in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 => {
                Some(*f as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(f64::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the lowercase name of this value's variant.
    ///
    /// ```rust
    /// use argv_tree::Value;
    ///
    /// assert_eq!(Value::Absent.type_name(), "absent");
    /// assert_eq!(Value::from("x").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Absent => "absent",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. `NaN` comes back as `f64::NAN`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ArgMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up an object member. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Converts into a [`serde_json::Value`].
    ///
    /// `Absent` members are dropped from objects and become `null` inside
    /// arrays or at the root. Non-finite numbers become `null`.
    ///
    /// ```rust
    /// use argv_tree::parse;
    ///
    /// let value = parse("{ @a :u: @b [ :u: :n:1 ] }").unwrap();
    /// assert_eq!(value.to_json().to_string(), r#"{"b":[null,1.0]}"#);
    /// ```
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(n.as_f64())
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => serde_json::Value::Array(arr.iter().map(Value::to_json).collect()),
            Value::Object(obj) => serde_json::Value::Object(
                obj.iter()
                    .filter(|(_, v)| !v.is_absent())
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Wraps a token in quotes when the tokenizer would otherwise split or alter it.
///
/// A token holding both quote kinds cannot be expressed and is written with
/// double quotes as is.
pub(crate) fn quote_token(token: &str) -> String {
    let plain = !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if plain {
        token.to_string()
    } else if !token.contains('"') {
        format!("\"{}\"", token)
    } else if !token.contains('\'') {
        format!("'{}'", token)
    } else {
        format!("\"{}\"", token)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ":null:"),
            Value::Absent => write!(f, ":u:"),
            Value::Bool(b) => write!(f, ":b:{}", b),
            Value::Number(n) => write!(f, ":n:{}", n),
            Value::String(s) => write!(f, "{}", quote_token(&format!(":s:{}", s))),
            Value::Array(arr) => {
                write!(f, "[")?;
                for item in arr {
                    write!(f, " {}", item)?;
                }
                write!(f, " ]")
            }
            Value::Object(obj) => {
                write!(f, "{{")?;
                for (key, item) in obj.iter() {
                    write!(f, " {} {}", quote_token(&format!("@{}", key)), item)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Absent => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => serializer.collect_seq(arr),
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ArgMap> for Value {
    fn from(value: ArgMap) -> Self {
        Value::Object(value)
    }
}

/// `None` maps to [`Value::Absent`], not [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}
