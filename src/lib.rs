//! # argv_tree
//!
//! Build nested, typed values from command-line tokens.
//!
//! ## What is it?
//!
//! Command lines are flat lists of strings. `argv_tree` lets a program take
//! structured parameters anyway: inline type tags select scalar types and
//! bracket/brace tokens build arrays and objects.
//!
//! ```text
//! mytool { @hosts [ a.example b.example ] @port :n:8080 @tls :b:true }
//! ```
//!
//! ## Key Features
//!
//! - **Typed scalars**: strings, numbers, booleans, null and an explicit
//!   "absent" marker
//! - **Nesting**: arrays and insertion-ordered objects, to any depth up to a
//!   configurable limit
//! - **Repeated keys**: assigning a key twice collects its values into an array
//! - **Two input forms**: a raw string (split shell-style) or a token list
//!   such as `std::env::args()`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use argv_tree::{parse, value};
//!
//! let parsed = parse("{ @a [ :n:1 :n:2 ] @b :null: }").unwrap();
//! assert_eq!(parsed, value!({ "a": [1, 2], "b": null }));
//!
//! // Pre-split tokens work the same way
//! let parsed = parse(vec!["{", "@1", ":n:1", "@1", ":n:2", "}"]).unwrap();
//! assert_eq!(parsed, value!({ "1": [1, 2] }));
//! ```
//!
//! ### Strict validation
//!
//! ```rust
//! use argv_tree::{parse_with_options, ErrorKind, ParseOptions};
//!
//! let options = ParseOptions::strict();
//! let err = parse_with_options(":n:1 :n:2", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TrailingTokens);
//! ```
//!
//! ## Format Specification
//!
//! See the [`syntax`] module for the full token grammar.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for each parse and each
//! failure, `trace` per container). Install a subscriber to see them.

pub mod error;
pub mod input;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod syntax;
pub mod tag;
pub mod tokenizer;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use input::Input;
pub use map::ArgMap;
pub use options::{ParseOptions, ValidationMode, DEFAULT_MAX_DEPTH};
pub use parser::{parse_at, parse_at_with_options, ParseStep};
pub use tag::Tag;
pub use tokenizer::tokenize;
pub use value::{Number, Value};

/// Parses a raw string or a token sequence into a [`Value`].
///
/// Only the first complete value is returned; any tokens after it are
/// ignored. Empty input yields [`Value::Absent`].
///
/// # Examples
///
/// ```rust
/// use argv_tree::{parse, Value};
///
/// assert_eq!(parse("hello").unwrap(), Value::from("hello"));
/// assert_eq!(parse(":n:-100.99").unwrap(), Value::from(-100.99));
/// assert_eq!(parse(["[", ":u:", "]"]).unwrap(), Value::Array(vec![Value::Absent]));
/// ```
///
/// # Errors
///
/// Returns [`Error::ArrayUnclosed`] or [`Error::ObjectUnclosed`] for an
/// unbalanced container and [`Error::DepthExceeded`] past the default
/// nesting limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<I>(input: I) -> Result<Value>
where
    I: Into<Input>,
{
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a raw string or a token sequence with custom options.
///
/// # Examples
///
/// ```rust
/// use argv_tree::{parse_with_options, ParseOptions, ErrorKind};
///
/// let options = ParseOptions::new().with_max_depth(1);
/// assert!(parse_with_options("[ :n:1 ]", &options).is_ok());
///
/// let err = parse_with_options("[ [ ] ]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthExceeded);
/// ```
///
/// # Errors
///
/// As [`parse`], plus the strict-mode errors when
/// [`ValidationMode::Strict`] is selected.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options<I>(input: I, options: &ParseOptions) -> Result<Value>
where
    I: Into<Input>,
{
    let tokens = input.into().into_tokens();
    parser::parse_root(&tokens, options)
}

/// Parses borrowed tokens without copying them into an [`Input`].
///
/// # Examples
///
/// ```rust
/// use argv_tree::{parse_tokens, ParseOptions, Value};
///
/// let args: Vec<String> = vec!["[".into(), ":b:false".into(), "]".into()];
/// let value = parse_tokens(&args, &ParseOptions::default()).unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Bool(false)]));
/// ```
///
/// # Errors
///
/// As [`parse_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_tokens<S>(tokens: &[S], options: &ParseOptions) -> Result<Value>
where
    S: AsRef<str>,
{
    parser::parse_root(tokens, options)
}

/// Parses input that arrives as an untyped JSON value.
///
/// Accepts a JSON string (tokenized) or an array of JSON strings.
///
/// # Examples
///
/// ```rust
/// use argv_tree::{parse_json_input, ErrorKind, ParseOptions};
/// use serde_json::json;
///
/// let options = ParseOptions::default();
/// let value = parse_json_input(json!(["{", "@k", "v", "}"]), &options).unwrap();
/// assert_eq!(value.get("k").and_then(|v| v.as_str()), Some("v"));
///
/// let err = parse_json_input(json!(69), &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for any other JSON kind, otherwise as
/// [`parse_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_json_input(input: serde_json::Value, options: &ParseOptions) -> Result<Value> {
    let input = Input::try_from(input)?;
    parse_with_options(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document_string() {
        let value = parse(
            r#"
            {
              @key1 [ :string:value1 ":s:value 2 with spaces" ]
              @key2 [ :boolean:true :b:false ]
              @key3 [ :number:100 :n:-100.99 ]
              @key4 :null:
              @key5 [ :undefined: :u: ]
              @key6 [ [ [ :n:1 ] ] ]
              @key7 { @key7.1 { @key7.1.1 { "@key7.1.1.1 with spaces" "simple string" } } }
            }
            "#,
        )
        .unwrap();

        let expected = crate::value!({
            "key1": ["value1", "value 2 with spaces"],
            "key2": [true, false],
            "key3": [100, (-100.99)],
            "key4": null,
            "key5": [absent, absent],
            "key6": [[[1]]],
            "key7": {
                "key7.1": {
                    "key7.1.1": { "key7.1.1.1 with spaces": "simple string" }
                }
            }
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert_eq!(parse("").unwrap(), Value::Absent);
        assert_eq!(parse(Vec::<String>::new()).unwrap(), Value::Absent);
    }

    #[test]
    fn test_string_and_tokens_agree() {
        let text = "{ @a [ :n:1 :n:2 ] @b :null: }";
        assert_eq!(parse(text).unwrap(), parse(tokenize(text)).unwrap());
    }

    #[test]
    fn test_trailing_tokens_ignored_by_default() {
        assert_eq!(parse("[ ] extra").unwrap(), Value::Array(vec![]));
    }
}
