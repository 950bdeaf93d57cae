//! Accepted input forms.
//!
//! [`parse`](crate::parse) takes either a raw string, which is split by
//! [`tokenize`](crate::tokenize), or a sequence that is already tokenized
//! (for instance `std::env::args().skip(1).collect::<Vec<_>>()`).
//!
//! When the input arrives untyped, e.g. from a JSON config file or an RPC
//! payload, [`Input::try_from`] on a [`serde_json::Value`] performs the
//! kind check and reports [`Error::InvalidInput`] naming what it found.
//!
//! ```rust
//! use argv_tree::{Error, Input};
//! use serde_json::json;
//!
//! assert!(Input::try_from(json!("[ :n:1 ]")).is_ok());
//! assert!(Input::try_from(json!(["[", ":n:1", "]"])).is_ok());
//! assert_eq!(Input::try_from(json!(69)), Err(Error::invalid_input("number")));
//! ```

use crate::tokenizer::tokenize;
use crate::{Error, Result};

/// A raw string or an ordered sequence of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Tokens(Vec<String>),
}

impl Input {
    /// Resolves the input into its token sequence.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Input::Text(text) => tokenize(&text),
            Input::Tokens(tokens) => tokens,
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<Vec<String>> for Input {
    fn from(value: Vec<String>) -> Self {
        Input::Tokens(value)
    }
}

impl From<Vec<&str>> for Input {
    fn from(value: Vec<&str>) -> Self {
        Input::Tokens(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Input {
    fn from(value: &[&str]) -> Self {
        Input::Tokens(value.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[String]> for Input {
    fn from(value: &[String]) -> Self {
        Input::Tokens(value.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(value: [&str; N]) -> Self {
        Input::Tokens(value.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[String; N]> for Input {
    fn from(value: [String; N]) -> Self {
        Input::Tokens(value.into())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<serde_json::Value> for Input {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(text) => Ok(Input::Text(text)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(token) => Ok(token),
                    other => Err(Error::invalid_input(&format!(
                        "array containing {}",
                        json_type_name(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Tokens),
            other => Err(Error::invalid_input(json_type_name(&other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_is_tokenized() {
        let input = Input::from("{ @a \":s:x y\" }");
        assert_eq!(input.into_tokens(), vec!["{", "@a", ":s:x y", "}"]);
    }

    #[test]
    fn test_tokens_are_kept_verbatim() {
        let input = Input::from(vec!["a b", "\"c\""]);
        assert_eq!(input.into_tokens(), vec!["a b", "\"c\""]);
    }

    #[test]
    fn test_json_kinds() {
        assert_eq!(
            Input::try_from(json!("x")),
            Ok(Input::Text("x".to_string()))
        );
        assert_eq!(Input::try_from(json!([])), Ok(Input::Tokens(vec![])));
        assert_eq!(
            Input::try_from(json!(null)),
            Err(Error::invalid_input("null"))
        );
        assert_eq!(
            Input::try_from(json!({ "a": 1 })),
            Err(Error::invalid_input("object"))
        );
        assert_eq!(
            Input::try_from(json!(true)),
            Err(Error::invalid_input("boolean"))
        );
        assert_eq!(
            Input::try_from(json!(["[", 1, "]"])),
            Err(Error::invalid_input("array containing number"))
        );
    }
}
