//! Error types for token parsing.
//!
//! Every failure aborts the whole parse; there is no partial result.
//!
//! ## Error Categories
//!
//! - **Input errors**: the dynamic entry point received something that is
//!   neither a string nor a list of strings
//! - **Structure errors**: a `[` or `{` never finds its closing token
//! - **Resource errors**: nesting deeper than [`ParseOptions::max_depth`](crate::ParseOptions)
//! - **Strict-mode errors**: conditions the tolerant mode lets through
//!
//! A malformed number behind a `:n:` tag is *not* an error. It degrades to
//! [`Number::NaN`](crate::Number::NaN).
//!
//! ## Examples
//!
//! ```rust
//! use argv_tree::{parse, Error, ErrorKind};
//!
//! let err = parse("[ [ :n:0 ]").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArrayUnclosed);
//! assert!(err.to_string().contains("array unclosed"));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while turning tokens into a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The dynamic input was not a string or a sequence of strings.
    #[error("invalid input: expected a string or an array of strings, found {found}")]
    InvalidInput { found: String },

    /// A `[` has no matching `]` at its nesting depth.
    #[error("array unclosed near: {} (from position {position}, left with a depth of {depth})", .context.join(" "))]
    ArrayUnclosed {
        context: Vec<String>,
        position: usize,
        depth: usize,
    },

    /// A `{` has no matching `}` at its nesting depth.
    #[error("object unclosed near: {} (from position {position}, left with a depth of {depth})", .context.join(" "))]
    ObjectUnclosed {
        context: Vec<String>,
        position: usize,
        depth: usize,
    },

    /// Containers nest deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// Strict mode: an object member value appeared before any `@key`.
    #[error("object value at position {position} has no preceding @key")]
    MissingKey { position: usize },

    /// Strict mode: a `]` or `}` appeared without an open container.
    #[error("unexpected closing token '{token}' at position {position}")]
    UnexpectedClose { token: String, position: usize },

    /// Strict mode: tokens remain after the root value.
    #[error("trailing tokens: root value consumed {consumed} of {total} tokens")]
    TrailingTokens { consumed: usize, total: usize },
}

/// Fieldless discriminant of [`Error`], handy for matching in tests and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    ArrayUnclosed,
    ObjectUnclosed,
    DepthExceeded,
    MissingKey,
    UnexpectedClose,
    TrailingTokens,
}

impl Error {
    /// Creates an invalid input error naming the offending type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argv_tree::Error;
    ///
    /// let err = Error::invalid_input("number");
    /// assert!(err.to_string().contains("found number"));
    /// ```
    pub fn invalid_input(found: &str) -> Self {
        Error::InvalidInput {
            found: found.to_string(),
        }
    }

    /// Creates an unclosed-array error. `context` is the token slice starting at the `[`.
    pub fn array_unclosed<S: AsRef<str>>(context: &[S], position: usize, depth: usize) -> Self {
        Error::ArrayUnclosed {
            context: to_owned_tokens(context),
            position,
            depth,
        }
    }

    /// Creates an unclosed-object error. `context` is the token slice starting at the `{`.
    pub fn object_unclosed<S: AsRef<str>>(context: &[S], position: usize, depth: usize) -> Self {
        Error::ObjectUnclosed {
            context: to_owned_tokens(context),
            position,
            depth,
        }
    }

    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    pub fn missing_key(position: usize) -> Self {
        Error::MissingKey { position }
    }

    pub fn unexpected_close(token: &str, position: usize) -> Self {
        Error::UnexpectedClose {
            token: token.to_string(),
            position,
        }
    }

    pub fn trailing_tokens(consumed: usize, total: usize) -> Self {
        Error::TrailingTokens { consumed, total }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::ArrayUnclosed { .. } => ErrorKind::ArrayUnclosed,
            Error::ObjectUnclosed { .. } => ErrorKind::ObjectUnclosed,
            Error::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            Error::MissingKey { .. } => ErrorKind::MissingKey,
            Error::UnexpectedClose { .. } => ErrorKind::UnexpectedClose,
            Error::TrailingTokens { .. } => ErrorKind::TrailingTokens,
        }
    }

    /// Returns the token slice attached to an unclosed-container error.
    #[must_use]
    pub fn context(&self) -> Option<&[String]> {
        match self {
            Error::ArrayUnclosed { context, .. } | Error::ObjectUnclosed { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Returns the residual nesting depth attached to an unclosed-container error.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        match self {
            Error::ArrayUnclosed { depth, .. } | Error::ObjectUnclosed { depth, .. } => {
                Some(*depth)
            }
            _ => None,
        }
    }
}

fn to_owned_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| t.as_ref().to_string()).collect()
}

pub type Result<T> = std::result::Result<T, Error>;
