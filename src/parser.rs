//! The recursive value parser.
//!
//! [`parse_at`] turns the token at one position into a [`Value`] and reports
//! how many *extra* tokens it consumed ([`ParseStep::index_progress`]).
//! Containers use that count to move their cursor past a nested block
//! without scanning it twice.
//!
//! ## Bracket matching
//!
//! An opening `[` scans forward counting nested `[` and `]` only; the first
//! `]` seen at nesting zero closes it. Braces are matched the same way and
//! ignore brackets, so `[ { ] }` closes the array at the `]` and then fails
//! on the interior `{`.
//!
//! ## Nested slices
//!
//! The interior of a matched container is parsed as its own token sequence,
//! so every index a nested call sees is relative to that slice. Error
//! positions are translated back to the root sequence.
//!
//! ```rust
//! use argv_tree::parse_at;
//!
//! let tokens = ["x", "[", "[", ":n:1", "]", "]", "y"];
//! let step = parse_at(&tokens, 1).unwrap();
//! assert_eq!(step.index_progress, 4);
//! assert_eq!(step.value.to_string(), "[ [ :n:1 ] ]");
//! ```

use crate::options::ParseOptions;
use crate::tag::{self, Tag};
use crate::{ArgMap, Error, Number, Result, Value};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// The outcome of parsing one token at one position.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseStep {
    pub value: Value,
    /// Tokens consumed beyond the one at the starting position. Zero for
    /// scalars; `close - open` for containers.
    pub index_progress: usize,
}

impl ParseStep {
    fn scalar(value: Value) -> Self {
        ParseStep {
            value,
            index_progress: 0,
        }
    }

    /// Total number of tokens this step covered.
    #[inline]
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.index_progress + 1
    }
}

/// Parses the token at `position` with default options.
///
/// A position past the end of `tokens` yields [`Value::Absent`].
///
/// # Errors
///
/// Fails with [`Error::ArrayUnclosed`] or [`Error::ObjectUnclosed`] when a
/// container never closes, or [`Error::DepthExceeded`] when containers nest
/// deeper than the default limit.
pub fn parse_at<S: AsRef<str>>(tokens: &[S], position: usize) -> Result<ParseStep> {
    parse_at_with_options(tokens, position, &ParseOptions::default())
}

/// Parses the token at `position` with the given options.
///
/// # Errors
///
/// See [`parse_at`]; strict mode adds [`Error::MissingKey`] and
/// [`Error::UnexpectedClose`].
pub fn parse_at_with_options<S: AsRef<str>>(
    tokens: &[S],
    position: usize,
    options: &ParseOptions,
) -> Result<ParseStep> {
    Parser { options }.step(tokens, position, 0, 0)
}

/// Parses a whole token sequence from position 0.
///
/// Empty input yields [`Value::Absent`]. Tokens after the root value are
/// ignored in tolerant mode and rejected in strict mode.
pub(crate) fn parse_root<S: AsRef<str>>(tokens: &[S], options: &ParseOptions) -> Result<Value> {
    debug!(
        tokens = tokens.len(),
        mode = options.mode.as_str(),
        max_depth = options.max_depth,
        "parsing token sequence"
    );
    if tokens.is_empty() {
        return Ok(Value::Absent);
    }

    let step = parse_at_with_options(tokens, 0, options)?;
    let consumed = step.consumed();
    if consumed < tokens.len() {
        if options.is_strict() {
            let err = Error::trailing_tokens(consumed, tokens.len());
            debug!(error = %err, "parse failed");
            return Err(err);
        }
        trace!(
            ignored = tokens.len() - consumed,
            "ignoring tokens after the root value"
        );
    }
    Ok(step.value)
}

/// Key that tolerant mode files a keyless object value under.
const UNKEYED: &str = "undefined";

struct Parser<'o> {
    options: &'o ParseOptions,
}

impl Parser<'_> {
    /// `base` is the root index of `tokens[0]`; `depth` counts the
    /// containers enclosing `tokens`.
    fn step<S: AsRef<str>>(
        &self,
        tokens: &[S],
        position: usize,
        base: usize,
        depth: usize,
    ) -> Result<ParseStep> {
        let Some(token) = tokens.get(position) else {
            return Ok(ParseStep::scalar(Value::Absent));
        };
        let token = token.as_ref();

        let tag = Tag::classify(token);
        if tag.is_close() && self.options.is_strict() {
            return Err(fail(Error::unexpected_close(token, base + position)));
        }

        let step = match tag {
            Tag::ArrayOpen => self.array(tokens, position, base, depth)?,
            Tag::ObjectOpen => self.object(tokens, position, base, depth)?,
            Tag::String(text) => ParseStep::scalar(Value::String(text.to_string())),
            Tag::Number(text) => ParseStep::scalar(Value::Number(parse_number(text))),
            Tag::Boolean(text) => ParseStep::scalar(Value::Bool(text != "false")),
            Tag::Null => ParseStep::scalar(Value::Null),
            Tag::Absent => ParseStep::scalar(Value::Absent),
            Tag::ArrayClose | Tag::ObjectClose | Tag::Key(_) | Tag::Bare(_) => {
                ParseStep::scalar(Value::String(token.to_string()))
            }
        };
        Ok(step)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let nested = depth + 1;
        if nested > self.options.max_depth {
            return Err(fail(Error::depth_exceeded(self.options.max_depth)));
        }
        Ok(nested)
    }

    fn array<S: AsRef<str>>(
        &self,
        tokens: &[S],
        position: usize,
        base: usize,
        depth: usize,
    ) -> Result<ParseStep> {
        let nested = self.enter(depth)?;
        let close = find_close(tokens, position, tag::ARRAY_OPEN, tag::ARRAY_CLOSE).map_err(
            |residual| fail(Error::array_unclosed(&tokens[position..], base + position, residual)),
        )?;

        let interior = &tokens[position + 1..close];
        let interior_base = base + position + 1;
        let mut items = Vec::with_capacity(interior.len());
        let mut cursor = 0;
        while cursor < interior.len() {
            let step = self.step(interior, cursor, interior_base, nested)?;
            cursor += step.consumed();
            items.push(step.value);
        }

        let index_progress = close - position;
        trace!(
            position = base + position,
            index_progress,
            items = items.len(),
            "parsed array"
        );
        Ok(ParseStep {
            value: Value::Array(items),
            index_progress,
        })
    }

    fn object<S: AsRef<str>>(
        &self,
        tokens: &[S],
        position: usize,
        base: usize,
        depth: usize,
    ) -> Result<ParseStep> {
        let nested = self.enter(depth)?;
        let strict = self.options.is_strict();
        let close = find_close(tokens, position, tag::OBJECT_OPEN, tag::OBJECT_CLOSE).map_err(
            |residual| fail(Error::object_unclosed(&tokens[position..], base + position, residual)),
        )?;

        let interior = &tokens[position + 1..close];
        let interior_base = base + position + 1;
        let mut members = ArgMap::new();
        let mut merged = IndexSet::new();
        let mut pending: Option<&str> = None;
        let mut cursor = 0;
        while cursor < interior.len() {
            let token = interior[cursor].as_ref();
            if let Some(key) = Tag::key(token) {
                pending = Some(key);
                cursor += 1;
                continue;
            }

            let key = match pending {
                Some(key) => key,
                None if strict => {
                    return Err(fail(Error::missing_key(interior_base + cursor)));
                }
                None => UNKEYED,
            };
            let step = self.step(interior, cursor, interior_base, nested)?;
            cursor += step.consumed();
            members.merge(key, step.value, &mut merged);
        }

        let index_progress = close - position;
        trace!(
            position = base + position,
            index_progress,
            members = members.len(),
            "parsed object"
        );
        Ok(ParseStep {
            value: Value::Object(members),
            index_progress,
        })
    }
}

/// Finds the index of the token closing the container opened at `open_at`.
///
/// On failure returns the residual nesting depth left at the end of input.
fn find_close<S: AsRef<str>>(
    tokens: &[S],
    open_at: usize,
    open: &str,
    close: &str,
) -> std::result::Result<usize, usize> {
    let mut level = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open_at + 1) {
        let token = token.as_ref();
        if token == open {
            level += 1;
        } else if token == close {
            if level == 0 {
                return Ok(index);
            }
            level -= 1;
        }
    }
    Err(level)
}

fn parse_number(text: &str) -> Number {
    match tag::parse_float_prefix(text) {
        Some(number) => Number::from(number),
        None => {
            trace!(literal = text, "malformed number degraded to NaN");
            Number::NaN
        }
    }
}

fn fail(err: Error) -> Error {
    debug!(error = %err, "parse failed");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, ValidationMode};

    fn strict() -> ParseOptions {
        ParseOptions::new().with_mode(ValidationMode::Strict)
    }

    #[test]
    fn test_scalar_progress_is_zero() {
        for token in [":s:a", ":n:1", ":b:true", ":null:", ":u:", "bare", "@k"] {
            assert_eq!(parse_at(&[token], 0).unwrap().index_progress, 0);
        }
    }

    #[test]
    fn test_container_progress_spans_to_close() {
        let tokens = ["{", "@a", "[", ":n:1", "]", "}", "tail"];
        let step = parse_at(&tokens, 0).unwrap();
        assert_eq!(step.index_progress, 5);

        let step = parse_at(&tokens, 2).unwrap();
        assert_eq!(step.index_progress, 2);
        assert_eq!(step.value, Value::Array(vec![Value::from(1.0)]));
    }

    #[test]
    fn test_position_past_end_is_absent() {
        let tokens: [&str; 0] = [];
        assert_eq!(parse_at(&tokens, 0).unwrap().value, Value::Absent);
    }

    #[test]
    fn test_find_close_residual_depth() {
        assert_eq!(find_close(&["[", "[", "]", "]"], 0, "[", "]"), Ok(3));
        assert_eq!(find_close(&["[", "[", "[", "]"], 0, "[", "]"), Err(1));
        assert_eq!(find_close(&["[", "[", "]"], 0, "[", "]"), Err(0));
        assert_eq!(find_close(&["[", "}", "]"], 0, "[", "]"), Ok(2));
    }

    #[test]
    fn test_array_does_not_count_braces() {
        let err = parse_at(&["[", "{", "]", "}"], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ObjectUnclosed);
        // The interior "{" sits at root index 1.
        assert_eq!(err, Error::object_unclosed(&["{"], 1, 0));
    }

    #[test]
    fn test_error_positions_are_absolute() {
        let tokens = ["[", ":n:1", "{", "@a", "[", "]", "]"];
        // outer "[" matches the last "]"; its interior holds an unclosed "{"
        let err = parse_at(&tokens, 0).unwrap_err();
        assert_eq!(err, Error::object_unclosed(&["{", "@a", "[", "]"], 2, 0));
    }

    #[test]
    fn test_keyless_values_tolerant_and_strict() {
        let tokens = ["{", ":n:1", "@a", ":n:2", "}"];
        let value = parse_at(&tokens, 0).unwrap().value;
        assert_eq!(value.get("undefined"), Some(&Value::from(1.0)));
        assert_eq!(value.get(""), None);
        assert_eq!(value.get("a"), Some(&Value::from(2.0)));

        let err = parse_at_with_options(&tokens, 0, &strict()).unwrap_err();
        assert_eq!(err, Error::missing_key(1));
    }

    #[test]
    fn test_stray_closer() {
        assert_eq!(parse_at(&["]"], 0).unwrap().value, Value::from("]"));
        let err = parse_at_with_options(&["[", "}", "]"], 0, &strict()).unwrap_err();
        assert_eq!(err, Error::unexpected_close("}", 1));

        let err = parse_at_with_options(&["]"], 0, &strict()).unwrap_err();
        assert_eq!(err, Error::unexpected_close("]", 0));
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(2);
        assert!(parse_at_with_options(&["[", "[", "]", "]"], 0, &options).is_ok());

        let err = parse_at_with_options(&["[", "[", "{", "}", "]", "]"], 0, &options).unwrap_err();
        assert_eq!(err, Error::depth_exceeded(2));

        let options = ParseOptions::new().with_max_depth(0);
        assert!(parse_at_with_options(&[":n:1"], 0, &options).is_ok());
        assert!(parse_at_with_options(&["[", "]"], 0, &options).is_err());
    }

    #[test]
    fn test_parse_root_trailing_tokens() {
        let tokens = [":n:1", ":n:2"];
        assert_eq!(
            parse_root(&tokens, &ParseOptions::default()).unwrap(),
            Value::from(1.0)
        );
        assert_eq!(
            parse_root(&tokens, &strict()).unwrap_err(),
            Error::trailing_tokens(1, 2)
        );
    }

    #[test]
    fn test_number_degrades_to_nan() {
        assert_eq!(parse_number("abc"), Number::NaN);
        assert_eq!(parse_number("Infinity"), Number::Infinity);
        assert_eq!(parse_number("3"), Number::Float(3.0));
    }
}
