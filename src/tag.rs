//! Token classification.
//!
//! Each token is classified exactly once, by its literal form. Scalar tags
//! are matched by prefix in a fixed priority order (string, number,
//! boolean, null, absent) and the first match wins; anything unmatched is a
//! bare string.

/// Opens an array.
pub const ARRAY_OPEN: &str = "[";
/// Closes an array.
pub const ARRAY_CLOSE: &str = "]";
/// Opens an object.
pub const OBJECT_OPEN: &str = "{";
/// Closes an object.
pub const OBJECT_CLOSE: &str = "}";
/// Prefix naming the next object member.
pub const KEY_MARKER: &str = "@";

const STRING_TAGS: [&str; 2] = [":string:", ":s:"];
const NUMBER_TAGS: [&str; 2] = [":number:", ":n:"];
const BOOLEAN_TAGS: [&str; 2] = [":boolean:", ":b:"];
const NULL_TAGS: [&str; 1] = [":null:"];
const ABSENT_TAGS: [&str; 2] = [":undefined:", ":u:"];

/// The classified form of one token.
///
/// Payload-carrying variants borrow the remainder of the token after its
/// prefix has been stripped.
///
/// # Examples
///
/// ```rust
/// use argv_tree::Tag;
///
/// assert_eq!(Tag::classify("["), Tag::ArrayOpen);
/// assert_eq!(Tag::classify(":n:-1.5"), Tag::Number("-1.5"));
/// assert_eq!(Tag::classify(":s:x"), Tag::String("x"));
/// assert_eq!(Tag::classify("@name"), Tag::Key("name"));
/// assert_eq!(Tag::classify("plain"), Tag::Bare("plain"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag<'a> {
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
    Key(&'a str),
    String(&'a str),
    Number(&'a str),
    Boolean(&'a str),
    Null,
    Absent,
    Bare(&'a str),
}

impl<'a> Tag<'a> {
    /// Classifies a token in value position.
    ///
    /// Key markers are only meaningful inside an object, where the parser
    /// checks for them before calling this; everywhere else an `@name`
    /// token classifies as [`Tag::Key`] and the parser treats it as a bare
    /// string.
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match token {
            ARRAY_OPEN => return Tag::ArrayOpen,
            ARRAY_CLOSE => return Tag::ArrayClose,
            OBJECT_OPEN => return Tag::ObjectOpen,
            OBJECT_CLOSE => return Tag::ObjectClose,
            _ => {}
        }
        if let Some(rest) = strip_any(token, &STRING_TAGS) {
            Tag::String(rest)
        } else if let Some(rest) = strip_any(token, &NUMBER_TAGS) {
            Tag::Number(rest)
        } else if let Some(rest) = strip_any(token, &BOOLEAN_TAGS) {
            Tag::Boolean(rest)
        } else if NULL_TAGS.contains(&token) {
            Tag::Null
        } else if ABSENT_TAGS.contains(&token) {
            Tag::Absent
        } else if let Some(key) = token.strip_prefix(KEY_MARKER) {
            Tag::Key(key)
        } else {
            Tag::Bare(token)
        }
    }

    /// Returns the key name if `token` is a key marker.
    #[inline]
    #[must_use]
    pub fn key(token: &'a str) -> Option<&'a str> {
        token.strip_prefix(KEY_MARKER)
    }

    #[inline]
    #[must_use]
    pub const fn is_close(&self) -> bool {
        matches!(self, Tag::ArrayClose | Tag::ObjectClose)
    }
}

fn strip_any<'a>(token: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| token.strip_prefix(prefix))
}

/// Parses the remainder of a number tag the way `parseFloat` does.
///
/// Leading whitespace is skipped and the longest valid decimal prefix is
/// used, so `"12px"` yields 12. Returns `None` when no prefix is numeric;
/// the caller turns that into the `NaN` sentinel.
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let infinity = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}
