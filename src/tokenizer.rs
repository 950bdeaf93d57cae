//! Shell-style splitting of a raw string into tokens.
//!
//! The rules follow the usual argv conventions:
//!
//! - whitespace separates tokens outside of quotes;
//! - a token that *starts* with `"` or `'` runs to the next quote of the
//!   same kind, and the quotes are dropped (`":s:a b"` → `:s:a b`);
//! - a token that starts with any other character may hold one quoted
//!   section, which extends it across whitespace and keeps its quotes
//!   (`a"b c"` → `a"b c"`);
//! - a quote with no matching quote later in the input is dropped, and
//!   splitting carries on around it (`x "a b` → `x`, `a`, `b`).
//!
//! There is no backslash escaping.
//!
//! ```rust
//! use argv_tree::tokenize;
//!
//! assert_eq!(
//!     tokenize(r#"{ "@a key" ":s:two words" }"#),
//!     vec!["{", "@a key", ":s:two words", "}"]
//! );
//! ```

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Byte length of the leading run with no whitespace and no quotes.
fn plain_run(text: &str) -> usize {
    text.find(|c: char| c.is_whitespace() || is_quote(c))
        .unwrap_or(text.len())
}

/// Byte length of a token that starts with a plain character: a plain run,
/// at most one closed quoted section, then another plain run.
fn unquoted_len(text: &str) -> usize {
    let run = plain_run(text);
    let after = &text[run..];
    if let Some(quote) = after.chars().next().filter(|&c| is_quote(c)) {
        if let Some(end) = after[1..].find(quote) {
            let quoted = run + end + 2;
            return quoted + plain_run(&text[quoted..]);
        }
    }
    run
}

/// Splits `input` into tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if is_quote(c) {
            match rest[1..].find(c) {
                Some(end) => {
                    tokens.push(rest[1..=end].to_string());
                    rest = &rest[end + 2..];
                }
                None => rest = &rest[1..],
            }
            continue;
        }

        let len = unquoted_len(rest);
        tokens.push(rest[..len].to_string());
        rest = &rest[len..];
    }

    tokens
}
