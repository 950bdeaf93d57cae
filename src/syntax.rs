//! Token syntax reference
//!
//! This module documents the token grammar understood by
//! [`parse`](crate::parse). It contains no code.
//!
//! # Overview
//!
//! Input is a flat list of tokens, as a shell would hand them to a program.
//! Type tags on individual tokens pick a scalar type; `[ ]` and `{ }`
//! tokens build arrays and objects. A raw string is first split on
//! whitespace, with `"` or `'` quoting grouping text that contains spaces.
//!
//! ```text
//! {
//!   @key1 [ :string:value1 ":s:value 2 with spaces" ]
//!   @key2 [ :boolean:true :b:false ]
//!   @key3 [ :number:100 :n:-100.99 ]
//!   @key4 :null:
//!   @key5 [ :undefined: :u: ]
//!   @key6 [ [ [ :n:1 ] ] ]
//!   @key7 { @key7.1 { "@key7.1.1 with spaces" "simple string" } }
//! }
//! ```
//!
//! # Scalars
//!
//! | Type    | Long form        | Short form | Example |
//! |---------|------------------|------------|---------|
//! | String  | `:string:<text>` | `:s:<text>` | `:s:hello` |
//! | Number  | `:number:<num>`  | `:n:<num>`  | `:n:-1.5e3` |
//! | Boolean | `:boolean:<b>`   | `:b:<b>`    | `:b:false` |
//! | Null    | `:null:`         |             | `:null:` |
//! | Absent  | `:undefined:`    | `:u:`       | `:u:` |
//!
//! Tags are matched by prefix in the order of the table, first match wins.
//! `:null:`, `:undefined:` and `:u:` must be the whole token.
//!
//! **Strings**: any token without a recognised tag is a string as is, so
//! `hello` and `:s:hello` are equal. The tag is only needed when the text
//! would otherwise be read as something else, e.g. `:s:[` or `:s::n:1`.
//!
//! **Numbers**: the text after the tag is read like JavaScript's
//! `parseFloat`: leading whitespace is skipped and the longest numeric
//! prefix wins (`:n:12px` is 12). `Infinity` and `-Infinity` are accepted.
//! Text with no numeric prefix yields `NaN` rather than an error.
//!
//! **Booleans**: only the exact text `false` is false. `:b:`, `:b:no` and
//! `:b:0` are all true.
//!
//! # Arrays
//!
//! ```text
//! [ value value ... ]
//! ```
//!
//! Brackets must be separate tokens. Every `[` needs a `]` at the same
//! nesting level; arrays nest freely and may hold objects.
//!
//! # Objects
//!
//! ```text
//! { @key value @key value ... }
//! ```
//!
//! A token starting with `@` names the member that the next value is
//! assigned to. Keys with spaces are quoted as a whole token:
//! `"@a spaced key"`. Members keep the order their keys first appeared in.
//!
//! Assigning the same key more than once collects the values:
//!
//! ```text
//! { @n :n:1 @n :n:2 @n :n:3 }   =>   { "n": [1, 2, 3] }
//! ```
//!
//! A key followed directly by another key, or by the closing `}`, sets no
//! member.
//!
//! # Validation modes
//!
//! In [`ValidationMode::Tolerant`](crate::ValidationMode::Tolerant) (the
//! default) the parser accepts a few loose forms:
//!
//! - a value with no preceding key is stored under the key `"undefined"`;
//! - a lone `]` or `}` outside any container is the string `"]"` / `"}"`;
//! - tokens after the first complete value are ignored.
//!
//! [`ValidationMode::Strict`](crate::ValidationMode::Strict) turns each of
//! those into an error. Unclosed arrays and objects fail in both modes and
//! report the residual nesting depth.
//!
//! # Limits
//!
//! Containers may nest at most
//! [`ParseOptions::max_depth`](crate::ParseOptions::max_depth) levels
//! (128 by default).
