//! Configuration options for parsing.
//!
//! This module provides:
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`ValidationMode`]: How strictly token structure is checked
//!
//! ## Examples
//!
//! ```rust
//! use argv_tree::{parse_with_options, ParseOptions, ValidationMode};
//!
//! // Reject keyless values, stray closers and trailing tokens
//! let options = ParseOptions::strict().with_max_depth(16);
//! assert_eq!(options.mode, ValidationMode::Strict);
//!
//! let value = parse_with_options("[ :n:1 :n:2 ]", &options).unwrap();
//! assert!(value.is_array());
//! ```

use serde::{Deserialize, Serialize};

/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How strictly the parser validates token structure.
///
/// - **Tolerant**: Default. Accepts the loose forms of the grammar: object
///   values without a key land under `"undefined"`, stray `]`/`}` are plain
///   strings, and tokens after the root value are ignored.
/// - **Strict**: Keyless values, stray closers and trailing tokens are
///   errors.
///
/// Unclosed containers fail in both modes, with the residual depth.
///
/// # Examples
///
/// ```rust
/// use argv_tree::ValidationMode;
///
/// assert_eq!(ValidationMode::default(), ValidationMode::Tolerant);
/// assert!(ValidationMode::Strict.is_strict());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Tolerant,
    Strict,
}

impl ValidationMode {
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }

    /// Returns the lowercase name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValidationMode::Tolerant => "tolerant",
            ValidationMode::Strict => "strict",
        }
    }
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use argv_tree::{ParseOptions, ValidationMode};
///
/// // Default tolerant options
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// // Custom configuration
/// let options = ParseOptions::new()
///     .with_mode(ValidationMode::Strict)
///     .with_max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub mode: ValidationMode,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            mode: ValidationMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (tolerant mode, depth limit of 128).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with strict validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argv_tree::ParseOptions;
    ///
    /// assert!(ParseOptions::strict().is_strict());
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            mode: ValidationMode::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum container nesting depth.
    ///
    /// A depth of 0 rejects every array and object; scalars still parse.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.mode.is_strict()
    }
}
