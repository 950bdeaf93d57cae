//! Ordered map type for parsed objects.
//!
//! [`ArgMap`] wraps an [`IndexMap`] so object members keep the order their
//! `@key` tokens first appeared in. A repeated key keeps its first slot;
//! only its value changes, collecting every assignment into an array.
//!
//! ## Examples
//!
//! ```rust
//! use argv_tree::{ArgMap, Value};
//!
//! let mut map = ArgMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30.0));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

/// An insertion-ordered map of string keys to [`Value`]s.
///
/// # Examples
///
/// ```rust
/// use argv_tree::{ArgMap, Value};
///
/// let mut map = ArgMap::new();
/// map.insert("first".to_string(), Value::from(1.0));
/// map.insert("second".to_string(), Value::from(2.0));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgMap(IndexMap<String, Value>);

impl ArgMap {
    #[must_use]
    pub fn new() -> Self {
        ArgMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ArgMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, replacing any previous value.
    ///
    /// Returns the old value if the key was present. The parser never
    /// replaces; repeated keys collect into an array instead.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining members.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Assigns `value` to `key` with duplicate-key merging.
    ///
    /// The first assignment stores the value as is. The second turns the
    /// stored value into a two-element array; later ones append to it.
    /// `merged` records which keys already hold a merge array, so an array
    /// *value* assigned once is never mistaken for one.
    pub(crate) fn merge(&mut self, key: &str, value: Value, merged: &mut IndexSet<String>) {
        match self.0.get_mut(key) {
            None => {
                self.0.insert(key.to_string(), value);
            }
            Some(Value::Array(items)) if merged.contains(key) => items.push(value),
            Some(slot) => {
                let first = std::mem::take(slot);
                *slot = Value::Array(vec![first, value]);
                merged.insert(key.to_string());
            }
        }
    }
}

impl Serialize for ArgMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl IntoIterator for ArgMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ArgMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ArgMap(IndexMap::from_iter(iter))
    }
}
