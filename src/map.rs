//! Ordered header map.
//!
//! This module provides [`HeaderMap`], a wrapper around [`IndexMap`] from
//! header key to an ordered list of values, and [`canonical_key`], the key
//! normalization the encoder applies before inserting.
//!
//! ## Why IndexMap?
//!
//! Headers come out in the order their fields were declared, which keeps
//! encoded output stable for logging and testing.
//!
//! ## Examples
//!
//! ```rust
//! use header_fields::HeaderMap;
//!
//! let mut map = HeaderMap::new();
//! map.insert("Accept", "text/plain");
//! map.append("Accept", "text/html");
//! map.insert("X-Id", "7");
//!
//! assert_eq!(map.get("Accept"), Some("text/plain"));
//! assert_eq!(map.get_all("Accept").len(), 2);
//! assert_eq!(map.len(), 2);
//! ```

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of header keys to their values.
///
/// Keys are stored exactly as given; use [`canonical_key`] to normalize them
/// first. The encoder always writes canonical keys unless told otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderMap(IndexMap<String, Vec<String>>);

impl HeaderMap {
    /// Creates an empty `HeaderMap`.
    #[must_use]
    pub fn new() -> Self {
        HeaderMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HeaderMap(IndexMap::with_capacity(capacity))
    }

    /// Sets `key` to the single value `value`, replacing anything already there.
    ///
    /// Returns the previous values, if any. A replaced key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_fields::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// assert!(map.insert("A", "1").is_none());
    /// assert_eq!(map.insert("A", "2"), Some(vec!["1".to_string()]));
    /// assert_eq!(map.get("A"), Some("2"));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<Vec<String>> {
        self.0.insert(key.into(), vec![value.into()])
    }

    /// Adds `value` after any values already stored under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value stored under `key`, or an empty slice.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, returning its values. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.shift_remove(key)
    }

    /// Copies every key of `other` into this map, replacing existing values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_fields::{headers, HeaderMap};
    ///
    /// let mut map = headers! { "A" => "1", "B" => "2" };
    /// map.merge(headers! { "B" => "3", "C" => "4" });
    /// assert_eq!(map, headers! { "A" => "1", "B" => "3", "C" => "4" });
    /// ```
    pub fn merge(&mut self, other: HeaderMap) {
        for (key, values) in other {
            self.0.insert(key, values);
        }
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
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Vec<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the key-values pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl From<HashMap<String, Vec<String>>> for HeaderMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        HeaderMap(map.into_iter().collect())
    }
}

impl From<HeaderMap> for HashMap<String, Vec<String>> {
    fn from(map: HeaderMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for HeaderMap {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<String>)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        HeaderMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for HeaderMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in &self.0 {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Rewrites a header key to canonical capitalization.
///
/// The first letter and every letter following a hyphen are upper-cased, all
/// other letters lower-cased. A key containing a space, a non-ASCII byte or
/// any other byte that is not a valid header token character is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use header_fields::canonical_key;
///
/// assert_eq!(canonical_key("x-request-id"), "X-Request-Id");
/// assert_eq!(canonical_key("CONTENT-TYPE"), "Content-Type");
/// assert_eq!(canonical_key("omitempty"), "Omitempty");
/// assert_eq!(canonical_key("has space"), "has space");
/// ```
#[must_use]
pub fn canonical_key(key: &str) -> String {
    if !key.bytes().all(is_token_byte) {
        return key.to_string();
    }

    let mut upper = true;
    key.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

// RFC 7230 `tchar`.
#[inline]
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}
