//! Configuration options for header encoding.
//!
//! ## Examples
//!
//! ```rust
//! use header_fields::{encode_with_options, EncodeOptions, Fields, HeaderValue, Record, Value};
//!
//! struct Trace {
//!     id: Option<String>,
//! }
//!
//! impl Record for Trace {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields.tagged("id", "x-trace-id", &self.id);
//!     }
//! }
//!
//! impl HeaderValue for Trace {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//!
//! let options = EncodeOptions::new()
//!     .with_canonical_keys(false)
//!     .with_nil_value("-");
//! let map = encode_with_options(&Trace { id: None }, options).unwrap();
//! assert_eq!(map.get("x-trace-id"), Some("-"));
//! ```

/// Configuration options for the [`Encoder`](crate::Encoder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Rewrite keys with [`canonical_key`](crate::canonical_key) before insertion.
    pub canonical_keys: bool,
    /// Text written for a field whose reference chain ends in nil.
    pub nil_value: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            canonical_keys: true,
            nil_value: String::new(),
        }
    }
}

impl EncodeOptions {
    /// Creates default options (canonical keys, nil encodes as `""`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_fields::EncodeOptions;
    ///
    /// let options = EncodeOptions::new();
    /// assert!(options.canonical_keys);
    /// assert!(options.nil_value.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns key canonicalization on or off.
    ///
    /// With canonicalization off, tag names and field names are used verbatim.
    #[must_use]
    pub fn with_canonical_keys(mut self, canonical: bool) -> Self {
        self.canonical_keys = canonical;
        self
    }

    /// Sets the text written for nil references.
    #[must_use]
    pub fn with_nil_value(mut self, nil_value: impl Into<String>) -> Self {
        self.nil_value = nil_value.into();
        self
    }
}
