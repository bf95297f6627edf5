//! Field annotation parsing.
//!
//! Every field may carry an annotation of the form `name` or
//! `name,opt1,opt2,...`. The part before the first comma overrides the
//! field's key (empty means "keep the field's own name"); everything after it
//! is a set of options.
//!
//! ```rust
//! use header_fields::tag::{parse_tag, OMIT_EMPTY};
//!
//! let tag = parse_tag("X-Request-Id,omitempty");
//! assert_eq!(tag.name, "X-Request-Id");
//! assert!(tag.options.contains(OMIT_EMPTY));
//!
//! // A single token is always a name, never an option.
//! let tag = parse_tag("omitempty");
//! assert_eq!(tag.name, "omitempty");
//! assert!(!tag.options.contains(OMIT_EMPTY));
//! ```

/// Annotation that removes a field from the output entirely.
pub const SKIP: &str = "-";

/// Omit the field when its own value is the zero value of its type.
pub const OMIT_EMPTY: &str = "omitempty";

/// Format booleans as `1` / `0`.
pub const INT: &str = "int";

/// Format timestamps as seconds since the Unix epoch.
pub const UNIX: &str = "unix";

/// A parsed field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag<'a> {
    /// Key override; empty when the field's own name should be used.
    pub name: &'a str,
    pub options: TagOptions<'a>,
}

/// The comma-separated options following the name in an annotation.
///
/// Unknown options are kept; they simply never match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Returns `true` if `opt` is one of the options, compared exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_fields::tag::parse_tag;
    ///
    /// let tag = parse_tag("field,foobar,foo");
    /// assert!(tag.options.contains("foo"));
    /// assert!(tag.options.contains("foobar"));
    /// assert!(!tag.options.contains("bar"));
    /// assert!(!tag.options.contains("field"));
    /// ```
    #[must_use]
    pub fn contains(&self, opt: &str) -> bool {
        !self.0.is_empty() && self.iter().any(|o| o == opt)
    }

    /// Iterates over the option tokens in annotation order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        let raw = self.0;
        raw.split(',').filter(move |_| !raw.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Splits a raw annotation into its name and options.
///
/// Accepts any text; there is no invalid annotation. The [`SKIP`] sentinel is
/// not special here, the encoder checks for it before parsing.
#[must_use]
pub fn parse_tag(raw: &str) -> Tag<'_> {
    match raw.split_once(',') {
        Some((name, options)) => Tag {
            name,
            options: TagOptions(options),
        },
        None => Tag {
            name: raw,
            options: TagOptions::default(),
        },
    }
}
