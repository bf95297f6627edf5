//! # header_fields
//!
//! Encode annotated Rust records into protocol header field maps.
//!
//! ## Overview
//!
//! Instead of building a header map by hand, describe the header-bearing data
//! as a record: each field has a name, an optional annotation, and a typed
//! value. The encoder walks the record (including embedded records), decides
//! which fields appear, under what key and with what text, and returns a
//! [`HeaderMap`] ready to be merged into an outgoing request.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use header_fields::{encode, headers, Fields, HeaderValue, Record, Value};
//!
//! struct Upload {
//!     content_type: String,
//!     checksum: Option<String>,
//!     sent: chrono::DateTime<Utc>,
//!     overwrite: bool,
//!     internal: u64,
//! }
//!
//! impl Record for Upload {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields
//!             .tagged("ContentType", "content-type", &self.content_type)
//!             .tagged("Checksum", "x-checksum,omitempty", &self.checksum)
//!             .tagged("Sent", "x-sent,unix", &self.sent)
//!             .tagged("Overwrite", "x-overwrite,int", &self.overwrite)
//!             .private("internal", &self.internal);
//!     }
//! }
//!
//! impl HeaderValue for Upload {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//!
//! let upload = Upload {
//!     content_type: "text/plain".to_string(),
//!     checksum: None,
//!     sent: Utc.with_ymd_and_hms(2000, 1, 1, 12, 34, 56).unwrap(),
//!     overwrite: true,
//!     internal: 42,
//! };
//!
//! let map = encode(&upload).unwrap();
//! assert_eq!(
//!     map,
//!     headers! {
//!         "Content-Type" => "text/plain",
//!         "X-Sent" => "946730096",
//!         "X-Overwrite" => "1",
//!     }
//! );
//! ```
//!
//! ## Annotations
//!
//! | Annotation | Meaning |
//! |------------|---------|
//! | `""` | key is the field's own name |
//! | `"name"` | key is `name` (even if `name` is `omitempty`) |
//! | `"name,opt,..."` | key is `name` (or the field name if empty), with options |
//! | `"-"` | never encode this field |
//!
//! Options: `omitempty` (skip zero values of the field's own type), `int`
//! (booleans as `1`/`0`), `unix` (timestamps as epoch seconds). Unknown
//! options are ignored.
//!
//! ## Input
//!
//! [`encode`] accepts a record, any reference to one (`&T`, `Box<T>`,
//! `Option<T>`, ...), or an absent value (`None`, `()`), which encodes to an
//! empty map. Anything else is rejected with [`Error::InvalidInputKind`].

pub mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod record;
pub mod tag;
pub mod value;

pub use encode::Encoder;
pub use error::{Error, Result};
pub use map::{canonical_key, HeaderMap};
pub use options::EncodeOptions;
pub use record::{Field, FieldDescriptor, Fields, Record};
pub use tag::{parse_tag, Tag, TagOptions};
pub use value::{HeaderValue, Value};

/// Encode a record into a new [`HeaderMap`] with default options.
///
/// # Examples
///
/// ```rust
/// use header_fields::encode;
///
/// let map = encode(&()).unwrap();
/// assert!(map.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `input` is neither a record, a
/// reference to one, nor absent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<T>(input: &T) -> Result<HeaderMap>
where
    T: ?Sized + HeaderValue,
{
    encode_with_options(input, EncodeOptions::default())
}

/// Encode a record into a new [`HeaderMap`] with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `input` is neither a record, a
/// reference to one, nor absent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options<T>(input: &T, options: EncodeOptions) -> Result<HeaderMap>
where
    T: ?Sized + HeaderValue,
{
    Encoder::new(options).encode(input)
}

/// Encode a record and merge the result into `map`, replacing values under
/// the keys it produces.
///
/// # Examples
///
/// ```rust
/// use header_fields::{encode_into, headers};
///
/// let mut map = headers! { "Host" => "example.com" };
/// encode_into(&mut map, &None::<()>).unwrap();
/// assert_eq!(map.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `input` is neither a record, a
/// reference to one, nor absent; `map` is left untouched.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_into<T>(map: &mut HeaderMap, input: &T) -> Result<()>
where
    T: ?Sized + HeaderValue,
{
    Encoder::default().encode_into(map, input)
}
