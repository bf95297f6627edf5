//! Record descriptions.
//!
//! A record lists its fields, in declaration order, by implementing
//! [`Record::fields`]. Each entry pairs a [`FieldDescriptor`] (own name, raw
//! annotation, visibility, embedding) with a borrowed [`HeaderValue`].
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use header_fields::{Fields, HeaderValue, Record, Value};
//!
//! struct Common {
//!     user_agent: String,
//! }
//!
//! struct Request {
//!     common: Common,
//!     request_id: Option<String>,
//!     sent: DateTime<Utc>,
//!     secret: String,
//! }
//!
//! impl Record for Common {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields.tagged("UserAgent", "User-Agent", &self.user_agent);
//!     }
//! }
//!
//! impl Record for Request {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields
//!             .embed("Common", &self.common)
//!             .tagged("RequestId", "X-Request-Id,omitempty", &self.request_id)
//!             .tagged("Sent", "X-Sent,unix", &self.sent)
//!             .private("secret", &self.secret);
//!     }
//! }
//!
//! impl HeaderValue for Common {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//!
//! impl HeaderValue for Request {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//! ```

use crate::value::HeaderValue;

/// A composite value whose fields can be encoded as headers.
pub trait Record {
    /// Pushes one entry per field, in declaration order.
    fn fields<'a>(&'a self, fields: &mut Fields<'a>);
}

/// Structural metadata of one record field.
///
/// Built once when the record describes itself; there are no setters, so
/// visibility and embedding cannot change during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    tag: &'static str,
    exported: bool,
    embedded: bool,
}

impl FieldDescriptor {
    /// A visible, non-embedded field with no annotation.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        FieldDescriptor {
            name,
            tag: "",
            exported: true,
            embedded: false,
        }
    }

    /// Attaches the raw annotation text.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Marks the field as not externally visible.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Marks the field as an anonymous embedding whose fields are promoted.
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}

/// One field of a record: its descriptor and a borrowed view of its value.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    descriptor: FieldDescriptor,
    value: &'a dyn HeaderValue,
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn value(&self) -> &'a dyn HeaderValue {
        self.value
    }
}

/// Collects the fields a [`Record`] describes.
#[derive(Default)]
pub struct Fields<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    #[must_use]
    pub fn new() -> Self {
        Fields { fields: Vec::new() }
    }

    /// Asks `record` to describe itself and returns its fields in order.
    #[must_use]
    pub fn collect(record: &'a dyn Record) -> Vec<Field<'a>> {
        let mut fields = Fields::new();
        record.fields(&mut fields);
        fields.fields
    }

    /// Adds a field with an explicit descriptor.
    pub fn push(&mut self, descriptor: FieldDescriptor, value: &'a dyn HeaderValue) -> &mut Self {
        self.fields.push(Field { descriptor, value });
        self
    }

    /// Adds a visible field with no annotation.
    pub fn field(&mut self, name: &'static str, value: &'a dyn HeaderValue) -> &mut Self {
        self.push(FieldDescriptor::new(name), value)
    }

    /// Adds a visible field with a raw annotation such as `"X-Id,omitempty"`.
    pub fn tagged(
        &mut self,
        name: &'static str,
        tag: &'static str,
        value: &'a dyn HeaderValue,
    ) -> &mut Self {
        self.push(FieldDescriptor::new(name).with_tag(tag), value)
    }

    /// Adds a field that is never encoded.
    pub fn private(&mut self, name: &'static str, value: &'a dyn HeaderValue) -> &mut Self {
        self.push(FieldDescriptor::new(name).private(), value)
    }

    /// Adds an anonymously embedded record whose fields are promoted.
    pub fn embed(&mut self, name: &'static str, value: &'a dyn HeaderValue) -> &mut Self {
        self.push(FieldDescriptor::new(name).embedded(), value)
    }

    /// Adds an embedded record of a type that is not externally visible.
    ///
    /// Its visible fields are still promoted.
    pub fn embed_private(&mut self, name: &'static str, value: &'a dyn HeaderValue) -> &mut Self {
        self.push(FieldDescriptor::new(name).embedded().private(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
