//! Typed views of field values.
//!
//! Rust has no run-time reflection, so every type that can appear as a header
//! field implements [`HeaderValue`] and reports what kind of value it holds
//! through [`Value`]. The encoder only ever looks at values through this
//! trait.
//!
//! ## Kinds
//!
//! | Rust type | [`Value`] |
//! |-----------|-----------|
//! | `str`, `String`, `Cow<str>` | [`Value::Str`] |
//! | `char` | [`Value::Char`] |
//! | `bool` | [`Value::Bool`] |
//! | `i8`..`i128`, `isize` | [`Value::Int`] |
//! | `u8`..`u128`, `usize` | [`Value::Uint`] |
//! | `BigInt` | [`Value::BigInt`] |
//! | `f32` / `f64` | [`Value::F32`] / [`Value::F64`] |
//! | `DateTime<Tz>` | [`Value::Time`] |
//! | `Option<T>` | [`Value::Nullable`] |
//! | `()` | [`Value::Nullable`] (always nil) |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | whatever `T` reports |
//!
//! References and smart pointers are never zero, whatever they point to, so
//! `omitempty` never drops them. This includes borrowed text: a `&str` field
//! holding `""` is written, while a `String` or `Cow<str>` holding `""` is
//! omitted. Store owned text when the field should be omittable.
//!
//! Record types report [`Value::Record`]:
//!
//! ```rust
//! use header_fields::{Fields, HeaderValue, Record, Value};
//!
//! struct Auth {
//!     token: String,
//! }
//!
//! impl Record for Auth {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields.tagged("token", "Authorization", &self.token);
//!     }
//! }
//!
//! impl HeaderValue for Auth {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//! ```

use crate::record::{Fields, Record};
use chrono::{DateTime, FixedOffset, TimeZone};
use num_bigint::{BigInt, Sign};
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The kind and contents of a single field value.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Str(&'a str),
    Char(char),
    Bool(bool),
    Int(i128),
    Uint(u128),
    BigInt(&'a BigInt),
    F32(f32),
    F64(f64),
    Time(DateTime<FixedOffset>),
    Record(&'a dyn Record),
    /// One level of optional indirection; `None` is a nil reference.
    Nullable(Option<&'a dyn HeaderValue>),
    /// Anything else, rendered through its `Display` impl.
    Display(&'a dyn fmt::Display),
}

impl<'a> Value<'a> {
    /// A short, human readable name for this kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) | Value::Char(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Uint(_) | Value::BigInt(_) => "integer",
            Value::F32(_) | Value::F64(_) => "float",
            Value::Time(_) => "timestamp",
            Value::Record(_) => "record",
            Value::Nullable(_) => "reference",
            Value::Display(_) => "value",
        }
    }

    /// Follows `Nullable` links until a concrete value or a nil link is
    /// reached. Returns `None` if any link in the chain is nil.
    #[must_use]
    pub fn resolve(self) -> Option<Value<'a>> {
        let mut current = self;
        loop {
            match current {
                Value::Nullable(Some(next)) => current = next.value(),
                Value::Nullable(None) => return None,
                other => return Some(other),
            }
        }
    }

    /// Returns `true` if this is the zero value of its own kind.
    ///
    /// A `Nullable` is zero only when it is nil, whatever it points to.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Str(s) => s.is_empty(),
            Value::Char(c) => c == '\0',
            Value::Bool(b) => !b,
            Value::Int(n) => n == 0,
            Value::Uint(n) => n == 0,
            Value::BigInt(n) => n.sign() == Sign::NoSign,
            Value::F32(n) => n == 0.0,
            Value::F64(n) => n == 0.0,
            Value::Time(t) => t.timestamp() == 0 && t.timestamp_subsec_nanos() == 0,
            Value::Record(r) => Fields::collect(r).iter().all(|f| f.value().is_zero()),
            Value::Nullable(inner) => inner.is_none(),
            Value::Display(_) => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::F32(n) => f.debug_tuple("F32").field(n).finish(),
            Value::F64(n) => f.debug_tuple("F64").field(n).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Record(_) => f.write_str("Record(..)"),
            Value::Nullable(None) => f.write_str("Nullable(None)"),
            Value::Nullable(Some(_)) => f.write_str("Nullable(Some(..))"),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
        }
    }
}

/// A type that can be encoded as a header field (or, for records, as a set of
/// header fields).
pub trait HeaderValue {
    /// Reports this value's kind, looking through at most one level of
    /// optional indirection.
    fn value(&self) -> Value<'_>;

    /// Returns `true` if this is the zero value of its own type.
    ///
    /// Non-nil references override this to return `false` regardless of what
    /// they point to.
    fn is_zero(&self) -> bool {
        self.value().is_zero()
    }
}

/// Resolves a value through any chain of optional references.
///
/// # Examples
///
/// ```rust
/// use header_fields::value::resolve;
/// use header_fields::Value;
///
/// let inner = Some(String::from("x"));
/// assert!(matches!(resolve(&Some(inner)), Some(Value::Str("x"))));
/// assert!(resolve(&Some(None::<String>)).is_none());
/// ```
#[must_use]
pub fn resolve(value: &dyn HeaderValue) -> Option<Value<'_>> {
    value.value().resolve()
}

impl HeaderValue for str {
    fn value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl HeaderValue for String {
    fn value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl HeaderValue for Cow<'_, str> {
    fn value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl HeaderValue for char {
    fn value(&self) -> Value<'_> {
        Value::Char(*self)
    }
}

impl HeaderValue for bool {
    fn value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! impl_integer {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl HeaderValue for $ty {
                fn value(&self) -> Value<'_> {
                    Value::$variant(*self as _)
                }
            }
        )*
    };
}

impl_integer!(Int => i8, i16, i32, i64, i128, isize);
impl_integer!(Uint => u8, u16, u32, u64, u128, usize);

impl HeaderValue for BigInt {
    fn value(&self) -> Value<'_> {
        Value::BigInt(self)
    }
}

impl HeaderValue for f32 {
    fn value(&self) -> Value<'_> {
        Value::F32(*self)
    }
}

impl HeaderValue for f64 {
    fn value(&self) -> Value<'_> {
        Value::F64(*self)
    }
}

impl<Tz: TimeZone> HeaderValue for DateTime<Tz> {
    fn value(&self) -> Value<'_> {
        Value::Time(self.fixed_offset())
    }
}

impl HeaderValue for () {
    fn value(&self) -> Value<'_> {
        Value::Nullable(None)
    }
}

impl<T: HeaderValue> HeaderValue for Option<T> {
    fn value(&self) -> Value<'_> {
        Value::Nullable(self.as_ref().map(|v| v as &dyn HeaderValue))
    }
}

impl<T: HeaderValue + ?Sized> HeaderValue for &T {
    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: HeaderValue + ?Sized> HeaderValue for &mut T {
    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn is_zero(&self) -> bool {
        false
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: HeaderValue + ?Sized> HeaderValue for $ptr<T> {
                fn value(&self) -> Value<'_> {
                    (**self).value()
                }

                fn is_zero(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);
