/// Implements [`HeaderValue`](crate::HeaderValue) for record types, so they can
/// be passed to [`encode`](crate::encode) and used as (embedded) fields.
///
/// ```rust
/// use header_fields::{encode, record_value, Fields, Record};
///
/// struct Ping {
///     seq: u32,
/// }
///
/// impl Record for Ping {
///     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
///         fields.field("seq", &self.seq);
///     }
/// }
///
/// record_value!(Ping);
///
/// assert_eq!(encode(&Ping { seq: 1 }).unwrap().get("Seq"), Some("1"));
/// ```
#[macro_export]
macro_rules! record_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::HeaderValue for $ty {
                fn value(&self) -> $crate::Value<'_> {
                    $crate::Value::Record(self)
                }
            }
        )+
    };
}

/// Builds a [`HeaderMap`](crate::HeaderMap) from `key => value` pairs.
///
/// A value is either a single expression token (usually a string literal) or
/// a bracketed list, which stores several values under one key.
///
/// ```rust
/// use header_fields::headers;
///
/// let map = headers! {
///     "Accept" => ["text/html", "text/plain"],
///     "X-Id" => "7",
/// };
/// assert_eq!(map.get_all("Accept").len(), 2);
/// assert_eq!(map.get("X-Id"), Some("7"));
/// ```
#[macro_export]
macro_rules! headers {
    (@insert $map:ident, $key:expr, [ $($value:expr),* $(,)? ]) => {
        $( $map.append($key, $value); )*
    };

    (@insert $map:ident, $key:expr, $value:expr) => {
        $map.insert($key, $value);
    };

    // Handle empty map
    () => {
        $crate::HeaderMap::new()
    };

    ({}) => {
        $crate::HeaderMap::new()
    };

    ($($key:literal => $value:tt),+ $(,)?) => {{
        let mut map = $crate::HeaderMap::new();
        $(
            $crate::headers!(@insert map, $key, $value);
        )+
        map
    }};
}
