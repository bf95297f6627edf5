//! Scalar formatting.
//!
//! Turns a resolved [`Value`] into the text that goes into a header.
//!
//! | Kind | Default | `int` | `unix` |
//! |------|---------|-------|--------|
//! | text | literal | | |
//! | boolean | `true` / `false` | `1` / `0` | |
//! | integer | base 10 | | |
//! | float | shortest round-trip decimal, exponent form below `1e-4` or from `1e21` | | |
//! | timestamp | RFC 3339, e.g. `2000-01-01T12:34:56Z` | | epoch seconds |
//!
//! ```rust
//! use header_fields::format::format_value;
//! use header_fields::tag::parse_tag;
//! use header_fields::Value;
//!
//! let int = parse_tag(",int").options;
//! assert_eq!(format_value(&Value::Bool(true), &int), "1");
//! assert_eq!(format_value(&Value::F32(0.1), &Default::default()), "0.1");
//! ```

use crate::record::Fields;
use crate::tag::{TagOptions, INT, UNIX};
use crate::value::{resolve, Value};
use chrono::SecondsFormat;
use std::fmt;

/// Formats a value under the given options. Never fails.
///
/// A `Nullable` reaching this point is resolved here: a nil chain formats as
/// the empty string.
#[must_use]
pub fn format_value(value: &Value<'_>, options: &TagOptions<'_>) -> String {
    match *value {
        Value::Str(s) => s.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Bool(b) if options.contains(INT) => (if b { "1" } else { "0" }).to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::BigInt(n) => n.to_string(),
        Value::F32(n) => format_float(n, n.is_nan(), n.is_infinite()),
        Value::F64(n) => format_float(n, n.is_nan(), n.is_infinite()),
        Value::Time(t) if options.contains(UNIX) => t.timestamp().to_string(),
        Value::Time(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        Value::Record(record) => {
            let parts: Vec<String> = Fields::collect(record)
                .iter()
                .map(|field| match resolve(field.value()) {
                    Some(v) => format_value(&v, &TagOptions::default()),
                    None => "<nil>".to_string(),
                })
                .collect();
            format!("{{{}}}", parts.join(" "))
        }
        Value::Nullable(_) => match value.resolve() {
            Some(v) => format_value(&v, options),
            None => String::new(),
        },
        Value::Display(d) => d.to_string(),
    }
}

// Shortest text that parses back to the same value at the float's own width.
// Very large or very small magnitudes switch to exponent form (`1e+21`,
// `1e-07`) so a header never carries hundreds of digits.
fn format_float<F>(n: F, nan: bool, infinite: bool) -> String
where
    F: fmt::Display + fmt::LowerExp + PartialOrd + Default,
{
    if nan {
        return "NaN".to_string();
    }
    if infinite {
        let sign = if n > F::default() { "+" } else { "-" };
        return format!("{sign}Inf");
    }

    let exponential = format!("{n:e}");
    let Some((mantissa, exp)) = exponential.split_once('e') else {
        return n.to_string();
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return n.to_string(),
    };
    if (-4..21).contains(&exp) {
        n.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}
