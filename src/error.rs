//! Error types for header encoding.
//!
//! Encoding has exactly one failure mode: the top-level input is not a
//! record. Everything past that check is total, so there are no field-level
//! errors to report.
//!
//! ## Examples
//!
//! ```rust
//! use header_fields::{encode, Error};
//!
//! let result = encode("not a record");
//! assert!(matches!(result, Err(Error::InvalidInputKind { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while encoding headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The top-level input was neither a record, a reference to one, nor absent.
    #[error("invalid input kind: expected a record, found {kind}")]
    InvalidInputKind { kind: &'static str },
}

impl Error {
    /// Creates an invalid input error naming the kind that was supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_fields::Error;
    ///
    /// let err = Error::invalid_input_kind("string");
    /// assert!(err.to_string().contains("found string"));
    /// ```
    pub fn invalid_input_kind(kind: &'static str) -> Self {
        Error::InvalidInputKind { kind }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
