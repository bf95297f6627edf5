//! Record encoding.
//!
//! This module provides the [`Encoder`], which walks a [`Record`] and writes
//! one header per encodable field.
//!
//! ## Field rules
//!
//! For every field, in declaration order:
//!
//! 1. Fields that are not exported are skipped (embedded records are still
//!    entered, only their exported fields count).
//! 2. The annotation `-` skips the field.
//! 3. Embedded records are entered and their fields promoted to the parent
//!    level, without a key prefix.
//! 4. Optional references are followed; a nil link encodes as the configured
//!    nil value (`""` by default) and the field is still written.
//! 5. The key is the annotation name, or the field's own name.
//! 6. With `omitempty`, a field whose own value is zero is left out.
//! 7. The value is formatted (see [`format`](crate::format)).
//! 8. The key is canonicalized and the value inserted, replacing any earlier
//!    value under the same key.
//!
//! ## Promotion
//!
//! Embedded records are walked breadth first. A key claimed at a shallower
//! depth hides the same key deeper down. Two different embedded records
//! producing the same key at the same depth cancel each other out, and the key
//! stays hidden for deeper levels too.
//!
//! ## Usage
//!
//! ```rust
//! use header_fields::{Encoder, EncodeOptions, Fields, HeaderValue, Record, Value};
//!
//! struct Ping {
//!     seq: u32,
//! }
//!
//! impl Record for Ping {
//!     fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
//!         fields.tagged("seq", "x-seq", &self.seq);
//!     }
//! }
//!
//! impl HeaderValue for Ping {
//!     fn value(&self) -> Value<'_> {
//!         Value::Record(self)
//!     }
//! }
//!
//! let encoder = Encoder::new(EncodeOptions::default());
//! let map = encoder.encode(&Ping { seq: 3 }).unwrap();
//! assert_eq!(map.get("X-Seq"), Some("3"));
//! ```

use crate::format::format_value;
use crate::map::canonical_key;
use crate::record::{Field, Fields, Record};
use crate::tag::{parse_tag, OMIT_EMPTY, SKIP};
use crate::value::{resolve, HeaderValue, Value};
use crate::{EncodeOptions, Error, HeaderMap, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Encodes records into [`HeaderMap`]s.
///
/// The encoder holds only its options; it can be shared and reused freely.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

/// What a single field contributes to its level.
enum Visit<'a> {
    Skip,
    Embed(&'a dyn Record),
    /// `value` is `None` when the field was omitted; it still claims `key`.
    Leaf { key: String, value: Option<String> },
}

/// A key found at the depth currently being walked.
struct Candidate {
    owner: usize,
    path: Vec<usize>,
    value: Option<String>,
    ambiguous: bool,
}

/// A key settled at some shallower depth.
enum Claim {
    Field {
        path: Vec<usize>,
        value: Option<String>,
    },
    Ambiguous,
}

struct Pending<'a> {
    record: &'a dyn Record,
    path: Vec<usize>,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `input` into a fresh map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputKind`] if `input` is neither a record, a
    /// reference to one, nor absent.
    pub fn encode<T>(&self, input: &T) -> Result<HeaderMap>
    where
        T: ?Sized + HeaderValue,
    {
        let mut map = HeaderMap::new();
        self.encode_into(&mut map, input)?;
        Ok(map)
    }

    /// Encodes `input` into an existing map, replacing values under keys the
    /// record produces and leaving other keys alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputKind`] if `input` is neither a record, a
    /// reference to one, nor absent. The map is untouched in that case.
    pub fn encode_into<T>(&self, map: &mut HeaderMap, input: &T) -> Result<()>
    where
        T: ?Sized + HeaderValue,
    {
        match input.value().resolve() {
            None => {
                trace!("absent input, nothing to encode");
                Ok(())
            }
            Some(Value::Record(record)) => {
                for (key, value) in self.walk(record) {
                    map.insert(key, value);
                }
                Ok(())
            }
            Some(other) => {
                debug!(kind = other.kind_name(), "rejecting non-record input");
                Err(Error::invalid_input_kind(other.kind_name()))
            }
        }
    }

    /// Walks `root` and its embedded records breadth first, returning the
    /// surviving headers in declaration order.
    fn walk(&self, root: &dyn Record) -> Vec<(String, String)> {
        let mut claimed: HashMap<String, Claim> = HashMap::new();
        let mut level = vec![Pending {
            record: root,
            path: Vec::new(),
        }];
        let mut depth = 0usize;

        while !level.is_empty() {
            let mut found: IndexMap<String, Candidate> = IndexMap::new();
            let mut next = Vec::new();

            for (owner, pending) in level.iter().enumerate() {
                for (index, field) in Fields::collect(pending.record).iter().enumerate() {
                    let mut path = pending.path.clone();
                    path.push(index);

                    match self.visit(field) {
                        Visit::Skip => {}
                        Visit::Embed(record) => {
                            trace!(field = field.descriptor().name(), depth, "entering embedded record");
                            next.push(Pending { record, path });
                        }
                        Visit::Leaf { key, value } => match found.entry(key) {
                            Entry::Occupied(mut entry) => {
                                let candidate = entry.get_mut();
                                if candidate.owner == owner {
                                    // an omitted field writes nothing over an earlier value
                                    if value.is_some() {
                                        candidate.value = value;
                                    }
                                } else {
                                    candidate.ambiguous = true;
                                }
                            }
                            Entry::Vacant(entry) => {
                                entry.insert(Candidate {
                                    owner,
                                    path,
                                    value,
                                    ambiguous: false,
                                });
                            }
                        },
                    }
                }
            }

            for (key, candidate) in found {
                if claimed.contains_key(&key) {
                    trace!(key = %key, depth, "shadowed by a shallower field");
                    continue;
                }
                let claim = if candidate.ambiguous {
                    debug!(key = %key, depth, "dropping ambiguous promoted field");
                    Claim::Ambiguous
                } else {
                    Claim::Field {
                        path: candidate.path,
                        value: candidate.value,
                    }
                };
                claimed.insert(key, claim);
            }

            level = next;
            depth += 1;
        }

        let mut headers: Vec<(Vec<usize>, String, String)> = claimed
            .into_iter()
            .filter_map(|(key, claim)| match claim {
                Claim::Field {
                    path,
                    value: Some(value),
                } => Some((path, key, value)),
                _ => None,
            })
            .collect();
        headers.sort_by(|a, b| a.0.cmp(&b.0));
        headers
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .collect()
    }

    fn visit<'a>(&self, field: &Field<'a>) -> Visit<'a> {
        let descriptor = field.descriptor();

        if !descriptor.is_exported() && !descriptor.is_embedded() {
            trace!(field = descriptor.name(), "skipping unexported field");
            return Visit::Skip;
        }
        if descriptor.tag() == SKIP {
            trace!(field = descriptor.name(), "skipping field tagged `-`");
            return Visit::Skip;
        }
        if descriptor.is_embedded() {
            match resolve(field.value()) {
                Some(Value::Record(record)) => return Visit::Embed(record),
                None => {
                    trace!(field = descriptor.name(), "embedded reference is nil");
                    return Visit::Skip;
                }
                Some(_) if !descriptor.is_exported() => return Visit::Skip,
                // an embedded scalar is an ordinary field
                Some(_) => {}
            }
        }

        let tag = parse_tag(descriptor.tag());
        let name = if tag.name.is_empty() {
            descriptor.name()
        } else {
            tag.name
        };
        let key = if self.options.canonical_keys {
            canonical_key(name)
        } else {
            name.to_string()
        };

        if tag.options.contains(OMIT_EMPTY) && field.value().is_zero() {
            trace!(key = %key, "omitting empty field");
            return Visit::Leaf { key, value: None };
        }

        let value = match resolve(field.value()) {
            Some(value) => format_value(&value, &tag.options),
            None => self.options.nil_value.clone(),
        };
        Visit::Leaf {
            key,
            value: Some(value),
        }
    }
}
