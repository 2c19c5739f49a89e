//! The wrapper: shape-based dispatch and the [`Wrapped`] view
//!
//! [`wrap`] inspects a value once and picks a view for its shape. Views
//! borrow the underlying data, dereference to it, and wrap children only
//! when they are handed out, so wrapping a huge document costs the same as
//! wrapping a scalar.

use crate::error::{HashpathError, Result};
use crate::key::Key;
use crate::limits::PathLimits;
use crate::mapping::WrappedMapping;
use crate::path;
use crate::sequence::{Iter, WrappedSequence};
use crate::value::{Value, NULL};
use serde::de::DeserializeOwned;
use std::fmt;
use std::ops::Deref;

/// Wrap a value for attribute-style access
///
/// Mappings and sequences get a view that hands out further wrapped
/// children; scalars come back unchanged; null becomes
/// [`Wrapped::Absent`]. Wrapping an already wrapped value returns an
/// equivalent view.
pub fn wrap<'a, T: IntoWrapped<'a>>(value: T) -> Wrapped<'a> {
    value.into_wrapped()
}

/// Conversion into a [`Wrapped`] view
pub trait IntoWrapped<'a> {
    /// Produce the view
    fn into_wrapped(self) -> Wrapped<'a>;
}

impl<'a> IntoWrapped<'a> for &'a Value {
    fn into_wrapped(self) -> Wrapped<'a> {
        match self {
            Value::Mapping(entries) => Wrapped::Mapping(WrappedMapping::new(self, entries)),
            Value::Sequence(items) => Wrapped::Sequence(WrappedSequence::new(self, items)),
            Value::Null => Wrapped::Absent,
            _ => Wrapped::Scalar(self),
        }
    }
}

impl<'a> IntoWrapped<'a> for Option<&'a Value> {
    fn into_wrapped(self) -> Wrapped<'a> {
        self.map(wrap).unwrap_or(Wrapped::Absent)
    }
}

impl<'a> IntoWrapped<'a> for Wrapped<'a> {
    fn into_wrapped(self) -> Wrapped<'a> {
        self
    }
}

impl<'a> IntoWrapped<'a> for &Wrapped<'a> {
    fn into_wrapped(self) -> Wrapped<'a> {
        *self
    }
}

impl<'a> IntoWrapped<'a> for WrappedMapping<'a> {
    fn into_wrapped(self) -> Wrapped<'a> {
        Wrapped::Mapping(self)
    }
}

impl<'a> IntoWrapped<'a> for WrappedSequence<'a> {
    fn into_wrapped(self) -> Wrapped<'a> {
        Wrapped::Sequence(self)
    }
}

/// A value viewed through the wrapper
///
/// Dereferences to the underlying [`Value`], so type checks and native
/// operations (`is_mapping`, `as_i64`, `value["key"]`, ...) behave exactly
/// as on the unwrapped value. [`Wrapped::Absent`] dereferences to null.
#[derive(Debug, Clone, Copy)]
pub enum Wrapped<'a> {
    /// Mapping view with attribute access
    Mapping(WrappedMapping<'a>),
    /// Sequence view handing out wrapped elements
    Sequence(WrappedSequence<'a>),
    /// Scalar, passed through unchanged
    Scalar(&'a Value),
    /// No value: missing key, out-of-range index or explicit null
    Absent,
}

impl<'a> Wrapped<'a> {
    /// Underlying value, for the full borrow lifetime
    pub fn value(&self) -> &'a Value {
        match *self {
            Wrapped::Mapping(map) => map.as_value(),
            Wrapped::Sequence(seq) => seq.as_value(),
            Wrapped::Scalar(value) => value,
            Wrapped::Absent => &NULL,
        }
    }

    /// Whether this is the absence marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Wrapped::Absent)
    }

    /// Whether a value is present
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// `Some(self)` unless absent
    pub fn present(self) -> Option<Wrapped<'a>> {
        match self {
            Wrapped::Absent => None,
            found => Some(found),
        }
    }

    /// Mapping view, if this is a mapping
    pub fn mapping(&self) -> Option<WrappedMapping<'a>> {
        match *self {
            Wrapped::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Sequence view, if this is a sequence
    pub fn sequence(&self) -> Option<WrappedSequence<'a>> {
        match *self {
            Wrapped::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// String payload with the underlying data's lifetime
    pub fn as_str(&self) -> Option<&'a str> {
        self.value().as_str()
    }

    /// Attribute-style field access
    ///
    /// Looks up `name` as a symbolic key, then as a textual key. Anything
    /// other than a mapping, and any missing field, yields
    /// [`Wrapped::Absent`].
    pub fn attr(&self, name: &str) -> Wrapped<'a> {
        match self {
            Wrapped::Mapping(map) => map.attr(name),
            _ => Wrapped::Absent,
        }
    }

    /// Attribute access with an explicit key form, falling back to the
    /// alternate form
    pub fn attr_key(&self, key: &Key) -> Wrapped<'a> {
        match self {
            Wrapped::Mapping(map) => map.attr_key(key),
            _ => Wrapped::Absent,
        }
    }

    /// Strict attribute access
    pub fn require(&self, name: &str) -> Result<Wrapped<'a>> {
        match self {
            Wrapped::Mapping(map) => map.require(name),
            other => Err(HashpathError::TypeMismatch {
                field: name.to_string(),
                expected: "mapping",
                found: other.type_name(),
            }),
        }
    }

    /// Wrapped element at `index` of a sequence
    pub fn at(&self, index: usize) -> Wrapped<'a> {
        match self {
            Wrapped::Sequence(seq) => seq.get(index),
            _ => Wrapped::Absent,
        }
    }

    /// Wrapped element at a signed index; negative counts from the end
    pub fn at_signed(&self, index: isize) -> Wrapped<'a> {
        match self {
            Wrapped::Sequence(seq) => seq.get_signed(index),
            _ => Wrapped::Absent,
        }
    }

    /// First element of a sequence, wrapped
    pub fn first(&self) -> Wrapped<'a> {
        match self {
            Wrapped::Sequence(seq) => seq.first(),
            _ => Wrapped::Absent,
        }
    }

    /// Last element of a sequence, wrapped
    pub fn last(&self) -> Wrapped<'a> {
        match self {
            Wrapped::Sequence(seq) => seq.last(),
            _ => Wrapped::Absent,
        }
    }

    /// Wrapped elements of a sequence; empty for any other shape
    ///
    /// Only sequences are iterated. A mapping yields nothing here; use
    /// [`WrappedMapping::pairs`] for its entries.
    pub fn iter(&self) -> Iter<'a> {
        match self {
            Wrapped::Sequence(seq) => seq.iter(),
            _ => Iter::empty(),
        }
    }

    /// Follow a dotted path such as `posts.0.comments.0.text`
    ///
    /// Segments are field names on mappings and plain numeric indices on
    /// sequences. The empty path is the value itself. Any miss yields
    /// [`Wrapped::Absent`].
    pub fn path(&self, path: &str) -> Wrapped<'a> {
        path::walk_dotted(*self, path)
    }

    /// Resolve an RFC 6901 JSON Pointer with default limits
    ///
    /// The defaults are [`PathLimits::hard_maximums`]: pointers deeper
    /// than 256 segments or longer than 8192 bytes are rejected even when
    /// the document is that deep. [`Wrapped::path`] has no such limit.
    pub fn pointer(&self, pointer: &str) -> Result<Wrapped<'a>> {
        self.pointer_with_limits(pointer, &PathLimits::default())
    }

    /// Resolve an RFC 6901 JSON Pointer
    ///
    /// Unlike [`Wrapped::path`], a missing segment is an error that names
    /// the path reached and the keys available there.
    pub fn pointer_with_limits(&self, pointer: &str, limits: &PathLimits) -> Result<Wrapped<'a>> {
        path::resolve_pointer(*self, pointer, limits)
    }

    /// Deserialize the wrapped subtree into a typed value
    ///
    /// Symbolic keys are presented under their textual spelling. An absent
    /// value deserializes as null.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let json = serde_json::Value::from(self.value());
        Ok(serde_json::from_value(json)?)
    }

    /// Clone the underlying value
    pub fn to_value(&self) -> Value {
        self.value().clone()
    }
}

impl Deref for Wrapped<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        self.value()
    }
}

impl AsRef<Value> for Wrapped<'_> {
    fn as_ref(&self) -> &Value {
        self.value()
    }
}

/// Iterates sequence elements only, like [`Wrapped::iter`]
impl<'a> IntoIterator for Wrapped<'a> {
    type Item = Wrapped<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &Wrapped<'a> {
    type Item = Wrapped<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<T: ?Sized> PartialEq<T> for Wrapped<'_>
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &T) -> bool {
        PartialEq::eq(self.value(), other)
    }
}

impl fmt::Display for Wrapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}
