//! Sequence views that hand out wrapped elements
//!
//! Every way of getting an element out of a [`WrappedSequence`] goes
//! through [`wrap`]: positional access, `first`/`last`, iteration, and
//! therefore every [`Iterator`] combinator (`map`, `filter`, `fold`,
//! `min_by_key`, `partition`, `rev`, `cycle`, ...). Windowed and chunked
//! iteration, plus grouping, are provided directly.

use crate::value::Value;
use crate::wrap::{wrap, Wrapped};
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

/// Wrapped elements of one window or chunk
pub type Group<'a> = SmallVec<[Wrapped<'a>; 4]>;

/// Sequence view
///
/// The raw elements stay reachable through [`WrappedSequence::as_slice`];
/// every other accessor returns wrapped elements.
#[derive(Debug, Clone, Copy)]
pub struct WrappedSequence<'a> {
    value: &'a Value,
    items: &'a [Value],
}

impl<'a> WrappedSequence<'a> {
    pub(crate) fn new(value: &'a Value, items: &'a [Value]) -> Self {
        Self { value, items }
    }

    /// Underlying value
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    /// Raw, unwrapped elements
    pub fn as_slice(&self) -> &'a [Value] {
        self.items
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wrapped element at `index`, or [`Wrapped::Absent`] when out of range
    ///
    /// Indices are unsigned; see [`WrappedSequence::get_signed`] for
    /// counting from the end.
    pub fn get(&self, index: usize) -> Wrapped<'a> {
        wrap(self.items.get(index))
    }

    /// Wrapped element at a signed index
    ///
    /// Negative indices count from the end, so `-1` is the last element.
    pub fn get_signed(&self, index: isize) -> Wrapped<'a> {
        let position = if index < 0 {
            self.items.len().checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        wrap(position.and_then(|i| self.items.get(i)))
    }

    /// Wrapped first element
    pub fn first(&self) -> Wrapped<'a> {
        wrap(self.items.first())
    }

    /// Wrapped last element
    pub fn last(&self) -> Wrapped<'a> {
        wrap(self.items.last())
    }

    /// Iterate over wrapped elements
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Overlapping windows of `size` wrapped elements
    ///
    /// A size of zero is treated as one.
    pub fn windows(&self, size: usize) -> Windows<'a> {
        Windows {
            inner: self.items.windows(size.max(1)),
        }
    }

    /// Consecutive chunks of up to `size` wrapped elements
    ///
    /// The last chunk may be shorter. A size of zero is treated as one.
    pub fn chunks(&self, size: usize) -> Chunks<'a> {
        Chunks {
            inner: self.items.chunks(size.max(1)),
        }
    }

    /// Whether an element equal to `needle` exists
    pub fn contains(&self, needle: &Value) -> bool {
        self.items.contains(needle)
    }

    /// Group wrapped elements by a key derived from each element
    ///
    /// Elements keep their relative order within a group.
    pub fn group_by<K, F>(&self, mut key_fn: F) -> AHashMap<K, Vec<Wrapped<'a>>>
    where
        K: Hash + Eq,
        F: FnMut(&Wrapped<'a>) -> K,
    {
        let mut groups: AHashMap<K, Vec<Wrapped<'a>>> = AHashMap::new();
        for element in self.iter() {
            groups.entry(key_fn(&element)).or_default().push(element);
        }
        groups
    }

    /// Collect all wrapped elements
    pub fn to_vec(&self) -> Vec<Wrapped<'a>> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for WrappedSequence<'a> {
    type Item = Wrapped<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &WrappedSequence<'a> {
    type Item = Wrapped<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<T: ?Sized> PartialEq<T> for WrappedSequence<'_>
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &T) -> bool {
        PartialEq::eq(self.value, other)
    }
}

/// Iterator over wrapped sequence elements
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> Iter<'a> {
    /// Iterator that yields nothing
    pub fn empty() -> Self {
        Iter {
            inner: <&'a [Value]>::default().iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Wrapped<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(wrap)
    }

    fn count(self) -> usize {
        self.inner.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(wrap)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over overlapping windows of wrapped elements
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    inner: slice::Windows<'a, Value>,
}

impl<'a> Iterator for Windows<'a> {
    type Item = Group<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(wrap_all)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Windows<'_> {}

/// Iterator over consecutive chunks of wrapped elements
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: slice::Chunks<'a, Value>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Group<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(wrap_all)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}

fn wrap_all(items: &[Value]) -> Group<'_> {
    items.iter().map(wrap).collect()
}
