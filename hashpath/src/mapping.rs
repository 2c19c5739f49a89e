//! Attribute access over mappings

use crate::error::{HashpathError, Result};
use crate::key::Key;
use crate::path::describe_keys;
use crate::value::{Mapping, Value};
use crate::wrap::{wrap, Wrapped};
use std::ops::Deref;

/// Mapping view that adds attribute-style field access
///
/// Dereferences to the underlying [`Mapping`]; `get`, `contains_key`,
/// indexing and iteration keep their native, unwrapped behavior.
#[derive(Debug, Clone, Copy)]
pub struct WrappedMapping<'a> {
    value: &'a Value,
    entries: &'a Mapping,
}

impl<'a> WrappedMapping<'a> {
    pub(crate) fn new(value: &'a Value, entries: &'a Mapping) -> Self {
        Self { value, entries }
    }

    /// Underlying value
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    /// Underlying mapping
    pub fn as_mapping(&self) -> &'a Mapping {
        self.entries
    }

    /// Attribute-style field access
    ///
    /// Attribute names are symbolic, so the symbolic key is tried first and
    /// the textual key second. Mappings and sequences come back wrapped,
    /// scalars unchanged, and a missing field (or a null one) as
    /// [`Wrapped::Absent`].
    pub fn attr(&self, name: &str) -> Wrapped<'a> {
        self.attr_key(&Key::symbol(name))
    }

    /// Field access for an explicit key, falling back to the alternate
    /// key form when the exact key is missing or null
    pub fn attr_key(&self, key: &Key) -> Wrapped<'a> {
        wrap(self.entries.resolve(key))
    }

    /// Strict attribute access
    ///
    /// Same resolution as [`WrappedMapping::attr`], but a missing field is
    /// an error listing the keys that do exist.
    pub fn require(&self, name: &str) -> Result<Wrapped<'a>> {
        match self.attr(name) {
            Wrapped::Absent => Err(HashpathError::MissingField {
                field: name.to_string(),
                available_keys: describe_keys(self.entries),
            }),
            found => Ok(found),
        }
    }

    /// Entries with wrapped values
    pub fn pairs(&self) -> impl Iterator<Item = (&'a Key, Wrapped<'a>)> + 'a {
        self.entries.iter().map(|(key, value)| (key, wrap(value)))
    }
}

impl Deref for WrappedMapping<'_> {
    type Target = Mapping;

    fn deref(&self) -> &Mapping {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn symbolic(pairs: Vec<(&str, Value)>) -> Value {
        Value::from(
            pairs
                .into_iter()
                .map(|(name, value)| (Key::symbol(name), value))
                .collect::<Mapping>(),
        )
    }

    #[test]
    fn attr_reads_symbolic_and_textual_keys() {
        let sym = symbolic(vec![("foo", Value::from("FOO"))]);
        let text = Value::from(json!({"foo": "FOO"}));

        assert_eq!(wrap(&sym).attr("foo"), "FOO");
        assert_eq!(wrap(&text).attr("foo"), "FOO");
    }

    #[test]
    fn attr_prefers_symbolic_key() {
        let mut map = Mapping::new();
        map.insert(Key::symbol("name"), "symbolic");
        map.insert(Key::text("name"), "textual");
        let value = Value::from(map);

        assert_eq!(wrap(&value).attr("name"), "symbolic");
        assert_eq!(wrap(&value).attr_key(&Key::text("name")), "textual");
    }

    #[test]
    fn null_symbolic_entry_falls_back_to_text() {
        let mut map = Mapping::new();
        map.insert(Key::symbol("name"), Value::Null);
        map.insert(Key::text("name"), "textual");
        let value = Value::from(map);

        assert_eq!(wrap(&value).attr("name"), "textual");
    }

    #[test]
    fn explicit_null_is_absent() {
        let value = Value::from(json!({"gone": null}));
        assert!(wrap(&value).attr("gone").is_absent());
        assert!(wrap(&value).attr("never").is_absent());
    }

    #[test]
    fn no_case_folding() {
        let value = Value::from(json!({"Name": "x", "first-name": "y"}));
        assert!(wrap(&value).attr("name").is_absent());
        assert!(wrap(&value).attr("first_name").is_absent());
        assert_eq!(wrap(&value).attr("first-name"), "y");
    }

    #[test]
    fn native_lookup_is_untouched() {
        let value = Value::from(json!({"foo": {"bar": 1}}));
        let map = wrap(&value).mapping().unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&Key::text("foo")));
        assert!(map.get(&Key::symbol("foo")).is_none());
        assert!(map["foo"].is_mapping());
        assert!(map.attr("len").is_absent());
        assert!(map.attr("keys").is_absent());
    }

    #[test]
    fn require_lists_available_keys() {
        let value = Value::from(json!({"alpha": 1, "bravo": 2}));
        let map = wrap(&value).mapping().unwrap();

        assert_eq!(map.require("alpha").unwrap(), 1i64);
        match map.require("charlie") {
            Err(HashpathError::MissingField {
                field,
                available_keys,
            }) => {
                assert_eq!(field, "charlie");
                assert!(available_keys.contains("alpha"));
                assert!(available_keys.contains("bravo"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn pairs_wrap_values() {
        let value = Value::from(json!({"a": {"name": "A"}, "b": [{"name": "B"}]}));
        let map = wrap(&value).mapping().unwrap();
        let pairs: Vec<_> = map.pairs().collect();

        assert_eq!(pairs[0].0.as_str(), "a");
        assert_eq!(pairs[0].1.attr("name"), "A");
        assert_eq!(pairs[1].0.as_str(), "b");
        assert_eq!(pairs[1].1.first().attr("name"), "B");
    }
}
