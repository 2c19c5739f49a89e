//! Proptest strategies for structured values

use hashpath::{Key, Mapping, Value};
use proptest::prelude::*;

/// Short identifier-like field names
pub fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// A key of either form
pub fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        field_name().prop_map(Key::Text),
        field_name().prop_map(Key::Symbol),
    ]
}

/// Non-null scalars
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

/// Arbitrary nested values (null included)
pub fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![Just(Value::Null), scalar()];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec((key(), inner), 0..6)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect())),
        ]
    })
}

/// Mappings with symbolic or textual keys and arbitrary values
pub fn mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::vec((key(), value()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Sequences of arbitrary values
pub fn sequence() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(value(), 0..10)
}
