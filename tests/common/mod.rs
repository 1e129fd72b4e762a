// Test utilities and generators for tagged-union property-based testing

#![allow(dead_code)]

use proptest::prelude::*;
use tagged_union::{Record, TaggedUnion, Value};

/// Generate a tag label.
pub fn arb_label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,11}"
}

/// Generate a closed, duplicate-free label set in definition order.
pub fn arb_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(arb_label(), 1..6)
        .prop_map(|set| set.into_iter().collect())
}

/// Generate a tag key. Keys start with 'k' so they can never collide with
/// generated payload field names (which start with 'f').
pub fn arb_tag_key() -> impl Strategy<Value = String> {
    "k[a-z0-9_]{0,8}"
}

/// Generate a payload field name.
pub fn arb_field_name() -> impl Strategy<Value = String> {
    "f[a-z0-9_]{0,8}"
}

/// Generate a payload value with limited recursion depth.
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Unit),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Double),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Text),
    ];

    leaf.prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map(arb_field_name(), inner, 0..5)
                .prop_map(Value::Record),
        ]
    })
}

/// Generate a payload record.
pub fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::btree_map(arb_field_name(), arb_value(), 0..5)
}

/// Generate a non-empty payload record.
pub fn arb_nonempty_record() -> impl Strategy<Value = Record> {
    prop::collection::btree_map(arb_field_name(), arb_value(), 1..5)
}

/// Generate a whole definition: tag key plus label set.
pub fn arb_union() -> impl Strategy<Value = TaggedUnion> {
    (arb_tag_key(), arb_labels())
        .prop_map(|(tag_key, labels)| TaggedUnion::with_tag_key(tag_key, labels))
}
