// Error handling tests for tagged-union

mod common;

use std::error::Error;

use common::*;
use proptest::prelude::*;
use tagged_union::{
    Cases, ConstructError, MatchError, TaggedUnion, UnionError, Value, ValueError, Variant,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Unknown-label errors name both the label and the tag key
    #[test]
    fn test_unknown_label_error_is_descriptive(
        union in arb_union(),
        outsider in arb_label()
    ) {
        prop_assume!(!union.contains(&outsider));
        let err = union.construct_unit(&outsider).unwrap_err();
        let message = err.to_string();
        prop_assert!(message.contains(&outsider));
        prop_assert!(message.contains(union.tag_key()));
    }

    /// Unhandled-label errors name the label that had no handler
    #[test]
    fn test_unhandled_label_error_is_descriptive(
        union in arb_union(),
        payload in arb_record()
    ) {
        for label in union.labels() {
            let value = union.construct(label, payload.clone()).unwrap();
            let err = union
                .match_on::<()>(&value, Cases::new())
                .unwrap_err();
            prop_assert_eq!(
                &err,
                &MatchError::UnhandledLabel {
                    label: label.clone(),
                    tag_key: union.tag_key().to_string(),
                }
            );
            prop_assert!(err.to_string().contains(label));
        }
    }

    /// Reading a tagless record reports the missing tag key
    #[test]
    fn test_missing_tag_error(
        tag_key in arb_tag_key(),
        payload in arb_record()
    ) {
        let flat = Value::Record(payload);
        let err = Variant::from_value(&tag_key, &flat).unwrap_err();
        prop_assert_eq!(err, ValueError::MissingTag { tag_key: tag_key.clone() });
    }
}

fn shape() -> TaggedUnion {
    TaggedUnion::new(["circle", "rect"])
}

#[test]
fn test_error_display_messages() {
    let unknown = ConstructError::UnknownLabel {
        label: "triangle".into(),
        tag_key: "tag".into(),
    };
    assert_eq!(unknown.to_string(), "unknown label 'triangle' for tag key 'tag'");

    let reserved = ConstructError::ReservedField { field: "tag".into() };
    assert_eq!(reserved.to_string(), "payload field 'tag' collides with the tag key");

    let unhandled = MatchError::UnhandledLabel {
        label: "rect".into(),
        tag_key: "tag".into(),
    };
    assert_eq!(
        unhandled.to_string(),
        "unhandled tag label 'rect' (tag key 'tag'): no handler and no default case"
    );

    let mismatch = MatchError::TagKeyMismatch {
        expected: "status".into(),
        actual: "tag".into(),
    };
    assert_eq!(
        mismatch.to_string(),
        "tag key mismatch: union uses 'status', value carries 'tag'"
    );

    let missing = ValueError::MissingTag { tag_key: "tag".into() };
    assert_eq!(missing.to_string(), "record has no tag field 'tag'");
}

#[test]
fn test_umbrella_error_wraps_and_sources() {
    let inner = ConstructError::UnknownLabel {
        label: "triangle".into(),
        tag_key: "tag".into(),
    };
    let umbrella = UnionError::from(inner.clone());

    assert_eq!(umbrella, UnionError::Construct(inner.clone()));
    assert!(umbrella.to_string().starts_with("construct error: "));
    assert_eq!(
        umbrella.source().map(|s| s.to_string()),
        Some(inner.to_string())
    );
}

#[test]
fn test_from_value_error_taxonomy() {
    assert!(matches!(
        Variant::from_value("tag", &Value::Int(7)),
        Err(ValueError::NotARecord { .. })
    ));

    let mut record = tagged_union::Record::new();
    record.insert("tag".into(), Value::Bool(true));
    assert!(matches!(
        Variant::from_value("tag", &Value::Record(record)),
        Err(ValueError::InvalidTag { .. })
    ));

    // Membership failures surface through the umbrella error.
    let foreign = Variant::unit("tag", "triangle");
    let err = shape().from_value(&foreign.to_value()).unwrap_err();
    assert!(matches!(
        err,
        UnionError::Construct(ConstructError::UnknownLabel { .. })
    ));
}

#[test]
fn test_partial_dispatch_miss_is_not_an_error() {
    let shape = shape();
    let rect = shape.construct_unit("rect").unwrap();
    let missed: Option<()> = shape.match_partial(&rect, Cases::new().on("circle", |_| ()));
    assert_eq!(missed, None);
}
