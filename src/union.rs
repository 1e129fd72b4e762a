// Tagged-union definitions and the operation bundle built from them

use std::collections::HashMap;

use crate::dispatch::Cases;
use crate::error::{ConstructError, MatchError, UnionError, ValueError};
use crate::value::{Record, Value};
use crate::variant::Variant;

/// Tag key used when a definition does not pick its own.
pub const DEFAULT_TAG_KEY: &str = "tag";

/// Compile-time definition of a tagged union: the closed label set and the
/// field name carrying the label. Payload shapes live only in the typed
/// constructors a `tagged_union!` declaration generates; they have no
/// runtime representation.
pub trait UnionDef {
    const TAG_KEY: &'static str = DEFAULT_TAG_KEY;
    const LABELS: &'static [&'static str];
}

/// Constructor for one label, registered once at definition time.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    tag_key: String,
    label: String,
}

impl Constructor {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Build a variant value from a payload.
    pub fn build(&self, payload: Record) -> Result<Variant, ConstructError> {
        if payload.contains_key(&self.tag_key) {
            return Err(ConstructError::ReservedField {
                field: self.tag_key.clone(),
            });
        }
        Ok(Variant::new(self.tag_key.clone(), self.label.clone(), payload))
    }

    /// Build a variant whose payload shape has zero fields.
    pub fn unit(&self) -> Variant {
        Variant::unit(self.tag_key.clone(), self.label.clone())
    }
}

/// The runtime operation bundle for one tagged-union definition:
/// per-label constructors, discrimination predicates, and dispatch.
///
/// The label set is closed at creation; every lookup afterwards is a
/// single hash-map probe.
#[derive(Debug, Clone)]
pub struct TaggedUnion {
    tag_key: String,
    labels: Vec<String>,
    constructors: HashMap<String, Constructor>,
}

impl TaggedUnion {
    /// Definition with the library-wide default tag key.
    pub fn new<I, S>(labels: I) -> TaggedUnion
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TaggedUnion::with_tag_key(DEFAULT_TAG_KEY, labels)
    }

    /// Definition with a caller-chosen tag key.
    pub fn with_tag_key<I, S>(tag_key: impl Into<String>, labels: I) -> TaggedUnion
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tag_key = tag_key.into();
        let mut ordered = Vec::new();
        let mut constructors = HashMap::new();
        for label in labels {
            let label = label.into();
            debug_assert!(
                !constructors.contains_key(&label),
                "duplicate label '{}'",
                label
            );
            constructors.insert(
                label.clone(),
                Constructor {
                    tag_key: tag_key.clone(),
                    label: label.clone(),
                },
            );
            ordered.push(label);
        }
        TaggedUnion {
            tag_key,
            labels: ordered,
            constructors,
        }
    }

    /// Factory entry point for a `UnionDef` definition.
    pub fn of<D: UnionDef>() -> TaggedUnion {
        TaggedUnion::with_tag_key(D::TAG_KEY, D::LABELS.iter().copied())
    }

    /// The field name carrying the tag label.
    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    /// Labels in definition order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.constructors.contains_key(label)
    }

    /// The registered constructor for a label.
    pub fn constructor(&self, label: &str) -> Option<&Constructor> {
        self.constructors.get(label)
    }

    /// Construct a variant value for `label` with the given payload.
    pub fn construct(&self, label: &str, payload: Record) -> Result<Variant, ConstructError> {
        match self.constructors.get(label) {
            Some(ctor) => ctor.build(payload),
            None => Err(ConstructError::UnknownLabel {
                label: label.to_string(),
                tag_key: self.tag_key.clone(),
            }),
        }
    }

    /// Construct a variant whose payload shape has zero fields.
    /// Equivalent to `construct(label, Record::new())`.
    pub fn construct_unit(&self, label: &str) -> Result<Variant, ConstructError> {
        self.construct(label, Record::new())
    }

    /// True iff `value` belongs to this union's tag key and carries `label`.
    pub fn is(&self, label: &str, value: &Variant) -> bool {
        value.tag_key() == self.tag_key && value.label() == label
    }

    /// Logical negation of [`is`](TaggedUnion::is).
    pub fn is_not(&self, label: &str, value: &Variant) -> bool {
        !self.is(label, value)
    }

    /// Dispatch on `value`'s tag label.
    ///
    /// Without a default case the handler map must cover the value's
    /// label; a miss is a descriptive [`MatchError::UnhandledLabel`]. With
    /// a default case (`Cases::otherwise`) any uncovered label falls
    /// through to it, and the default receives the full value.
    pub fn match_on<R>(&self, value: &Variant, cases: Cases<'_, R>) -> Result<R, MatchError> {
        if value.tag_key() != self.tag_key {
            return Err(MatchError::TagKeyMismatch {
                expected: self.tag_key.clone(),
                actual: value.tag_key().to_string(),
            });
        }
        match cases.dispatch(value) {
            Some(result) => Ok(result),
            None => Err(MatchError::UnhandledLabel {
                label: value.label().to_string(),
                tag_key: self.tag_key.clone(),
            }),
        }
    }

    /// Dispatch that tolerates misses: no handler and no default case
    /// yields `None` instead of an error. A value carrying a foreign tag
    /// key is a miss as well.
    pub fn match_partial<R>(&self, value: &Variant, cases: Cases<'_, R>) -> Option<R> {
        if value.tag_key() != self.tag_key {
            return None;
        }
        cases.dispatch(value)
    }

    /// Read a variant out of a flat record, rejecting labels outside the
    /// definition.
    pub fn from_value(&self, value: &Value) -> Result<Variant, UnionError> {
        let variant = Variant::from_value(&self.tag_key, value).map_err(UnionError::Value)?;
        if !self.contains(variant.label()) {
            return Err(UnionError::Construct(ConstructError::UnknownLabel {
                label: variant.label().to_string(),
                tag_key: self.tag_key.clone(),
            }));
        }
        Ok(variant)
    }
}
