// Variant values - one tag field, the rest is payload

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ValueError;
use crate::value::{Record, Value};

/// A single tagged-union value: a tag label stored under a tag key, plus
/// the payload fields specific to that label.
///
/// A `Variant` is immutable after construction; switching to a different
/// label always means building a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    tag_key: String,
    label: String,
    payload: Record,
}

impl Variant {
    /// Raw constructor. Labels are expected to be constrained by the
    /// caller (a `TaggedUnion` registry or a `tagged_union!` definition);
    /// this only guards the tag-field invariant.
    pub fn new(
        tag_key: impl Into<String>,
        label: impl Into<String>,
        payload: Record,
    ) -> Variant {
        let tag_key = tag_key.into();
        debug_assert!(
            !payload.contains_key(&tag_key),
            "payload field collides with tag key '{}'",
            tag_key
        );
        Variant {
            tag_key,
            label: label.into(),
            payload,
        }
    }

    /// Constructor for labels whose payload shape has zero fields.
    pub fn unit(tag_key: impl Into<String>, label: impl Into<String>) -> Variant {
        Variant::new(tag_key, label, Record::new())
    }

    /// The field name carrying the tag label.
    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    /// The tag label identifying which variant this value is.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True iff this value's tag label equals `label`.
    pub fn is(&self, label: &str) -> bool {
        self.label == label
    }

    pub fn payload(&self) -> &Record {
        &self.payload
    }

    pub fn into_payload(self) -> Record {
        self.payload
    }

    /// Look up a payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    /// Flatten into the plain record view: payload fields plus the tag
    /// field holding the label.
    pub fn to_value(&self) -> Value {
        let mut record = self.payload.clone();
        record.insert(self.tag_key.clone(), Value::Text(self.label.clone()));
        Value::Record(record)
    }

    /// Read a variant back out of a flat record under the given tag key.
    /// The remaining fields become the payload.
    pub fn from_value(tag_key: &str, value: &Value) -> Result<Variant, ValueError> {
        let record = match value {
            Value::Record(record) => record,
            other => {
                return Err(ValueError::NotARecord {
                    actual: format!("{:?}", other),
                })
            }
        };
        let mut payload = record.clone();
        let tag = payload.remove(tag_key).ok_or_else(|| ValueError::MissingTag {
            tag_key: tag_key.to_string(),
        })?;
        match tag {
            Value::Text(label) => Ok(Variant {
                tag_key: tag_key.to_string(),
                label,
                payload,
            }),
            other => Err(ValueError::InvalidTag {
                tag_key: tag_key.to_string(),
                actual: format!("{:?}", other),
            }),
        }
    }
}

impl Serialize for Variant {
    /// Serializes as the flat map, tag field first.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.payload.len() + 1))?;
        map.serialize_entry(&self.tag_key, &self.label)?;
        for (field, value) in &self.payload {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
