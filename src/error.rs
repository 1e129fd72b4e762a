// Error types for tagged-union operations

use std::error::Error;
use std::fmt;

/// Umbrella error across all library operations
#[derive(Debug, Clone, PartialEq)]
pub enum UnionError {
    Construct(ConstructError),
    Match(MatchError),
    Value(ValueError),
}

/// Dynamic construction errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructError {
    /// The label is not part of the union's closed label set.
    UnknownLabel { label: String, tag_key: String },
    /// The payload already carries a field named like the tag key.
    ReservedField { field: String },
}

/// Dispatch errors
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    /// Exhaustive dispatch hit a label with no handler and no default case.
    UnhandledLabel { label: String, tag_key: String },
    /// The value was built against a different tag key.
    TagKeyMismatch { expected: String, actual: String },
}

/// Errors reading a variant back out of a flat value
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Only records can carry a tag field.
    NotARecord { actual: String },
    /// The record has no field under the tag key.
    MissingTag { tag_key: String },
    /// The tag field holds something other than a text label.
    InvalidTag { tag_key: String, actual: String },
}

// Error trait implementations

impl Error for UnionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UnionError::Construct(e) => Some(e),
            UnionError::Match(e) => Some(e),
            UnionError::Value(e) => Some(e),
        }
    }
}

impl Error for ConstructError {}
impl Error for MatchError {}
impl Error for ValueError {}

// Display implementations

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnionError::Construct(e) => write!(f, "construct error: {}", e),
            UnionError::Match(e) => write!(f, "match error: {}", e),
            UnionError::Value(e) => write!(f, "value error: {}", e),
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::UnknownLabel { label, tag_key } => {
                write!(f, "unknown label '{}' for tag key '{}'", label, tag_key)
            }
            ConstructError::ReservedField { field } => {
                write!(f, "payload field '{}' collides with the tag key", field)
            }
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::UnhandledLabel { label, tag_key } => {
                write!(
                    f,
                    "unhandled tag label '{}' (tag key '{}'): no handler and no default case",
                    label, tag_key
                )
            }
            MatchError::TagKeyMismatch { expected, actual } => {
                write!(
                    f,
                    "tag key mismatch: union uses '{}', value carries '{}'",
                    expected, actual
                )
            }
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::NotARecord { actual } => {
                write!(f, "expected record, got {}", actual)
            }
            ValueError::MissingTag { tag_key } => {
                write!(f, "record has no tag field '{}'", tag_key)
            }
            ValueError::InvalidTag { tag_key, actual } => {
                write!(f, "tag field '{}' is not a text label, got {}", tag_key, actual)
            }
        }
    }
}

// Conversion implementations

impl From<ConstructError> for UnionError {
    fn from(e: ConstructError) -> Self {
        UnionError::Construct(e)
    }
}

impl From<MatchError> for UnionError {
    fn from(e: MatchError) -> Self {
        UnionError::Match(e)
    }
}

impl From<ValueError> for UnionError {
    fn from(e: ValueError) -> Self {
        UnionError::Value(e)
    }
}
