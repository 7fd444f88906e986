//! Structural shape and field-bound violations.

use thiserror::Error;

/// Input does not conform to an accepted shape or violates a field bound.
///
/// Each variant names the offending field and the constraint it violated so
/// callers can report the failure without re-inspecting their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required field of the matched shape is absent.
    #[error("field `{field}` is required but missing")]
    MissingField { field: &'static str },

    /// A field was supplied that no accepted shape recognizes.
    #[error("field `{field}` is not recognized")]
    UnknownField { field: String },

    /// A field is present but holds a value of the wrong type.
    #[error("field `{field}` has the wrong type (expected {expected})")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// The input carries fields from more than one mutually exclusive shape.
    #[error("fields `{first}` and `{second}` belong to mutually exclusive shapes")]
    AmbiguousShape {
        first: &'static str,
        second: &'static str,
    },

    /// No accepted shape matched the input at all.
    #[error("expected an object with either a `url` field or `id` and `token` fields")]
    UnmatchedShape,

    /// A string field is shorter than its minimum length.
    #[error("field `{field}` must be at least {min} characters (got {len})")]
    TooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },

    /// A string field must not be empty.
    #[error("field `{field}` must not be empty")]
    Empty { field: &'static str },

    /// A field expected to hold an absolute URL failed to parse as one.
    #[error("field `{field}` is not a valid absolute URL")]
    InvalidUrl { field: &'static str },

    /// An integer field must be non-negative.
    #[error("field `{field}` must be non-negative (got {value})")]
    Negative { field: &'static str, value: i64 },
}
