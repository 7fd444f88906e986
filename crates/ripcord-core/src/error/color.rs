//! Color coercion and byte range failures.

use thiserror::Error;

/// An integer fell outside `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte value {value} is out of range (expected 0..=255)")]
pub struct ByteRangeError {
    /// The rejected value.
    pub value: i64,
}

/// A color input matched no accepted alternative or resolved out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A string was neither a named color nor a parsable hexadecimal value.
    #[error("`{input}` is not a named color or hexadecimal string")]
    UnknownName { input: String },

    /// The resolved value does not fit in 24 bits.
    #[error("color value {value} is out of range (expected 0..=16777215)")]
    OutOfRange { value: i64 },

    /// The input was none of the accepted color shapes.
    #[error("a color must be a string, an [r, g, b] triple, or an integer")]
    UnmatchedShape,

    /// An `[r, g, b]` component failed the byte range check.
    #[error(transparent)]
    Byte(#[from] ByteRangeError),
}
