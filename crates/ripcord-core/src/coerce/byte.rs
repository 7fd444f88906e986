//! Byte range predicate.

use crate::error::ByteRangeError;

/// Narrow an integer to a `u8`, failing outside `0..=255`.
pub fn byte(value: i64) -> Result<u8, ByteRangeError> {
    u8::try_from(value).map_err(|_| ByteRangeError { value })
}
