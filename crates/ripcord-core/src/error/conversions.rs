//! The crate-level umbrella error and `From` conversions.
//!
//! Resolution entry points can fail in more than one error domain (a
//! webhook URL is first checked structurally, then semantically), so they
//! return [`Error`]; the domain types convert into it with `?`.

use thiserror::Error;

use super::color::{ByteRangeError, ColorError};
use super::schema::SchemaError;
use super::webhook::WebhookUrlError;

/// Any validation or resolution failure raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Structural shape or field-bound violation.
    #[error("schema validation failed: {0}")]
    Schema(#[from] SchemaError),

    /// Semantic webhook callback URL failure.
    #[error("webhook URL invalid: {0}")]
    WebhookUrl(#[from] WebhookUrlError),

    /// Color coercion failure.
    #[error("color resolution failed: {0}")]
    Color(#[from] ColorError),

    /// Byte range failure.
    #[error("byte range check failed: {0}")]
    ByteRange(#[from] ByteRangeError),
}

/// Result alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
