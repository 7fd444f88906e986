//! Error types for validation and resolution failures.
//!
//! Every failure in this layer is synchronous and locally raised: an invalid
//! input aborts the current call and propagates to the caller who supplied
//! it. Nothing here is retried, recovered, or downgraded, and no partially
//! resolved value is ever returned alongside an error.
//!
//! The error types are organized into focused submodules:
//! - `schema`: structural shape and field-bound violations
//! - `webhook`: semantic webhook callback URL failures
//! - `color`: color coercion and byte range failures
//! - `conversions`: the crate-level umbrella error

mod color;
mod conversions;
mod schema;
mod webhook;

pub use color::{ByteRangeError, ColorError};
pub use conversions::{Error, Result};
pub use schema::SchemaError;
pub use webhook::WebhookUrlError;
