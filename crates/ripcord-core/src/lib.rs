//! # Ripcord Core
//!
//! Core validation and resolution types for the Ripcord Discord client.
//! This crate is the client's input boundary: it normalizes heterogeneous,
//! caller-supplied identifiers and scalar values into canonical,
//! strongly-typed forms before the transport and domain layers consume
//! them.
//!
//! Every operation here is a pure, synchronous transform that either
//! produces a bounded value or fails with a typed error. Nothing performs
//! I/O, caches results, or keeps state between calls, so all entry points
//! are freely usable from concurrent call sites.
//!
//! - [`webhook`] resolves a webhook's identity from either a direct
//!   id/token pair or a full callback URL.
//! - [`coerce`] hosts the value pipelines for bytes, colors, and collector
//!   configuration.
//! - [`error`] defines the typed failures, one kind per error domain.

pub mod coerce;
pub mod error;
pub mod webhook;

pub use coerce::{
    Color, ColorResolvable, ColorTable, CollectorFilter, CollectorOptions,
    ResolvedCollectorOptions, byte,
};
pub use error::{ByteRangeError, ColorError, Error, Result, SchemaError, WebhookUrlError};
pub use webhook::{WebhookCredentials, WebhookData, WebhookId, WebhookToken};
