//! Value coercion pipelines.
//!
//! Each pipeline is an ordered union of alternative interpretations: the
//! first alternative whose precondition holds wins, and order is part of
//! the contract (a numeric-looking string is still a string). Every
//! pipeline takes a loosely-typed input and produces a bounded,
//! strongly-typed output or a typed failure; none of them performs I/O or
//! keeps state between calls.

mod byte;
mod collector;
mod color;

pub use byte::byte;
pub use collector::{CollectorFilter, CollectorOptions, ResolvedCollectorOptions};
pub use color::{Color, ColorResolvable, ColorTable};
