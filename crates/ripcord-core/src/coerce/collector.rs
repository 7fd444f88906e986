//! Collector option validation.
//!
//! Collectors gather gateway events until a timeout or inactivity window
//! elapses; which events they keep is decided by a caller-supplied
//! predicate. This module only validates and defaults that configuration.
//! The collector machinery itself lives elsewhere.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::SchemaError;

/// Predicate deciding whether a collector keeps an event.
pub type CollectorFilter = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Raw, caller-supplied collector configuration.
///
/// The shape is strict: `filter`, `time`, and `idle` are the only accepted
/// fields, and `time`/`idle` are non-negative millisecond counts. All
/// fields are optional; [`resolve`](Self::resolve) fills in the defaults.
#[derive(Clone, Default)]
pub struct CollectorOptions {
    /// Event predicate; defaults to keeping everything.
    pub filter: Option<CollectorFilter>,
    /// Overall timeout in milliseconds.
    pub time: Option<i64>,
    /// Inactivity timeout in milliseconds.
    pub idle: Option<i64>,
}

impl CollectorOptions {
    /// Match a loosely-typed value against the accepted shape.
    ///
    /// Predicates are not representable in data, so a `filter` key is
    /// rejected here; filters only arrive through the typed field.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let map = value.as_object().ok_or(SchemaError::InvalidType {
            field: "options",
            expected: "object",
        })?;

        let mut options = Self::default();
        for (key, field) in map {
            match key.as_str() {
                "filter" => {
                    return Err(SchemaError::InvalidType {
                        field: "filter",
                        expected: "predicate function",
                    });
                }
                "time" => options.time = Some(duration_ms("time", field)?),
                "idle" => options.idle = Some(duration_ms("idle", field)?),
                _ => return Err(SchemaError::UnknownField { field: key.clone() }),
            }
        }
        Ok(options)
    }

    /// Validate bounds and fill in defaults.
    ///
    /// The fallback filter is built here, at resolution time, so no two
    /// resolutions ever share one.
    pub fn resolve(self) -> Result<ResolvedCollectorOptions, SchemaError> {
        let time = bounded_duration("time", self.time)?;
        let idle = bounded_duration("idle", self.idle)?;
        let filter = self.filter.unwrap_or_else(|| Arc::new(|_| true));
        Ok(ResolvedCollectorOptions { filter, time, idle })
    }
}

impl fmt::Debug for CollectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorOptions")
            .field("filter", &self.filter.as_ref().map(|_| "<predicate>"))
            .field("time", &self.time)
            .field("idle", &self.idle)
            .finish()
    }
}

/// Collector configuration after validation and defaulting.
#[derive(Clone)]
pub struct ResolvedCollectorOptions {
    /// Event predicate, always present.
    pub filter: CollectorFilter,
    /// Overall timeout.
    pub time: Option<Duration>,
    /// Inactivity timeout.
    pub idle: Option<Duration>,
}

impl fmt::Debug for ResolvedCollectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCollectorOptions")
            .field("filter", &"<predicate>")
            .field("time", &self.time)
            .field("idle", &self.idle)
            .finish()
    }
}

fn duration_ms(field: &'static str, value: &Value) -> Result<i64, SchemaError> {
    let ms = value.as_i64().ok_or(SchemaError::InvalidType {
        field,
        expected: "integer",
    })?;
    if ms < 0 {
        return Err(SchemaError::Negative { field, value: ms });
    }
    Ok(ms)
}

fn bounded_duration(
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<Duration>, SchemaError> {
    value
        .map(|ms| match u64::try_from(ms) {
            Ok(ms) => Ok(Duration::from_millis(ms)),
            Err(_) => Err(SchemaError::Negative { field, value: ms }),
        })
        .transpose()
}
