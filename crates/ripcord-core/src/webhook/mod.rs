//! Webhook identity resolution.
//!
//! A webhook is addressed by an id/token pair. Callers may hold the pair
//! directly or a full callback URL that encodes it; [`WebhookCredentials`]
//! normalizes either form into one canonical, validated identity at client
//! construction time.
//!
//! Resolution is a pure function of its input: no network call is made and
//! nothing is cached. Whether the pair actually exists on Discord is the
//! transport layer's problem; this module only guarantees syntactic
//! well-formedness.

mod callback;
mod data;

pub use callback::API_DOMAIN;
pub use data::WebhookData;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, SchemaError};

/// Minimum length of a webhook id.
///
/// Snowflakes are 64-bit timestamps-plus-counters; every id Discord has
/// ever issued is at least 17 decimal digits when written out.
pub const MIN_ID_LENGTH: usize = 17;

/// Validated webhook id: a snowflake carried as an opaque string.
///
/// Only the length bound is enforced. The value is used verbatim in
/// request paths, so no further normalization is applied.
///
/// # Examples
///
/// ```
/// use ripcord_core::webhook::WebhookId;
///
/// let id = WebhookId::parse("12345678901234567").unwrap();
/// assert_eq!(id.as_str(), "12345678901234567");
///
/// assert!(WebhookId::parse("too-short").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebhookId(String);

impl WebhookId {
    /// Parse and validate a webhook id from a string.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, SchemaError> {
        let id = id.as_ref();
        if id.len() < MIN_ID_LENGTH {
            return Err(SchemaError::TooShort {
                field: "id",
                len: id.len(),
                min: MIN_ID_LENGTH,
            });
        }
        Ok(Self(id.to_string()))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids extracted from a matched callback URL are taken verbatim; the
    /// grammar guarantees a non-empty segment but not the length bound.
    pub(crate) fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for WebhookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WebhookId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<WebhookId> for String {
    fn from(id: WebhookId) -> Self {
        id.0
    }
}

impl TryFrom<String> for WebhookId {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Validated webhook token: a non-empty opaque secret.
///
/// The token authenticates every webhook request, so it is kept out of
/// `Debug` output and has no `Display` impl; call [`expose`](Self::expose)
/// where the raw value is genuinely needed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebhookToken(String);

impl WebhookToken {
    /// Parse and validate a webhook token from a string.
    pub fn parse(token: impl AsRef<str>) -> Result<Self, SchemaError> {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(SchemaError::Empty { field: "token" });
        }
        Ok(Self(token.to_string()))
    }

    /// Get the raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub(crate) fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for WebhookToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookToken(<redacted>)")
    }
}

impl From<WebhookToken> for String {
    fn from(token: WebhookToken) -> Self {
        token.0
    }
}

impl TryFrom<String> for WebhookToken {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// The canonical id/token identity of a webhook.
///
/// Constructed once from caller-supplied [`WebhookData`] and immutable
/// afterwards, except that the owning client may swap the token wholesale
/// after a token rotation. The two fields are never independently mutated
/// and never partially populated.
///
/// # Examples
///
/// ```
/// use ripcord_core::webhook::{WebhookCredentials, WebhookData};
///
/// let data = WebhookData::url("https://discord.com/api/webhooks/12345678901234567/abc-token");
/// let creds = WebhookCredentials::resolve(data).unwrap();
/// assert_eq!(creds.id().as_str(), "12345678901234567");
/// assert_eq!(creds.token().expose(), "abc-token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookCredentials {
    id: WebhookId,
    token: WebhookToken,
}

impl WebhookCredentials {
    /// Assemble credentials from already-validated parts.
    pub fn new(id: WebhookId, token: WebhookToken) -> Self {
        Self { id, token }
    }

    /// Resolve a webhook identity from either accepted input shape.
    ///
    /// A URL shape must first be a well-formed absolute URL
    /// ([`SchemaError::InvalidUrl`]) and then match the callback URL
    /// grammar ([`WebhookUrlError`](crate::error::WebhookUrlError)); the id
    /// and token are the two captured path segments, used verbatim. An
    /// id/token shape is bound-checked and taken as-is, so resolving an
    /// already-resolved pair returns the identical pair.
    pub fn resolve(data: WebhookData) -> Result<Self, Error> {
        match data {
            WebhookData::Url { url } => {
                Url::parse(&url).map_err(|_| SchemaError::InvalidUrl { field: "url" })?;
                let (id, token) = match callback::extract(&url) {
                    Ok(parts) => parts,
                    Err(err) => {
                        tracing::debug!(%err, "rejected webhook callback URL");
                        return Err(err.into());
                    }
                };
                tracing::trace!(webhook_id = %id, "resolved webhook credentials from callback URL");
                Ok(Self {
                    id: WebhookId::new_unchecked(id),
                    token: WebhookToken::new_unchecked(token),
                })
            }
            WebhookData::IdToken { id, token } => {
                let id = WebhookId::parse(id)?;
                let token = WebhookToken::parse(token)?;
                tracing::trace!(webhook_id = %id, "resolved webhook credentials from id/token pair");
                Ok(Self { id, token })
            }
        }
    }

    /// Resolve directly from a loosely-typed value.
    ///
    /// Shorthand for [`WebhookData::from_value`] followed by
    /// [`resolve`](Self::resolve).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, Error> {
        let data = WebhookData::from_value(value)?;
        Self::resolve(data)
    }

    /// The webhook's id.
    pub fn id(&self) -> &WebhookId {
        &self.id
    }

    /// The webhook's token.
    pub fn token(&self) -> &WebhookToken {
        &self.token
    }

    /// Swap the token wholesale, keeping the id.
    pub fn replace_token(&mut self, token: WebhookToken) {
        self.token = token;
    }

    /// Reconstruct the canonical callback URL for this identity.
    pub fn url(&self) -> String {
        callback::canonical(self.id.as_str(), self.token.expose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "81440962496172032";
    const TOKEN: &str = "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11";

    #[test]
    fn id_token_pair_round_trips_unchanged() {
        let data = WebhookData::id_token(ID, TOKEN);
        let creds = WebhookCredentials::resolve(data).unwrap();
        assert_eq!(creds.id().as_str(), ID);
        assert_eq!(creds.token().expose(), TOKEN);
    }

    #[test]
    fn resolution_is_idempotent() {
        let first =
            WebhookCredentials::resolve(WebhookData::id_token(ID, TOKEN)).unwrap();
        let again = WebhookCredentials::resolve(WebhookData::id_token(
            first.id().as_str(),
            first.token().expose(),
        ))
        .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn short_id_is_rejected() {
        let err = WebhookCredentials::resolve(WebhookData::id_token("1234567890", TOKEN))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Schema(SchemaError::TooShort {
                field: "id",
                len: 10,
                min: MIN_ID_LENGTH,
            })
        );
    }

    #[test]
    fn empty_token_is_rejected() {
        let err =
            WebhookCredentials::resolve(WebhookData::id_token(ID, "")).unwrap_err();
        assert_eq!(err, Error::Schema(SchemaError::Empty { field: "token" }));
    }

    #[test]
    fn url_shape_extracts_path_segments() {
        let url = format!("https://discord.com/api/webhooks/{ID}/{TOKEN}");
        let creds = WebhookCredentials::resolve(WebhookData::url(url)).unwrap();
        assert_eq!(creds.id().as_str(), ID);
        assert_eq!(creds.token().expose(), TOKEN);
    }

    #[test]
    fn url_segments_are_taken_verbatim() {
        // Segments are not re-checked against the direct-shape bounds.
        let creds = WebhookCredentials::resolve(WebhookData::url(
            "https://discord.com/api/webhooks/short/tok",
        ))
        .unwrap();
        assert_eq!(creds.id().as_str(), "short");
        assert_eq!(creds.token().expose(), "tok");
    }

    #[test]
    fn non_url_string_is_a_schema_error() {
        let err = WebhookCredentials::resolve(WebhookData::url("not a url")).unwrap_err();
        assert_eq!(err, Error::Schema(SchemaError::InvalidUrl { field: "url" }));
    }

    #[test]
    fn wrong_host_is_a_webhook_url_error() {
        let err = WebhookCredentials::resolve(WebhookData::url(
            "https://example.com/api/webhooks/12345678901234567/token",
        ))
        .unwrap_err();
        assert!(matches!(err, Error::WebhookUrl(_)));
    }

    #[test]
    fn replace_token_keeps_id() {
        let mut creds =
            WebhookCredentials::resolve(WebhookData::id_token(ID, TOKEN)).unwrap();
        creds.replace_token(WebhookToken::parse("rotated-token").unwrap());
        assert_eq!(creds.id().as_str(), ID);
        assert_eq!(creds.token().expose(), "rotated-token");
    }

    #[test]
    fn canonical_url_round_trips() {
        let creds =
            WebhookCredentials::resolve(WebhookData::id_token(ID, TOKEN)).unwrap();
        let again = WebhookCredentials::resolve(WebhookData::url(creds.url())).unwrap();
        assert_eq!(creds, again);
    }

    #[test]
    fn token_debug_is_redacted() {
        let creds =
            WebhookCredentials::resolve(WebhookData::id_token(ID, TOKEN)).unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains(TOKEN));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn id_serde_round_trip() {
        let id = WebhookId::parse(ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ID}\""));
        let back: WebhookId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn id_serde_rejects_short_strings() {
        let result: Result<WebhookId, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
