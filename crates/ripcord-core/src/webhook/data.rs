//! The union of accepted webhook-data shapes.

use serde_json::Value;
use url::Url;

use super::MIN_ID_LENGTH;
use crate::error::SchemaError;

/// Caller-supplied webhook data, one of two mutually exclusive shapes.
///
/// The shapes are distinguished by field presence and evaluated in
/// declaration order: a `url` field selects the URL shape, `id`/`token`
/// fields select the direct shape, and mixing fields from both is an
/// error rather than a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookData {
    /// A full callback URL encoding the id/token pair.
    Url { url: String },
    /// A direct id/token pair.
    IdToken { id: String, token: String },
}

impl WebhookData {
    /// Webhook data from a callback URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Webhook data from a direct id/token pair.
    pub fn id_token(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::IdToken {
            id: id.into(),
            token: token.into(),
        }
    }

    /// Match a loosely-typed value against the accepted shapes.
    ///
    /// The shapes are strict: every field must be recognized, hold the
    /// right type, and satisfy its bound. Failures name the offending
    /// field and constraint.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let map = value.as_object().ok_or(SchemaError::InvalidType {
            field: "data",
            expected: "object",
        })?;

        let has_url = map.contains_key("url");
        if has_url && map.contains_key("id") {
            return Err(SchemaError::AmbiguousShape {
                first: "url",
                second: "id",
            });
        }
        if has_url && map.contains_key("token") {
            return Err(SchemaError::AmbiguousShape {
                first: "url",
                second: "token",
            });
        }

        if has_url {
            if let Some(key) = map.keys().find(|key| *key != "url") {
                return Err(SchemaError::UnknownField { field: key.clone() });
            }
            let url = map["url"].as_str().ok_or(SchemaError::InvalidType {
                field: "url",
                expected: "string",
            })?;
            Url::parse(url).map_err(|_| SchemaError::InvalidUrl { field: "url" })?;
            return Ok(Self::Url {
                url: url.to_owned(),
            });
        }

        if map.contains_key("id") || map.contains_key("token") {
            if let Some(key) = map.keys().find(|key| *key != "id" && *key != "token") {
                return Err(SchemaError::UnknownField { field: key.clone() });
            }
            let id = map
                .get("id")
                .ok_or(SchemaError::MissingField { field: "id" })?
                .as_str()
                .ok_or(SchemaError::InvalidType {
                    field: "id",
                    expected: "string",
                })?;
            let token = map
                .get("token")
                .ok_or(SchemaError::MissingField { field: "token" })?
                .as_str()
                .ok_or(SchemaError::InvalidType {
                    field: "token",
                    expected: "string",
                })?;
            if id.len() < MIN_ID_LENGTH {
                return Err(SchemaError::TooShort {
                    field: "id",
                    len: id.len(),
                    min: MIN_ID_LENGTH,
                });
            }
            if token.is_empty() {
                return Err(SchemaError::Empty { field: "token" });
            }
            return Ok(Self::IdToken {
                id: id.to_owned(),
                token: token.to_owned(),
            });
        }

        Err(SchemaError::UnmatchedShape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_shape_matches() {
        let data = WebhookData::from_value(&json!({
            "url": "https://discord.com/api/webhooks/81440962496172032/tok"
        }))
        .unwrap();
        assert!(matches!(data, WebhookData::Url { .. }));
    }

    #[test]
    fn id_token_shape_matches() {
        let data = WebhookData::from_value(&json!({
            "id": "81440962496172032",
            "token": "tok"
        }))
        .unwrap();
        assert_eq!(data, WebhookData::id_token("81440962496172032", "tok"));
    }

    #[test]
    fn both_shapes_at_once_are_ambiguous() {
        let err = WebhookData::from_value(&json!({
            "url": "https://discord.com/api/webhooks/81440962496172032/tok",
            "id": "81440962496172032"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::AmbiguousShape {
                first: "url",
                second: "id"
            }
        );
    }

    #[test]
    fn no_recognized_fields_is_unmatched() {
        assert_eq!(
            WebhookData::from_value(&json!({})),
            Err(SchemaError::UnmatchedShape)
        );
        assert_eq!(
            WebhookData::from_value(&json!({ "name": "captain-hook" })),
            Err(SchemaError::UnmatchedShape)
        );
    }

    #[test]
    fn extraneous_field_is_rejected() {
        let err = WebhookData::from_value(&json!({
            "id": "81440962496172032",
            "token": "tok",
            "avatar": "https://example.com/a.png"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                field: "avatar".into()
            }
        );
    }

    #[test]
    fn missing_token_is_named() {
        let err = WebhookData::from_value(&json!({ "id": "81440962496172032" })).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "token" });
    }

    #[test]
    fn wrong_types_are_named() {
        let err = WebhookData::from_value(&json!({ "url": 42 })).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidType {
                field: "url",
                expected: "string"
            }
        );

        let err = WebhookData::from_value(&json!({
            "id": 81440962496172032u64,
            "token": "tok"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidType {
                field: "id",
                expected: "string"
            }
        );
    }

    #[test]
    fn relative_url_fails_structurally() {
        let err = WebhookData::from_value(&json!({ "url": "/api/webhooks/1/2" })).unwrap_err();
        assert_eq!(err, SchemaError::InvalidUrl { field: "url" });
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(WebhookData::from_value(&json!("just a string")).is_err());
        assert!(WebhookData::from_value(&json!(null)).is_err());
        assert!(WebhookData::from_value(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn bounds_apply_at_the_shape_boundary() {
        let err = WebhookData::from_value(&json!({ "id": "123", "token": "tok" })).unwrap_err();
        assert!(matches!(err, SchemaError::TooShort { field: "id", .. }));

        let err = WebhookData::from_value(&json!({
            "id": "81440962496172032",
            "token": ""
        }))
        .unwrap_err();
        assert_eq!(err, SchemaError::Empty { field: "token" });
    }
}
