//! Semantic webhook callback URL failures.

use thiserror::Error;

/// The input passed structural URL validation but is not a usable webhook
/// callback URL.
///
/// Distinct from [`SchemaError`](super::SchemaError): the value was a
/// well-formed absolute URL, so the failure is semantic rather than
/// structural and is reported to users in those terms.
///
/// Variants deliberately carry no part of the rejected URL: callback URLs
/// embed the webhook token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WebhookUrlError {
    /// The URL does not belong to the webhook callback URL family.
    #[error("the URL is not a Discord webhook callback URL")]
    PatternMismatch,

    /// The URL matched the callback pattern but the id or token path
    /// segment could not be captured.
    #[error("the webhook callback URL is missing its id or token path segment")]
    IncompleteCapture,
}
