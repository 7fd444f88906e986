//! The webhook callback URL grammar.
//!
//! Callback URLs look like
//! `https://discord.com/api/webhooks/81440962496172032/<token>`, optionally
//! behind a release-channel subdomain (`canary.`, `ptb.`) and an API
//! version segment (`/v10`). The id and token are the two path segments
//! following `api/webhooks`, each ending at the next `/` or the end of the
//! string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::WebhookUrlError;

/// Host of the Discord API.
pub const API_DOMAIN: &str = "discord.com";

static CALLBACK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:canary|ptb)\.)?discord\.com/api/webhooks(?:/v\d+)?/(?P<id>[^/]+)/(?P<token>[^/]+)",
    )
    .expect("callback URL pattern compiles")
});

/// Extract the `(id, token)` path segments from a callback URL.
///
/// Both named groups are looked up rather than assumed from the pattern;
/// a match that somehow yields fewer than two segments is reported as
/// [`WebhookUrlError::IncompleteCapture`].
pub(crate) fn extract(url: &str) -> Result<(String, String), WebhookUrlError> {
    let caps = CALLBACK_PATTERN
        .captures(url)
        .ok_or(WebhookUrlError::PatternMismatch)?;
    let id = caps.name("id").ok_or(WebhookUrlError::IncompleteCapture)?;
    let token = caps
        .name("token")
        .ok_or(WebhookUrlError::IncompleteCapture)?;
    Ok((id.as_str().to_owned(), token.as_str().to_owned()))
}

/// Build the canonical callback URL for an id/token pair.
pub(crate) fn canonical(id: &str, token: &str) -> String {
    format!("https://{API_DOMAIN}/api/webhooks/{id}/{token}")
}
