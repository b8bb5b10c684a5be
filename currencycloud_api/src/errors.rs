//! Error types for the API client.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request was malformed or failed validation (HTTP 400).
    #[error("bad request: {0}")]
    BadRequest(ApiError),
    /// Login failed or the session token was rejected (HTTP 401).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(ApiError),
    /// The authenticated contact may not perform this operation (HTTP 403).
    #[error("forbidden: {0}")]
    Forbidden(ApiError),
    /// No resource exists at the requested path (HTTP 404).
    #[error("not found: {0}")]
    NotFound(ApiError),
    /// Rate limited by the API (HTTP 429).
    #[error("too many requests: {0}")]
    TooManyRequests(ApiError),
    /// The vendor reported a server-side failure (HTTP 5xx).
    #[error("internal application error (HTTP {status}): {detail}")]
    InternalApplicationError { status: u16, detail: ApiError },
    /// A status code outside the documented taxonomy, with a body snippet.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },
    /// An HTTP request failed before a response arrived (network error,
    /// timeout, TLS failure).
    #[error("network error")]
    Network(#[from] reqwest::Error),
    /// The base URL, or a path joined to it, is not a valid URL.
    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    /// A 2xx response body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl Error {
    /// Maps a non-success status and its body to the matching variant.
    ///
    /// Error bodies are expected to carry the vendor's `error_code` /
    /// `error_messages` payload; anything else degrades to an [`ApiError`]
    /// with no code so the HTTP status is still reported.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let detail = ApiError::from_body(body);
        match status {
            400 => Error::BadRequest(detail),
            401 => Error::AuthenticationFailed(detail),
            403 => Error::Forbidden(detail),
            404 => Error::NotFound(detail),
            429 => Error::TooManyRequests(detail),
            500..=599 => Error::InternalApplicationError { status, detail },
            _ => Error::UnexpectedStatus {
                status,
                body: truncate_body(body),
            },
        }
    }
}

/// The vendor's JSON error payload.
///
/// Every documented failure carries a machine-readable `error_code` plus a
/// map of offending parameter names to one or more messages.
#[derive(Deserialize, Debug, Default)]
pub struct ApiError {
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_messages: BTreeMap<String, Vec<ApiErrorMessage>>,
}

/// A single validation message attached to one request parameter.
#[derive(Deserialize, Debug)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl ApiError {
    fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Flattens all per-field messages into one list, in field order.
    pub fn messages(&self) -> impl Iterator<Item = &ApiErrorMessage> {
        self.error_messages.values().flatten()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "{}", code)?,
            None => write!(f, "unknown error")?,
        }
        if let Some(msg) = self.messages().next() {
            write!(f, " ({})", msg.message)?;
        }
        Ok(())
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_FAILED: &str = r#"{
        "error_code": "auth_invalid_user_login_details",
        "error_messages": {
            "username": [
                {
                    "code": "invalid_supplied_credentials",
                    "message": "Authentication failed with the supplied credentials",
                    "params": {}
                }
            ]
        }
    }"#;

    #[test]
    fn maps_documented_statuses() {
        assert!(matches!(Error::from_status(400, "{}"), Error::BadRequest(_)));
        assert!(matches!(
            Error::from_status(401, AUTH_FAILED),
            Error::AuthenticationFailed(_)
        ));
        assert!(matches!(Error::from_status(403, "{}"), Error::Forbidden(_)));
        assert!(matches!(Error::from_status(404, "{}"), Error::NotFound(_)));
        assert!(matches!(
            Error::from_status(429, "{}"),
            Error::TooManyRequests(_)
        ));
        assert!(matches!(
            Error::from_status(503, "{}"),
            Error::InternalApplicationError { status: 503, .. }
        ));
        assert!(matches!(
            Error::from_status(302, "redirect"),
            Error::UnexpectedStatus { status: 302, .. }
        ));
    }

    #[test]
    fn parses_vendor_error_payload() {
        let err = Error::from_status(401, AUTH_FAILED);
        let Error::AuthenticationFailed(detail) = err else {
            panic!("expected AuthenticationFailed");
        };
        assert_eq!(
            detail.error_code.as_deref(),
            Some("auth_invalid_user_login_details")
        );
        let msg = detail.messages().next().unwrap();
        assert_eq!(msg.code, "invalid_supplied_credentials");
        assert!(msg.message.contains("supplied credentials"));
    }

    #[test]
    fn unparseable_body_keeps_status() {
        let err = Error::from_status(400, "<html>gateway</html>");
        let Error::BadRequest(detail) = err else {
            panic!("expected BadRequest");
        };
        assert!(detail.error_code.is_none());
        assert_eq!(detail.messages().count(), 0);
    }

    #[test]
    fn display_includes_code_and_first_message() {
        let err = Error::from_status(401, AUTH_FAILED);
        let rendered = err.to_string();
        assert!(rendered.contains("auth_invalid_user_login_details"));
        assert!(rendered.contains("supplied credentials"));
    }
}
