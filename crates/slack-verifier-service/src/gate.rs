//! Slack request verification middleware.
//!
//! [`verify_slack_request`] sits in front of a handler and lets a request
//! through only if it carries a fresh, correctly signed
//! `X-Slack-Request-Timestamp` / `X-Slack-Signature` pair:
//!
//! | Condition                                   | Status |
//! |---------------------------------------------|--------|
//! | method other than the configured one        | 405    |
//! | timestamp or signature header missing/empty | 400    |
//! | body could not be read                      | 400    |
//! | stale/unparsable timestamp, bad signature   | 401    |
//! | verified                                    | handler's own response |
//!
//! The body is buffered once, verified, and handed to the handler as a fresh
//! body holding the same bytes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;

use slack_verifier_core::RequestVerifier;

use crate::error::ApiError;

/// Header carrying the request timestamp (Unix seconds).
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Header carrying the `v0=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Default cap on buffered body size.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Gate configuration shared by every request passing through it.
#[derive(Debug, Clone)]
pub struct SlackGate {
    verifier: Arc<RequestVerifier>,
    method: Method,
    max_body_bytes: usize,
}

impl SlackGate {
    /// Create a gate accepting `POST` bodies up to [`DEFAULT_MAX_BODY_BYTES`].
    #[must_use]
    pub fn new(verifier: RequestVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
            method: Method::POST,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Accept a different HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Cap the number of body bytes buffered for verification.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// The verifier requests are checked against.
    #[must_use]
    pub fn verifier(&self) -> &RequestVerifier {
        &self.verifier
    }

    /// The accepted HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Put `gate` in front of every route already added to `router`.
///
/// Must be called after the routes are added.
pub fn protect<S>(router: Router<S>, gate: SlackGate) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(gate, verify_slack_request))
}

/// Non-empty, visible-ASCII header value.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Axum middleware verifying Slack request signatures.
pub async fn verify_slack_request(
    State(gate): State<SlackGate>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if *request.method() != gate.method {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected Slack request: method not allowed"
        );
        return Err(ApiError::MethodNotAllowed);
    }

    let (parts, body) = request.into_parts();

    let (Some(timestamp), Some(signature)) = (
        header_value(&parts.headers, TIMESTAMP_HEADER),
        header_value(&parts.headers, SIGNATURE_HEADER),
    ) else {
        tracing::warn!(
            path = %parts.uri.path(),
            has_timestamp = parts.headers.contains_key(TIMESTAMP_HEADER),
            has_signature = parts.headers.contains_key(SIGNATURE_HEADER),
            "Rejected Slack request: missing signature headers"
        );
        return Err(ApiError::BadRequest(
            "Missing Slack timestamp or signature header".into(),
        ));
    };

    let body = axum::body::to_bytes(body, gate.max_body_bytes)
        .await
        .map_err(|e| {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
            ApiError::BadRequest("Failed to read request body".into())
        })?;

    gate.verifier
        .verify(timestamp, signature, body.clone())
        .map_err(|e| {
            if e.is_rejection() {
                tracing::warn!(
                    path = %parts.uri.path(),
                    timestamp = %timestamp,
                    reason = %e,
                    "Rejected Slack request"
                );
            }
            ApiError::from(e)
        })?;

    tracing::debug!(
        path = %parts.uri.path(),
        body_size = body.len(),
        "Slack request verified"
    );

    Ok(next.run(Request::from_parts(parts, Body::from(body))).await)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    #[test]
    fn header_value_requires_non_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static(""));
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_static("v0=abc"));

        assert_eq!(header_value(&headers, TIMESTAMP_HEADER), None);
        assert_eq!(header_value(&headers, SIGNATURE_HEADER), Some("v0=abc"));
        assert_eq!(header_value(&headers, "x-other"), None);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"X-Slack-Request-Timestamp").expect("valid name");
        headers.insert(name, HeaderValue::from_static("1577836800"));
        assert_eq!(header_value(&headers, TIMESTAMP_HEADER), Some("1577836800"));
    }

    #[test]
    fn gate_defaults() {
        let gate = SlackGate::new(RequestVerifier::new("secret"));
        assert_eq!(*gate.method(), Method::POST);
        assert_eq!(gate.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(gate.verifier().version(), "v0");
    }
}
