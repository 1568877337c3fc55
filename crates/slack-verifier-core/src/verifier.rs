//! Request verifier configured once and shared across requests.

use std::time::Duration;

use bytes::Bytes;

use crate::error::Result;
use crate::request::{SigningSecret, VerificationRequest};
use crate::signature::{self, DEFAULT_VERSION};
use crate::timestamp::{self, DEFAULT_MAX_REQUEST_AGE};

/// Verifies requests signed with one secret.
///
/// Holds only read-only configuration, so a single instance can sit behind
/// an `Arc` and serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct RequestVerifier {
    secret: SigningSecret,
    version: String,
    max_allowed_age: Duration,
}

impl RequestVerifier {
    /// Create a verifier using [`DEFAULT_VERSION`] and
    /// [`DEFAULT_MAX_REQUEST_AGE`].
    #[must_use]
    pub fn new(secret: impl Into<SigningSecret>) -> Self {
        Self {
            secret: secret.into(),
            version: DEFAULT_VERSION.to_string(),
            max_allowed_age: DEFAULT_MAX_REQUEST_AGE,
        }
    }

    /// Set the signing scheme version. Empty means [`DEFAULT_VERSION`].
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = signature::effective_version(&version).to_string();
        self
    }

    /// Set the freshness window. Zero means [`DEFAULT_MAX_REQUEST_AGE`].
    #[must_use]
    pub fn with_max_allowed_age(mut self, max_allowed_age: Duration) -> Self {
        self.max_allowed_age = timestamp::effective_max_age(max_allowed_age);
        self
    }

    /// Signing scheme version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Freshness window.
    #[must_use]
    pub fn max_allowed_age(&self) -> Duration {
        self.max_allowed_age
    }

    /// Build the per-request value for the given header values and body.
    #[must_use]
    pub fn request(
        &self,
        timestamp: impl Into<String>,
        provided_signature: impl Into<String>,
        raw_body: impl Into<Bytes>,
    ) -> VerificationRequest {
        VerificationRequest::new(self.secret.clone(), timestamp, provided_signature, raw_body)
            .with_version(self.version.as_str())
            .with_max_allowed_age(self.max_allowed_age)
    }

    /// Verify one request: timestamp first, then signature.
    pub fn verify(
        &self,
        timestamp: &str,
        provided_signature: &str,
        raw_body: impl Into<Bytes>,
    ) -> Result<()> {
        self.request(timestamp, provided_signature, raw_body).verify()
    }

    /// Sign `body` at `timestamp` with this verifier's secret and version.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> Result<String> {
        signature::generate_signature(&self.version, timestamp, body, self.secret.expose())
    }
}
