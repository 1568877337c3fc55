//! Per-request verification input.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::error::Result;
use crate::signature::{self, DEFAULT_VERSION};
use crate::timestamp::{self, DEFAULT_MAX_REQUEST_AGE};

/// Shared signing secret.
///
/// Cheap to clone; `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Arc<str>);

impl SigningSecret {
    /// Wrap a secret value.
    #[must_use]
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    /// Raw key bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}

impl From<&str> for SigningSecret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SigningSecret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Everything needed to verify one inbound request.
///
/// Built fresh from the headers and raw body of a single request and used
/// once. Empty `version` and zero `max_allowed_age` fall back to
/// [`DEFAULT_VERSION`] and [`DEFAULT_MAX_REQUEST_AGE`] at construction.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    version: String,
    raw_body: Bytes,
    signing_secret: SigningSecret,
    timestamp: String,
    provided_signature: String,
    max_allowed_age: Duration,
}

impl VerificationRequest {
    /// Create a request with the default version and freshness window.
    #[must_use]
    pub fn new(
        signing_secret: SigningSecret,
        timestamp: impl Into<String>,
        provided_signature: impl Into<String>,
        raw_body: impl Into<Bytes>,
    ) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            raw_body: raw_body.into(),
            signing_secret,
            timestamp: timestamp.into(),
            provided_signature: provided_signature.into(),
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

    /// Raw request body exactly as received.
    #[must_use]
    pub fn raw_body(&self) -> &Bytes {
        &self.raw_body
    }

    /// Timestamp header value.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Signature header value.
    #[must_use]
    pub fn provided_signature(&self) -> &str {
        &self.provided_signature
    }

    /// Freshness window.
    #[must_use]
    pub fn max_allowed_age(&self) -> Duration {
        self.max_allowed_age
    }

    /// Parse the timestamp header as Unix seconds.
    pub fn int_timestamp(&self) -> Result<i64> {
        timestamp::parse_timestamp(&self.timestamp)
    }

    /// Check the timestamp against the current time.
    pub fn verify_timestamp(&self) -> Result<()> {
        self.verify_timestamp_at(timestamp::unix_now())
    }

    /// Check the timestamp against `now` (Unix seconds).
    pub fn verify_timestamp_at(&self, now: i64) -> Result<()> {
        let ts = self.int_timestamp()?;
        timestamp::check_age(ts, now, self.max_allowed_age)
    }

    /// Check the provided signature against the one recomputed from the
    /// version, timestamp, body and secret.
    pub fn verify_signature(&self) -> Result<()> {
        signature::verify_signature(
            &self.version,
            &self.timestamp,
            &self.raw_body,
            self.signing_secret.expose(),
            &self.provided_signature,
        )
    }

    /// Run both checks, timestamp first, stopping at the first failure.
    pub fn verify(&self) -> Result<()> {
        self.verify_at(timestamp::unix_now())
    }

    /// [`verify`](Self::verify) with an explicit current time.
    pub fn verify_at(&self, now: i64) -> Result<()> {
        self.verify_timestamp_at(now)?;
        self.verify_signature()
    }
}
