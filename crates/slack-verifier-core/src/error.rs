//! Verification error types.

use thiserror::Error;

/// Errors produced while signing or verifying a Slack request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The signature could not be computed (bad key material).
    #[error("signing failed: {0}")]
    Signing(String),

    /// The provided signature does not match the recomputed one.
    #[error("invalid signature")]
    InvalidSignature,

    /// The timestamp is missing or not a base-10 integer.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The timestamp parsed but the request is older than allowed.
    #[error("max allowed request age exceeded: age={age_secs}s, max={max_secs}s")]
    MaxAllowedAgeExceeded {
        /// Age of the request in seconds.
        age_secs: i64,
        /// Configured maximum age in seconds.
        max_secs: i64,
    },
}

impl VerifyError {
    /// Whether this is an expected negative verdict rather than a system fault.
    ///
    /// Rejections mean the request presented credentials that failed to
    /// check out. `Signing` is the only non-rejection: it means the server
    /// could not compute a signature at all.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Signing(_))
    }
}

/// Result alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
