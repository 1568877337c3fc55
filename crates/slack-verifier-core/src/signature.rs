//! Signing string construction and signature formatting.
//!
//! A Slack signature is `<version>=<hex>` where `<hex>` is the HMAC-SHA256 of
//! `<version>:<timestamp>:<raw body>` keyed with the signing secret.

use crate::crypto::{constant_time_eq, hmac_sha256_hex};
use crate::error::{Result, VerifyError};

/// Signing scheme version used when none is given.
pub const DEFAULT_VERSION: &str = "v0";

/// Separator between the fields of the signing string.
pub const SIGNING_SEPARATOR: u8 = b':';

/// Resolve an empty version tag to [`DEFAULT_VERSION`].
#[must_use]
pub fn effective_version(version: &str) -> &str {
    if version.is_empty() {
        DEFAULT_VERSION
    } else {
        version
    }
}

/// Build the canonical signing string `version:timestamp:body`.
///
/// The body is appended as raw bytes with no re-encoding.
#[must_use]
pub fn signing_string(version: &str, timestamp: &str, body: &[u8]) -> Vec<u8> {
    let version = effective_version(version);
    let mut out = Vec::with_capacity(version.len() + timestamp.len() + body.len() + 2);
    out.extend_from_slice(version.as_bytes());
    out.push(SIGNING_SEPARATOR);
    out.extend_from_slice(timestamp.as_bytes());
    out.push(SIGNING_SEPARATOR);
    out.extend_from_slice(body);
    out
}

/// Compute the signature a sender would put in `X-Slack-Signature`.
///
/// An empty `version` is treated as [`DEFAULT_VERSION`].
///
/// # Errors
///
/// Returns [`VerifyError::Signing`] if `secret` is empty.
pub fn generate_signature(
    version: &str,
    timestamp: &str,
    body: &[u8],
    secret: &[u8],
) -> Result<String> {
    if secret.is_empty() {
        return Err(VerifyError::Signing("signing secret is empty".into()));
    }

    let version = effective_version(version);
    let digest = hmac_sha256_hex(secret, &[&signing_string(version, timestamp, body)])?;

    Ok(format!("{version}={digest}"))
}

/// Check `provided` against the signature recomputed from the other inputs.
///
/// A provided signature carrying a different version prefix simply fails to
/// match.
///
/// # Errors
///
/// [`VerifyError::InvalidSignature`] on mismatch, [`VerifyError::Signing`]
/// if the expected signature cannot be computed.
pub fn verify_signature(
    version: &str,
    timestamp: &str,
    body: &[u8],
    secret: &[u8],
    provided: &str,
) -> Result<()> {
    let expected = generate_signature(version, timestamp, body, secret)?;

    if constant_time_eq(expected.as_bytes(), provided.as_bytes()) {
        Ok(())
    } else {
        Err(VerifyError::InvalidSignature)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_generated_signature_verifies(
            version in "[a-z0-9]{0,4}",
            timestamp in "[0-9]{1,12}",
            body in proptest::collection::vec(proptest::num::u8::ANY, 0..512),
            secret in proptest::collection::vec(proptest::num::u8::ANY, 1..64)
        ) {
            let sig = generate_signature(&version, &timestamp, &body, &secret).expect("sign");
            let prefix = format!("{}=", effective_version(&version));
            prop_assert!(sig.starts_with(&prefix));
            prop_assert_eq!(verify_signature(&version, &timestamp, &body, &secret, &sig), Ok(()));
        }

        #[test]
        fn prop_empty_version_matches_v0(
            timestamp in "[0-9]{1,12}",
            body in proptest::collection::vec(proptest::num::u8::ANY, 0..512),
            secret in proptest::collection::vec(proptest::num::u8::ANY, 1..64)
        ) {
            let empty = generate_signature("", &timestamp, &body, &secret).expect("sign");
            let v0 = generate_signature("v0", &timestamp, &body, &secret).expect("sign");
            prop_assert_eq!(&empty, &v0);
            prop_assert_eq!(verify_signature("", &timestamp, &body, &secret, &v0), Ok(()));
        }

        #[test]
        fn prop_single_byte_flip_is_rejected(
            timestamp in "[0-9]{1,12}",
            body in proptest::collection::vec(proptest::num::u8::ANY, 0..512),
            secret in proptest::collection::vec(proptest::num::u8::ANY, 1..64),
            index in any::<prop::sample::Index>()
        ) {
            let sig = generate_signature("v0", &timestamp, &body, &secret).expect("sign");
            let mut bytes = sig.into_bytes();
            let i = index.index(bytes.len());
            bytes[i] ^= 0x01;
            let tampered = String::from_utf8(bytes).expect("ascii stays ascii");
            prop_assert_eq!(
                verify_signature("v0", &timestamp, &body, &secret, &tampered),
                Err(VerifyError::InvalidSignature)
            );
        }
    }
}
