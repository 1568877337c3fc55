//! Cryptographic primitives for request signing.
//!
//! HMAC-SHA256 over a message assembled from several byte slices, and a
//! constant-time comparison used when checking a provided signature against
//! the recomputed one.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{Result, VerifyError};

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 over the concatenation of `parts` and return the
/// lowercase hex digest (64 characters).
///
/// The parts are fed to the MAC in order, so the digest is identical to the
/// one computed over a single buffer holding them back to back.
pub fn hmac_sha256_hex(secret: &[u8], parts: &[&[u8]]) -> Result<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| VerifyError::Signing(e.to_string()))?;
    for part in parts {
        mac.update(part);
    }

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time byte comparison.
///
/// The running time depends only on the lengths of the inputs, never on
/// where they first differ. Length itself is not secret: every signature of
/// a given version has the same length.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
