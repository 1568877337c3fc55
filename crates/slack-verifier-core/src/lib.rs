//! Slack request signature verification.
//!
//! Slack signs every request it sends with `X-Slack-Signature`, an
//! HMAC-SHA256 over `v0:<timestamp>:<raw body>` keyed with the app's signing
//! secret, and stamps it with `X-Slack-Request-Timestamp`. This crate:
//!
//! - builds the signing string and computes signatures ([`generate_signature`])
//! - compares signatures in constant time ([`crypto::constant_time_eq`])
//! - rejects stale timestamps ([`timestamp::check_age`])
//! - composes both checks into one verdict ([`RequestVerifier`],
//!   [`VerificationRequest`])
//!
//! It has no HTTP dependencies; the axum gate lives in
//! `slack-verifier-service`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // every fallible fn returns VerifyError

pub mod crypto;
pub mod error;
pub mod request;
pub mod signature;
pub mod timestamp;
pub mod verifier;

pub use error::{Result, VerifyError};
pub use request::{SigningSecret, VerificationRequest};
pub use signature::{generate_signature, verify_signature, DEFAULT_VERSION};
pub use timestamp::{parse_timestamp, DEFAULT_MAX_REQUEST_AGE};
pub use verifier::RequestVerifier;
