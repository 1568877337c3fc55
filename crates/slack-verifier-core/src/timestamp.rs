//! Request timestamp parsing and freshness checks.

use std::time::Duration;

use crate::error::{Result, VerifyError};

/// Freshness window used when none is configured.
pub const DEFAULT_MAX_REQUEST_AGE: Duration = Duration::from_secs(5 * 60);

/// Resolve a zero duration to [`DEFAULT_MAX_REQUEST_AGE`].
#[must_use]
pub fn effective_max_age(max_age: Duration) -> Duration {
    if max_age.is_zero() {
        DEFAULT_MAX_REQUEST_AGE
    } else {
        max_age
    }
}

/// Parse a timestamp header value as base-10 Unix seconds.
///
/// Any `i64` is accepted; whether it is recent enough is decided by
/// [`check_age`].
///
/// # Errors
///
/// Returns [`VerifyError::InvalidTimestamp`] if `raw` is empty or not an
/// integer.
pub fn parse_timestamp(raw: &str) -> Result<i64> {
    if raw.is_empty() {
        return Err(VerifyError::InvalidTimestamp("timestamp is empty".into()));
    }
    raw.parse::<i64>()
        .map_err(|e| VerifyError::InvalidTimestamp(format!("{raw:?}: {e}")))
}

/// Check that a request stamped at `timestamp` is not older than `max_age`
/// at `now` (both Unix seconds).
///
/// The limit is inclusive. Timestamps in the future have a negative age and
/// always pass.
///
/// # Errors
///
/// Returns [`VerifyError::MaxAllowedAgeExceeded`] when the age is over the
/// limit.
pub fn check_age(timestamp: i64, now: i64, max_age: Duration) -> Result<()> {
    let max_secs = i64::try_from(effective_max_age(max_age).as_secs()).unwrap_or(i64::MAX);
    let age_secs = now.saturating_sub(timestamp);

    if age_secs > max_secs {
        return Err(VerifyError::MaxAllowedAgeExceeded { age_secs, max_secs });
    }
    Ok(())
}

/// Current Unix time in seconds.
#[must_use]
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
