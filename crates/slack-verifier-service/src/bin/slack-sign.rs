//! Print the Slack signing headers for a request body.
//!
//! Usage: `echo -n '{"type":"event_callback"}' | slack-sign [timestamp]`
//!
//! Reads the secret from `SLACK_SIGNING_SECRET` (and the version from
//! `SLACK_SIGNATURE_VERSION`, default `v0`). The timestamp defaults to now.

use tokio::io::AsyncReadExt;

use slack_verifier_core::{generate_signature, parse_timestamp, timestamp::unix_now};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let secret = std::env::var("SLACK_SIGNING_SECRET")
        .map_err(|_| "SLACK_SIGNING_SECRET is not set")?;
    let version = std::env::var("SLACK_SIGNATURE_VERSION").unwrap_or_default();

    let timestamp = match std::env::args().nth(1) {
        Some(raw) => parse_timestamp(&raw)?.to_string(),
        None => unix_now().to_string(),
    };

    let mut body = Vec::new();
    tokio::io::stdin().read_to_end(&mut body).await?;

    let signature = generate_signature(&version, &timestamp, &body, secret.as_bytes())?;

    println!("X-Slack-Request-Timestamp: {timestamp}");
    println!("X-Slack-Signature: {signature}");

    Ok(())
}
