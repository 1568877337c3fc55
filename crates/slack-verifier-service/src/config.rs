//! Service configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use slack_verifier_core::{RequestVerifier, DEFAULT_MAX_REQUEST_AGE, DEFAULT_VERSION};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No signing secret in the secrets file or `SLACK_SIGNING_SECRET`.
    #[error("SLACK_SIGNING_SECRET is not set")]
    MissingSigningSecret,
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Slack signing secret.
    pub signing_secret: Option<String>,

    /// Signing scheme version (default: "v0").
    pub signature_version: String,

    /// Maximum request age (default: 5 minutes).
    pub max_request_age: Duration,

    /// Path the gated webhook handler is mounted on.
    pub webhook_path: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field("signing_secret_configured", &self.signing_secret.is_some())
            .field("signature_version", &self.signature_version)
            .field("max_request_age", &self.max_request_age)
            .field("webhook_path", &self.webhook_path)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

/// Slack secrets file structure.
#[derive(Debug, Deserialize)]
struct SlackSecrets {
    signing_secret: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            signing_secret: load_signing_secret(),
            signature_version: std::env::var("SLACK_SIGNATURE_VERSION")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.signature_version),
            max_request_age: std::env::var("SLACK_MAX_REQUEST_AGE_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.max_request_age, Duration::from_secs),
            webhook_path: std::env::var("WEBHOOK_PATH").unwrap_or(defaults.webhook_path),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }

    /// Build the request verifier described by this configuration.
    pub fn verifier(&self) -> Result<RequestVerifier, ConfigError> {
        let secret = self
            .signing_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSigningSecret)?;

        Ok(RequestVerifier::new(secret)
            .with_version(self.signature_version.as_str())
            .with_max_allowed_age(self.max_request_age))
    }
}

/// Load the signing secret from file or environment.
fn load_signing_secret() -> Option<String> {
    let secret_paths = [".secrets/slack.json", "../.secrets/slack.json"];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<SlackSecrets>(path) {
            tracing::info!(path = %path, "Loaded Slack signing secret from file");
            return Some(secrets.signing_secret);
        }
    }

    tracing::debug!("Slack secrets file not found, using environment variables");
    std::env::var("SLACK_SIGNING_SECRET").ok()
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T, std::io::Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            signing_secret: None,
            signature_version: DEFAULT_VERSION.into(),
            max_request_age: DEFAULT_MAX_REQUEST_AGE,
            webhook_path: "/slack/events".into(),
            max_body_bytes: 1024 * 1024, // 1MB
            request_timeout_seconds: 30,
        }
    }
}
