//! Application state.

use crate::config::{ConfigError, ServiceConfig};
use crate::gate::SlackGate;

/// Everything the router is built from.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Signature gate for the webhook route.
    pub gate: SlackGate,
}

impl AppState {
    /// Create application state, building the gate from `config`.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let verifier = config.verifier()?;

        tracing::info!(
            signature_version = %verifier.version(),
            max_request_age_secs = verifier.max_allowed_age().as_secs(),
            "Slack signature verification enabled"
        );

        let gate = SlackGate::new(verifier).with_max_body_bytes(config.max_body_bytes);

        Ok(Self { config, gate })
    }
}
