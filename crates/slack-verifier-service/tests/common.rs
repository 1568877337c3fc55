//! Common test utilities for slack-verifier integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::routing::any;
use axum::Router;
use axum_test::TestServer;
use bytes::Bytes;

use slack_verifier_core::{generate_signature, timestamp::unix_now, RequestVerifier};
use slack_verifier_service::gate::{self, SlackGate, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use slack_verifier_service::{create_router, AppState, ServiceConfig};

/// Secret shared by the harness and the requests it signs.
pub const SECRET: &str = "test_secret";

/// Path the gated handler is mounted on.
pub const WEBHOOK_PATH: &str = "/webhook";

/// Status the downstream handler answers with, distinct from plain 200.
pub const HANDLER_STATUS: StatusCode = StatusCode::ACCEPTED;

/// Test harness: a gated echo handler that counts its invocations.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Number of times the downstream handler ran.
    pub calls: Arc<AtomicUsize>,
}

impl TestHarness {
    /// Harness with a one-minute freshness window.
    pub fn new() -> Self {
        Self::with_max_age(Duration::from_secs(60))
    }

    /// Harness with a custom freshness window.
    pub fn with_max_age(max_age: Duration) -> Self {
        let verifier = RequestVerifier::new(SECRET).with_max_allowed_age(max_age);
        Self::with_gate(SlackGate::new(verifier))
    }

    /// Harness behind an arbitrary gate.
    pub fn with_gate(gate: SlackGate) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let routes = Router::new().route(
            WEBHOOK_PATH,
            any(move |body: Bytes| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (HANDLER_STATUS, body)
                }
            }),
        );

        let router = gate::protect(routes, gate);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, calls }
    }

    /// How many times the downstream handler ran.
    pub fn handler_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Verifier for [`SECRET`] with the default freshness window.
pub fn verifier() -> RequestVerifier {
    RequestVerifier::new(SECRET)
}

/// Server running the full service router.
pub fn service_server() -> TestServer {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        signing_secret: Some(SECRET.into()),
        ..ServiceConfig::default()
    };

    let state = AppState::new(config).expect("Failed to build app state");
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Current Unix time as a header value string.
pub fn now_timestamp() -> String {
    unix_now().to_string()
}

/// Unix time `secs` seconds ago.
pub fn timestamp_ago(secs: i64) -> String {
    (unix_now() - secs).to_string()
}

/// Sign `body` at `timestamp` with [`SECRET`].
pub fn sign(timestamp: &str, body: &[u8]) -> String {
    generate_signature("v0", timestamp, body, SECRET.as_bytes()).expect("Failed to sign")
}

/// Typed timestamp header.
pub fn timestamp_header(value: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(TIMESTAMP_HEADER),
        HeaderValue::from_str(value).expect("valid header value"),
    )
}

/// Typed signature header.
pub fn signature_header(value: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(SIGNATURE_HEADER),
        HeaderValue::from_str(value).expect("valid header value"),
    )
}
