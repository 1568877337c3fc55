//! Slack request verification service.
//!
//! This crate provides the HTTP side of Slack request signing:
//!
//! - [`gate`] - axum middleware that rejects unsigned, forged or stale requests
//! - [`create_router`] - a ready-made service with a gated webhook route
//!
//! Embedding applications can skip the router and wrap their own routes:
//!
//! ```no_run
//! use axum::{routing::post, Router};
//! use slack_verifier_core::RequestVerifier;
//! use slack_verifier_service::gate::{self, SlackGate};
//!
//! async fn commands() -> &'static str {
//!     "ok"
//! }
//!
//! let routes: Router = Router::new().route("/slack/commands", post(commands));
//! let routes = gate::protect(routes, SlackGate::new(RequestVerifier::new("signing-secret")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for axum

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use gate::SlackGate;
pub use routes::create_router;
pub use state::AppState;
