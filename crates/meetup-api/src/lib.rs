//! HTTP serving boundary for Simple Meetup.
//!
//! This crate turns application failures into HTTP responses and hosts the
//! Axum server that application routes are merged into:
//!
//! - **Status table** ([`status::status_for`]) mapping every
//!   [`ErrorKind`](meetup_core::ErrorKind) to a status code
//! - **Error responses** ([`error::ApiError`]) rendered as JSON with the
//!   causal chain logged but never exposed
//! - **Router skeleton** with `GET /health` and a JSON 404 fallback
//! - **Configuration** from `meetup-config.yaml` plus env overrides
//! - **Logging** via `tracing-subscriber`

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod status;
pub mod telemetry;

// Re-export primary types for convenience.
pub use config::{ApiConfig, ConfigError, LoggingConfig, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
pub use status::status_for;
pub use telemetry::{init_tracing, TelemetryError};
