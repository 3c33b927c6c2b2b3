//! Shared application state for the Meetup API server.

use chrono::{DateTime, Utc};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Immutable after construction.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service name reported by the health endpoint.
    pub service: String,
    /// When this state was created.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state for the named service, stamped with the current time.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}
