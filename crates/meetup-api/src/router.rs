//! Axum router construction for the Meetup API.
//!
//! The boundary owns only the health probe and the fallback. Application
//! routes are built elsewhere and mounted behind the boundary's own
//! routes; any [`ApiError`] they return is answered through the status
//! table.
//!
//! [`ApiError`]: crate::error::ApiError

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Path of the liveness probe. Reserved by the boundary.
pub const HEALTH_PATH: &str = "/health";

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - every route in `routes`
/// - a JSON 404 fallback for anything unmatched
///
/// `routes` is mounted as the fallback of the boundary router rather than
/// merged into it, so path overlaps never panic. [`HEALTH_PATH`] is
/// answered by the boundary even when `routes` defines it too, and any
/// fallback set on `routes` is replaced by the boundary's 404.
///
/// CORS is configured to allow any origin.
pub fn build_router(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes
        .fallback(handlers::not_found)
        .with_state(Arc::clone(&state));

    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .fallback_service(app)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
