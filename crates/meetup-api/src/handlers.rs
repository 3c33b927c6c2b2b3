//! Endpoint handlers owned by the boundary itself.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | any | unmatched | JSON 404 via the status table |

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use meetup_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /health` -- report the service as up.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.service,
        "started_at": state.started_at,
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::from(AppError::not_found(format!("no route for {}", uri.path())))
}
