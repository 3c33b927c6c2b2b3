//! Status table consulted when an [`ErrorKind`] reaches the boundary.
//!
//! | Kind | Status |
//! |------|--------|
//! | `invalid_resource` | 500 Internal Server Error |
//! | `not_found` | 404 Not Found |
//! | `bad_request` | 400 Bad Request |
//! | `internal` | 500 Internal Server Error |

use axum::http::StatusCode;
use meetup_core::ErrorKind;

/// Look up the transport status for a failure kind.
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidResource | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
    }
}
