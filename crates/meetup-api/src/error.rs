//! Boundary error type for the Meetup API.
//!
//! [`ApiError`] wraps the application's [`AppError`] so that it can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! status code comes from [`status_for`] and nothing else.

use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use meetup_core::{AppError, ErrorKind, InvalidResourceError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::status::status_for;

/// Message written for [`ErrorKind::Internal`] instead of the real detail.
const SANITIZED_MESSAGE: &str = "An internal error occurred";

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

/// An application error that has reached the serving boundary.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    /// The failure kind of the wrapped error.
    pub const fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    /// The status this error will be answered with.
    pub const fn status(&self) -> StatusCode {
        status_for(self.kind())
    }

    /// Unwrap the application error.
    pub fn into_inner(self) -> AppError {
        self.0
    }

    /// Text written to the response body's `message` field.
    ///
    /// `InvalidResource`, `NotFound` and `BadRequest` messages are sent to
    /// the client verbatim, so an assembler's message must not carry
    /// secrets. `Internal` is replaced with a fixed text. Causes are never
    /// sent.
    fn public_message(&self) -> &str {
        match self.kind() {
            ErrorKind::Internal => SANITIZED_MESSAGE,
            ErrorKind::InvalidResource | ErrorKind::NotFound | ErrorKind::BadRequest => {
                self.0.detail()
            }
        }
    }
}

impl From<InvalidResourceError> for ApiError {
    fn from(err: InvalidResourceError) -> Self {
        Self(AppError::InvalidResource(err))
    }
}

/// JSON body written for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status.
    pub status: u16,
    /// Canonical reason phrase for `status`.
    pub error: String,
    /// [`ErrorKind`] code.
    pub code: String,
    /// Human-readable message. Never contains the causal chain.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = self.status();

        if status.is_server_error() {
            error!(
                code = kind.code(),
                status = status.as_u16(),
                error = %self.0,
                causes = %cause_chain(&self.0),
                "request failed"
            );
        } else {
            debug!(code = kind.code(), status = status.as_u16(), error = %self.0, "request rejected");
        }

        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: reason_phrase(status).to_owned(),
            code: kind.code().to_owned(),
            message: self.public_message().to_owned(),
        };

        (status, Json(body)).into_response()
    }
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

/// Render every `source()` below `err`, joined with `": "`.
fn cause_chain(err: &dyn StdError) -> String {
    let mut parts = Vec::new();
    let mut next = err.source();
    while let Some(cause) = next {
        parts.push(cause.to_string());
        next = cause.source();
    }
    parts.join(": ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn cause_chain_walks_all_sources() {
        let err = AppError::from(InvalidResourceError::with_message_and_source(
            "cannot assemble resource X",
            io::Error::other("registrations offline"),
        ));
        assert_eq!(cause_chain(&err), "registrations offline");
    }

    #[test]
    fn cause_chain_is_empty_without_sources() {
        let err = AppError::from(InvalidResourceError::new());
        assert_eq!(cause_chain(&err), "");
    }

    #[test]
    fn status_follows_kind() {
        let err = ApiError::from(InvalidResourceError::new());
        assert_eq!(err.kind(), ErrorKind::InvalidResource);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(AppError::not_found("event 9"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_message_is_sanitized() {
        let err = ApiError::from(AppError::internal("password=hunter2"));
        assert_eq!(err.public_message(), SANITIZED_MESSAGE);
    }

    #[test]
    fn invalid_resource_message_is_public() {
        let err = ApiError::from(InvalidResourceError::with_message_and_source(
            "cannot assemble event 7",
            io::Error::other("secret cause"),
        ));
        assert_eq!(err.public_message(), "cannot assemble event 7");
    }

    #[test]
    fn into_inner_returns_original() {
        let err = ApiError::from(InvalidResourceError::with_message("x"));
        let inner = err.into_inner();
        assert_eq!(inner.as_invalid_resource().unwrap().message(), Some("x"));
    }
}
