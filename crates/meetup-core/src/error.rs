//! Failure taxonomy for Simple Meetup.
//!
//! [`AppError`] is the single error type that application logic hands to
//! the serving boundary. Each variant corresponds to exactly one
//! [`ErrorKind`], and the boundary decides the transport status from the
//! kind alone.
//!
//! [`InvalidResourceError`] is raised when a valid resource could not be
//! assembled. It is an invariant violation rather than an expected
//! business error, so nothing between the failure site and the boundary
//! should catch or translate it.

use std::error::Error as StdError;

/// Boxed causal error carried by [`InvalidResourceError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Closed set of failure kinds the application can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// A valid resource could not be assembled.
    InvalidResource,
    /// The requested entity does not exist.
    NotFound,
    /// The request itself was malformed.
    BadRequest,
    /// Any other unrecoverable failure.
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::InvalidResource,
        Self::NotFound,
        Self::BadRequest,
        Self::Internal,
    ];

    /// Stable `snake_case` code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidResource => "invalid_resource",
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::Internal => "internal",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Thrown when a valid resource couldn't be assembled.
///
/// Carries an optional human-readable message and an optional underlying
/// cause. Both are stored as given and handed back unchanged by
/// [`message`](Self::message) and [`source`](StdError::source).
#[derive(Debug, Default, thiserror::Error)]
#[error(
    "invalid resource: {}",
    .message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
)]
pub struct InvalidResourceError {
    message: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl InvalidResourceError {
    /// Text used when no message was supplied.
    pub const DEFAULT_MESSAGE: &'static str = "a valid resource could not be assembled";

    /// Create a signal with neither message nor cause.
    pub const fn new() -> Self {
        Self {
            message: None,
            source: None,
        }
    }

    /// Create a signal carrying only a message.
    ///
    /// The message reaches HTTP clients; put sensitive detail in the cause.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            source: None,
        }
    }

    /// Create a signal carrying only an underlying cause.
    pub fn with_source<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a signal carrying both a message and an underlying cause.
    ///
    /// Only the message reaches HTTP clients.
    pub fn with_message_and_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: Some(message.into()),
            source: Some(Box::new(source)),
        }
    }

    /// The message supplied at construction, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The message, or [`DEFAULT_MESSAGE`](Self::DEFAULT_MESSAGE) when absent.
    pub fn describe(&self) -> &str {
        self.message().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

/// Application-level error handed to the serving boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A valid resource could not be assembled.
    #[error(transparent)]
    InvalidResource(#[from] InvalidResourceError),

    /// The requested entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unrecoverable internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for [`AppError::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Shorthand for [`AppError::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Shorthand for [`AppError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The kind of failure this error represents.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidResource(_) => ErrorKind::InvalidResource,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidResource(err) => err.describe(),
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
        }
    }

    /// The wrapped [`InvalidResourceError`], if this is one.
    pub const fn as_invalid_resource(&self) -> Option<&InvalidResourceError> {
        match self {
            Self::InvalidResource(err) => Some(err),
            _ => None,
        }
    }
}
