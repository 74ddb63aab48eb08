//! Normalized client error types
//!
//! Raw reqwest/transport failures never escape the client boundary; callers
//! only ever see this taxonomy, and `Display` yields the exact message the UI
//! is expected to surface.

use serde::Deserialize;
use thiserror::Error;

/// Fixed message for failures where no response was received.
pub const NETWORK_ERROR_MESSAGE: &str = "network error, check your connection.";

/// Fixed message for a failed session refresh.
pub const SESSION_EXPIRED_MESSAGE: &str = "session expired, log in again";

/// Fallback when a failure response carries no usable `message` field.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "unexpected error, try again";

/// Categories of normalized errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response reached the client (connect/timeout/DNS failure).
    Network,
    /// A 401 could not be recovered by refreshing the session.
    SessionExpired,
    /// The server denied the request on session/permission grounds.
    Forbidden,
    /// Any other failure; message passed through from the server when present.
    Unexpected,
    /// Client-side construction/configuration failure.
    Config,
}

/// Normalized API error.
///
/// `Clone` is required because the refresh coordinator fans a single failure
/// out to every concurrent waiter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    SessionExpired(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Network failure with the fixed user-facing message.
    #[must_use]
    pub fn network() -> Self {
        Self::Network(NETWORK_ERROR_MESSAGE.to_string())
    }

    /// Failed session refresh with the fixed user-facing message.
    #[must_use]
    pub fn session_expired() -> Self {
        Self::SessionExpired(SESSION_EXPIRED_MESSAGE.to_string())
    }

    /// Get the error category for this error.
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::SessionExpired(_) => ApiErrorKind::SessionExpired,
            Self::Forbidden(_) => ApiErrorKind::Forbidden,
            Self::Unexpected(_) => ApiErrorKind::Unexpected,
            Self::Config(_) => ApiErrorKind::Config,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract the server-supplied `message` field from a failure body.
///
/// Returns the message verbatim when the body is a JSON object carrying one,
/// otherwise the fixed fallback string.
#[must_use]
pub(crate) fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string())
}
