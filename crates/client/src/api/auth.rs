//! Session endpoints
//!
//! Login, logout, and the user-facing session refresh. The session itself
//! lives in an HTTP-only cookie managed by the transport's cookie store; these
//! calls only move `User` payloads.

use cinelog_domain::{User, UserEnvelope};
use serde::Serialize;
use tracing::info;

use super::client::ApiClient;
use super::refresh::REFRESH_PATH;
use crate::errors::ApiError;
use crate::http::OutboundRequest;

#[derive(Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Authenticate with an identifier (email or username) and password.
    ///
    /// On success the backend sets the session cookie and returns the user.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, ApiError> {
        let envelope: UserEnvelope =
            self.post("/auth/login", &LoginRequest { identifier, password }).await?;
        info!(user = %envelope.user.id, "logged in");
        Ok(envelope.user)
    }

    /// End the current session.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute_discard(OutboundRequest::post("/auth/logout")).await?;
        info!("logged out");
        Ok(())
    }

    /// Refresh the session and return the authenticated user.
    ///
    /// Used on startup to restore a session from the stored cookie. This goes
    /// through the normal client path; the single-flight coordinator is only
    /// involved when a 401 forces a refresh mid-request.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure, including when
    /// no session cookie is present.
    pub async fn refresh_session(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.post_empty(REFRESH_PATH).await?;
        Ok(envelope.user)
    }
}
