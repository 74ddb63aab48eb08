//! Authenticated API client core
//!
//! Performs requests against the backend with the session cookie attached,
//! translates every failure into the normalized error taxonomy, and drives
//! the 401 refresh-and-replay path.
//!
//! Failure classification, evaluated in order:
//! 1. No response received -> `Network` with its fixed message.
//! 2. 401 on an unretried request -> refresh the session, replay once.
//! 3. Anything else (including any failure of a replayed request) -> the
//!    server's `message` field when present, otherwise the fixed fallback;
//!    `Forbidden` for session/permission statuses, `Unexpected` otherwise.

use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::refresh::{RefreshCoordinator, SessionRefresh};
use crate::config::ClientConfig;
use crate::errors::{server_message, ApiError};
use crate::http::{FormField, HttpTransport, OutboundRequest};

/// Authenticated client for the Cinelog backend.
///
/// Each instance owns its transport (and thus its cookie store) and its own
/// refresh coordinator; nothing is process-global, so independent clients can
/// coexist in tests and in the same process.
pub struct ApiClient {
    transport: HttpTransport,
    refresh: Arc<dyn SessionRefresh>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /// Create a client configured from environment variables.
    ///
    /// # Errors
    /// Returns `ApiError::Config` on invalid environment values.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a builder for fluent configuration.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Execute a GET request and decode the JSON response.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(OutboundRequest::get(path)).await
    }

    /// Execute a GET request with query parameters.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.execute(OutboundRequest::get(path).with_query(query)).await
    }

    /// Execute a POST request with a JSON body.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(OutboundRequest::post_json(path, body)?).await
    }

    /// Execute a bodiless POST request.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(OutboundRequest::post(path)).await
    }

    /// Execute a POST request with buffered multipart form data.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<FormField>,
    ) -> Result<T, ApiError> {
        self.execute(OutboundRequest::post(path).with_multipart(fields)).await
    }

    /// Execute a PUT request with a JSON body.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(OutboundRequest::put_json(path, body)?).await
    }

    /// Execute a DELETE request, discarding any response body.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_discard(OutboundRequest::delete(path)).await
    }

    /// Execute an arbitrary request description and decode the JSON response.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
    ) -> Result<T, ApiError> {
        let response = self.send_with_refresh(request).await?;
        decode(response).await
    }

    /// Execute an arbitrary request description, discarding the response body.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn execute_discard(&self, request: OutboundRequest) -> Result<(), ApiError> {
        self.send_with_refresh(request).await.map(drop)
    }

    /// Send a request, driving the 401 refresh-and-replay path.
    ///
    /// The replay allowance is consumed before the refresh outcome is awaited,
    /// so a replay that 401s again terminates instead of re-entering the
    /// refresh path. Exactly one network call is made per invocation, except
    /// on that path where it is two (refresh excluded, since it may be shared
    /// with concurrent callers).
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send_with_refresh(&self, mut request: OutboundRequest) -> Result<Response, ApiError> {
        let response = match self.transport.execute(&request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "no response received");
                return Err(ApiError::network());
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && !request.retried() {
            request.mark_retried();
            debug!("401 received, awaiting session refresh");
            self.refresh.refresh().await?;

            let replay = match self.transport.execute(&request).await {
                Ok(response) => response,
                Err(err) => {
                    debug!(error = %err, "replay received no response");
                    return Err(ApiError::network());
                }
            };
            if replay.status().is_success() {
                return Ok(replay);
            }
            return Err(classify(replay).await);
        }

        Err(classify(response).await)
    }
}

/// Decode a successful response body.
///
/// 204/205 carry no body by spec; they decode as JSON `null` so `()` targets
/// succeed.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
            ApiError::Unexpected(format!(
                "no content response ({}), but a body was expected",
                status.as_u16()
            ))
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Unexpected(format!("failed to parse response: {e}")))
}

/// Normalize a failure response.
async fn classify(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body);

    if status == StatusCode::FORBIDDEN || status == StatusCode::UNAUTHORIZED {
        ApiError::Forbidden(message)
    } else {
        ApiError::Unexpected(message)
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    refresh: Option<Arc<dyn SessionRefresh>>,
}

impl ApiClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a refresh implementation instead of the per-client coordinator.
    #[must_use]
    pub fn refresh(mut self, refresh: Arc<dyn SessionRefresh>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the transport cannot be built.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();

        let mut transport = HttpTransport::builder(config.base_url).timeout(config.timeout);
        if let Some(agent) = config.user_agent {
            transport = transport.user_agent(agent);
        }
        let transport = transport.build()?;

        // The coordinator shares the transport's cookie store so the rotated
        // session cookie applies to replays.
        let refresh = self
            .refresh
            .unwrap_or_else(|| Arc::new(RefreshCoordinator::new(transport.clone())));

        Ok(ApiClient { transport, refresh })
    }
}
