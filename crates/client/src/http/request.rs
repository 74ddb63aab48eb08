//! Replayable outbound request description
//!
//! Requests are stored as owned data (JSON values, buffered multipart parts)
//! so the exact same request can be rebuilt and reissued after a session
//! refresh. The `retried` flag is the only field mutated after construction,
//! and it is set at most once.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;

use crate::errors::ApiError;

/// Body of an [`OutboundRequest`].
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON body, held as a value so it can be re-serialized on replay.
    Json(serde_json::Value),
    /// Multipart form data with fully buffered parts.
    Multipart(Vec<FormField>),
}

/// A single multipart form field.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

/// Value of a multipart form field.
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File { file_name: String, content_type: String, bytes: Vec<u8> },
}

/// An outbound request to the backend.
///
/// Owned exclusively by the call that created it; rebuilding a reqwest request
/// from it is always possible, which is what makes the single 401 replay safe
/// for every body type.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Path relative to the configured base URL (e.g., `/movies`).
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Per-call header overrides.
    pub headers: HeaderMap,
    /// Whether this request has already been replayed after a refresh.
    pub(crate) retried: bool,
}

impl OutboundRequest {
    /// Create a request with no query or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
            retried: false,
        }
    }

    /// GET request for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Bodiless POST request for `path`.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// DELETE request for `path`.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// POST request with a JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the body cannot be serialized.
    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::new(Method::POST, path).with_json(body)
    }

    /// PUT request with a JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the body cannot be serialized.
    pub fn put_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::new(Method::PUT, path).with_json(body)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the body cannot be serialized.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize request body: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach buffered multipart form fields.
    #[must_use]
    pub fn with_multipart(mut self, fields: Vec<FormField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// Append query pairs.
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Whether this request has already consumed its single replay.
    #[must_use]
    pub fn retried(&self) -> bool {
        self.retried
    }

    /// Consume the single replay allowance. Called before awaiting the refresh
    /// outcome so a replay that 401s again cannot re-enter the refresh path.
    pub(crate) fn mark_retried(&mut self) {
        debug_assert!(!self.retried, "a request is replayed at most once");
        self.retried = true;
    }
}
