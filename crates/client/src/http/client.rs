//! HTTP transport
//!
//! Thin reqwest wrapper that owns the cookie store (the session credential is
//! forwarded automatically on every call) and rebuilds concrete requests from
//! an [`OutboundRequest`] description. This layer performs no retries of any
//! kind; the only sanctioned retry in this client is the API core's single
//! 401-triggered replay.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Response};
use tracing::debug;

use super::request::{FormValue, OutboundRequest, RequestBody};
use crate::errors::ApiError;

/// HTTP transport with a shared cookie store.
///
/// Cloning is cheap and shares the underlying connection pool and cookie
/// store, which is what lets the refresh coordinator rotate the session
/// cookie for every subsequent request.
#[derive(Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: String,
}

impl HttpTransport {
    /// Start building a new transport.
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// Base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute the described request once and return whatever response the
    /// server produced, successful or not. `Err` means no response was
    /// received at all.
    pub(crate) async fn execute(
        &self,
        request: &OutboundRequest,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => {
                let mut form = Form::new();
                for field in fields {
                    form = match &field.value {
                        FormValue::Text(text) => form.text(field.name.clone(), text.clone()),
                        FormValue::File { file_name, content_type, bytes } => {
                            let part = Part::bytes(bytes.clone())
                                .file_name(file_name.clone())
                                .mime_str(content_type)
                                .unwrap_or_else(|_| {
                                    Part::bytes(bytes.clone()).file_name(file_name.clone())
                                });
                            form.part(field.name.clone(), part)
                        }
                    };
                }
                builder.multipart(form)
            }
        };

        debug!(method = %request.method, %url, retried = request.retried, "sending HTTP request");

        let response = builder.send().await?;

        debug!(method = %request.method, %url, status = %response.status(), "received HTTP response");

        Ok(response)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: Duration::from_secs(30), user_agent: None }
    }

    /// Timeout applied uniformly to every request, refresh calls included.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the underlying client cannot be built.
    pub fn build(self) -> Result<HttpTransport, ApiError> {
        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .cookie_store(true)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(HttpTransport { client, base_url: self.base_url })
    }
}
