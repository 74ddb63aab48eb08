//! Client configuration
//!
//! Loads client settings from environment variables with sane defaults.
//!
//! ## Environment Variables
//! - `CINELOG_API_URL`: Backend base URL (default `http://localhost:3000/api`)
//! - `CINELOG_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `CINELOG_USER_AGENT`: Custom User-Agent header (default: reqwest's)

use std::time::Duration;

use crate::errors::ApiError;

/// Default backend origin used when no environment override is present.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the backend (e.g., `http://localhost:3000/api`).
    pub base_url: String,
    /// Timeout applied uniformly to every request, including refresh calls.
    pub timeout: Duration,
    /// Custom User-Agent header; reqwest's default when unset.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for anything unset. A `.env` file in the working
    /// directory is honored when present.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if `CINELOG_HTTP_TIMEOUT_SECS` is set but
    /// not a valid number of seconds.
    pub fn from_env() -> Result<Self, ApiError> {
        // Missing .env files are fine; only load errors for present files matter.
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("CINELOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout = match std::env::var("CINELOG_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    ApiError::Config(format!("Invalid CINELOG_HTTP_TIMEOUT_SECS: {e}"))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        let user_agent = std::env::var("CINELOG_USER_AGENT").ok();

        tracing::debug!(base_url = %base_url, timeout_secs = timeout.as_secs(), "client configuration loaded");

        Ok(Self { base_url, timeout, user_agent })
    }
}
