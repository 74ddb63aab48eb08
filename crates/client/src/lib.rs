//! # Cinelog Client
//!
//! Async client for the Cinelog movie catalog backend.
//!
//! This crate contains:
//! - The authenticated API client core (normalized errors, 401
//!   refresh-and-replay)
//! - The single-flight session refresh coordinator
//! - Typed wrappers for the auth, user, movie, genre, and age rating
//!   endpoints
//!
//! ## Architecture
//! - `http`: cookie-forwarding transport and the replayable request model
//! - `api`: client core, refresh coordination, endpoint surface
//! - `config`/`errors`: environment configuration and the error taxonomy
//!
//! ## Example
//! ```no_run
//! use cinelog_client::{ApiClient, ClientConfig};
//! use cinelog_domain::MovieFilters;
//!
//! # async fn run() -> Result<(), cinelog_client::ApiError> {
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! client.login("ada@example.com", "hunter2").await?;
//! let page = client.list_movies(&MovieFilters::default()).await?;
//! println!("{} movies", page.items.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, RefreshCoordinator, SessionRefresh};
pub use config::ClientConfig;
pub use errors::{ApiError, ApiErrorKind};
