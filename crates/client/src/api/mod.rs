//! Authenticated API client for the Cinelog backend
//!
//! This module provides the HTTP client core and the typed endpoint surface
//! built on it.
//!
//! # Architecture
//!
//! - Requests go through [`crate::http::HttpTransport`] (no direct reqwest)
//! - Cookie-based session, forwarded automatically on every call
//! - A 401 triggers a single-flight session refresh and one replay of the
//!   original request; every other failure is normalized and surfaced as-is
//! - Endpoint wrappers (auth, users, movies, genres, age ratings) are thin
//!   typed layers over the core

pub mod age_ratings;
pub mod auth;
pub mod client;
pub mod genres;
pub mod movies;
pub mod refresh;
pub mod users;

pub use client::{ApiClient, ApiClientBuilder};
pub use refresh::{RefreshCoordinator, SessionRefresh};
