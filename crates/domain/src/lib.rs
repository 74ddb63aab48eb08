//! # Cinelog Domain
//!
//! Wire-level domain types for the Cinelog movie catalog API.
//!
//! This crate contains:
//! - Catalog data types (Movie, Genre, AgeRating, etc.)
//! - Account types (User)
//! - Request payloads (filters, create/update payloads)
//!
//! ## Architecture
//! - No dependencies on other Cinelog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod types;

// Re-export commonly used items
pub use types::*;
