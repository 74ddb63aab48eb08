//! Catalog reference data
//!
//! Genres and age ratings are small server-managed lookup tables.

use serde::{Deserialize, Serialize};

/// Movie genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Age rating entry.
///
/// `code` is the numeric minimum age (0 for a free rating).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgeRating {
    pub id: String,
    pub code: i32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
