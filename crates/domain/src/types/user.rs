//! Account types
//!
//! User profile as returned by the auth and user endpoints.

use serde::{Deserialize, Serialize};

/// Authenticated user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Envelope used by auth and user-creation responses (`{ "user": { .. } }`).
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}
