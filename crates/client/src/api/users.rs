//! Account creation endpoint

use cinelog_domain::{User, UserEnvelope};
use serde::Serialize;
use tracing::info;

use super::client::ApiClient;
use crate::errors::ApiError;

#[derive(Serialize)]
struct CreateUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Register a new account.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure (e.g., an email
    /// already in use surfaces the server's message).
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let envelope: UserEnvelope =
            self.post("/users", &CreateUserRequest { name, email, password }).await?;
        info!(user = %envelope.user.id, "account created");
        Ok(envelope.user)
    }
}
