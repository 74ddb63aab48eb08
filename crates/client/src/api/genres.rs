//! Genre lookup endpoint

use cinelog_domain::Genre;

use super::client::ApiClient;
use crate::errors::ApiError;

impl ApiClient {
    /// List all genres.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get("/genres").await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn list_genres_decodes_the_lookup_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "g1", "name": "Sci-Fi" },
                { "id": "g2", "name": "Drama" }
            ])))
            .mount(&server)
            .await;

        let config = ClientConfig { base_url: server.uri(), ..ClientConfig::default() };
        let client = ApiClient::new(config).unwrap();

        let genres = client.list_genres().await.unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].name, "Sci-Fi");
    }
}
