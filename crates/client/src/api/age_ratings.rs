//! Age rating lookup endpoint

use cinelog_domain::AgeRating;

use super::client::ApiClient;
use crate::errors::ApiError;

impl ApiClient {
    /// List all age ratings.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn list_age_ratings(&self) -> Result<Vec<AgeRating>, ApiError> {
        self.get("/age-rating").await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn list_age_ratings_decodes_the_lookup_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/age-rating"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "ar1", "code": 0, "label": "L", "description": "General audiences" },
                { "id": "ar2", "code": 12, "label": "12" }
            ])))
            .mount(&server)
            .await;

        let config = ClientConfig { base_url: server.uri(), ..ClientConfig::default() };
        let client = ApiClient::new(config).unwrap();

        let ratings = client.list_age_ratings().await.unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].label, "L");
        assert_eq!(ratings[1].description, None);
    }
}
