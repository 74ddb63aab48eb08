//! Movie catalog endpoints

use cinelog_domain::{Movie, MovieFilters, MoviePage, NewMovie, UpdateMovie};
use tracing::{debug, info};

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::http::{FormField, FormValue};

impl ApiClient {
    /// List movies, paginated and filtered.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn list_movies(&self, filters: &MovieFilters) -> Result<MoviePage, ApiError> {
        let query = filters.to_query();
        debug!(params = query.len(), "listing movies");
        self.get_with_query("/movies", query).await
    }

    /// Fetch a single movie by id.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn movie(&self, id: &str) -> Result<Movie, ApiError> {
        self.get(&format!("/movies/{id}")).await
    }

    /// Create a movie. Sent as multipart form data because the payload may
    /// carry a cover image.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        let created: Movie = self.post_multipart("/movies", movie_form(movie)).await?;
        info!(movie = %created.id, "movie created");
        Ok(created)
    }

    /// Partially update a movie.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn update_movie(&self, id: &str, update: &UpdateMovie) -> Result<Movie, ApiError> {
        self.put(&format!("/movies/{id}"), update).await
    }

    /// Delete a movie.
    ///
    /// # Errors
    /// Rejects with a normalized [`ApiError`] on any failure.
    pub async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/movies/{id}")).await?;
        info!(movie = %id, "movie deleted");
        Ok(())
    }
}

/// Render a [`NewMovie`] as the multipart field set the backend expects.
///
/// `genreIds` is a repeated field, one entry per genre, matching the form
/// encoding the browser client used.
fn movie_form(movie: &NewMovie) -> Vec<FormField> {
    let mut fields = vec![text_field("title", movie.title.clone())];

    if let Some(original_title) = &movie.original_title {
        fields.push(text_field("originalTitle", original_title.clone()));
    }
    if let Some(synopsis) = &movie.synopsis {
        fields.push(text_field("synopsis", synopsis.clone()));
    }
    if let Some(trailer_url) = &movie.trailer_url {
        fields.push(text_field("trailerUrl", trailer_url.clone()));
    }
    fields.push(text_field("duration", movie.duration.to_string()));
    if let Some(release_date) = movie.release_date {
        fields.push(text_field("releaseDate", release_date.to_string()));
    }
    fields.push(text_field("ageRatingId", movie.age_rating_id.clone()));
    fields.push(text_field("status", movie.status.as_str().to_string()));
    for genre_id in &movie.genre_ids {
        fields.push(text_field("genreIds", genre_id.clone()));
    }
    if let Some(cover) = &movie.cover {
        fields.push(FormField {
            name: "cover".into(),
            value: FormValue::File {
                file_name: cover.file_name.clone(),
                content_type: cover.content_type.clone(),
                bytes: cover.bytes.clone(),
            },
        });
    }

    fields
}

fn text_field(name: &str, value: String) -> FormField {
    FormField { name: name.into(), value: FormValue::Text(value) }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use cinelog_domain::{CoverImage, MovieStatus};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig { base_url: server.uri(), ..ClientConfig::default() };
        ApiClient::new(config).unwrap()
    }

    fn movie_body(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "userId": "u1",
            "title": "Arrival",
            "duration": 116,
            "status": "RELEASED"
        })
    }

    #[tokio::test]
    async fn list_movies_sends_camel_case_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("page", "2"))
            .and(query_param("minDuration", "90"))
            .and(query_param("genreId", "g1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [movie_body("m1")],
                "totalPages": 5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let filters = MovieFilters {
            page: Some(2),
            min_duration: Some(90),
            genre_id: Some("g1".into()),
            ..MovieFilters::default()
        };
        let page = client.list_movies(&filters).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 5);
    }

    #[tokio::test]
    async fn movie_fetches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_body("m1")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let movie = client.movie("m1").await.unwrap();
        assert_eq!(movie.title, "Arrival");
    }

    #[tokio::test]
    async fn create_movie_sends_the_full_multipart_field_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(201).set_body_json(movie_body("m2")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let new_movie = NewMovie {
            title: "Arrival".into(),
            original_title: None,
            synopsis: Some("Aliens arrive.".into()),
            trailer_url: None,
            duration: 116,
            release_date: NaiveDate::from_ymd_opt(2016, 11, 10),
            age_rating_id: "ar1".into(),
            status: MovieStatus::Released,
            genre_ids: vec!["g1".into(), "g2".into()],
            cover: Some(CoverImage {
                file_name: "cover.jpg".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
        };

        let created = client.create_movie(&new_movie).await.unwrap();
        assert_eq!(created.id, "m2");

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        for name in
            ["title", "synopsis", "duration", "releaseDate", "ageRatingId", "status", "cover"]
        {
            assert!(body.contains(&format!("name=\"{name}\"")), "missing field {name}");
        }
        // Repeated genreIds entries, one per genre.
        assert_eq!(body.matches("name=\"genreIds\"").count(), 2);
        assert!(!body.contains("name=\"originalTitle\""));
    }

    #[tokio::test]
    async fn update_movie_puts_partial_json() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/movies/m1"))
            .and(wiremock::matchers::body_json(serde_json::json!({ "duration": 97 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_body("m1")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let update = UpdateMovie { duration: Some(97), ..UpdateMovie::default() };
        client.update_movie("m1", &update).await.unwrap();
    }

    #[tokio::test]
    async fn delete_movie_hits_the_resource_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/movies/m1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.delete_movie("m1").await.unwrap();
    }
}
