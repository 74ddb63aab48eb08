//! Movie catalog types
//!
//! Covers the movie entity itself plus the payloads the catalog endpoints
//! accept: list filters, the multipart create payload, and the partial JSON
//! update payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{AgeRating, Genre};

/// Publication status of a catalog entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieStatus {
    Released,
    Upcoming,
    Draft,
}

impl MovieStatus {
    /// Wire representation, as sent in query strings and form fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Released => "RELEASED",
            Self::Upcoming => "UPCOMING",
            Self::Draft => "DRAFT",
        }
    }
}

/// Genre attached to a movie (join row with the embedded genre).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieGenre {
    pub id: String,
    pub genre: Genre,
}

/// Movie as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<AgeRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<MovieGenre>,
}

/// One page of the movie listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub items: Vec<Movie>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// Query filters accepted by `GET /movies`.
///
/// Every field is optional; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilters {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<MovieStatus>,
    pub age_rating_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieFilters {
    /// Render the filters as query pairs in the backend's camelCase naming.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".into(), page.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".into(), search.clone()));
        }
        if let Some(min) = self.min_duration {
            query.push(("minDuration".into(), min.to_string()));
        }
        if let Some(max) = self.max_duration {
            query.push(("maxDuration".into(), max.to_string()));
        }
        if let Some(start) = self.start_date {
            query.push(("startDate".into(), start.to_string()));
        }
        if let Some(end) = self.end_date {
            query.push(("endDate".into(), end.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".into(), status.as_str().into()));
        }
        if let Some(id) = &self.age_rating_id {
            query.push(("ageRatingId".into(), id.clone()));
        }
        if let Some(id) = &self.genre_id {
            query.push(("genreId".into(), id.clone()));
        }
        query
    }
}

/// Cover image attached to a [`NewMovie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Payload for `POST /movies` (sent as multipart form data).
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub original_title: Option<String>,
    pub synopsis: Option<String>,
    pub trailer_url: Option<String>,
    /// Runtime in minutes.
    pub duration: i32,
    pub release_date: Option<NaiveDate>,
    pub age_rating_id: String,
    pub status: MovieStatus,
    pub genre_ids: Vec<String>,
    pub cover: Option<CoverImage>,
}

/// Partial update payload for `PUT /movies/{id}`.
///
/// Unset fields are omitted from the JSON body and left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_rating_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<String>>,
}
