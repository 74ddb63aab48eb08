//! Domain types and models
//!
//! All types mirror the backend's JSON contract; field names are camelCase on
//! the wire.

pub mod catalog;
pub mod movie;
pub mod user;

pub use catalog::{AgeRating, Genre};
pub use movie::{
    CoverImage, Movie, MovieFilters, MovieGenre, MoviePage, MovieStatus, NewMovie, UpdateMovie,
};
pub use user::{User, UserEnvelope};
