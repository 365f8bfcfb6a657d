//! Client library for the OMDb movie metadata API.
//!
//! Looks up entries by title or IMDb ID, searches the catalog and resolves
//! poster images. Error responses are mapped to [`OmdbError`], with the
//! invalid-key, not-found and bad-ID cases as distinct variants.

mod api;
mod client;
mod error;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalOmdbApi, OmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{OmdbClient, OmdbClientBuilder};
pub use error::{ErrorKind, INCORRECT_IMDB_ID, INVALID_API_KEY, MOVIE_NOT_FOUND, OmdbError};
pub use params::{ApiParam, MediaType, Plot};
pub use types::{Movie, Rating, SearchResult};
pub use url::Url;
