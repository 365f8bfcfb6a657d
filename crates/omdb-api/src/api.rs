//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use url::Url;

use super::error::OmdbError;
use super::params::ApiParam;
use super::types::{Movie, SearchResult};

/// OMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Looks up a single entry by title (`t=`).
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::MovieNotFound`] when nothing matches,
    /// [`OmdbError::InvalidApiKey`] when the key is rejected, or a transport,
    /// decode or API error otherwise.
    async fn title(&self, name: &str, params: &[ApiParam]) -> Result<Movie, OmdbError>;

    /// Looks up a single entry by IMDb ID (`i=`).
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::IncorrectImdbId`] for a malformed ID,
    /// [`OmdbError::InvalidApiKey`] when the key is rejected, or a transport,
    /// decode or API error otherwise.
    async fn id(&self, imdb_id: &str, params: &[ApiParam]) -> Result<Movie, OmdbError>;

    /// Searches titles (`s=`).
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::MovieNotFound`] when nothing matches,
    /// [`OmdbError::InvalidApiKey`] when the key is rejected, or a transport,
    /// decode or API error otherwise.
    async fn search(&self, term: &str, params: &[ApiParam]) -> Result<SearchResult, OmdbError>;

    /// Resolves the poster URL of an entry. `None` means the entry has no poster.
    ///
    /// # Errors
    ///
    /// Same as [`LocalOmdbApi::id`]; a `Poster` value that is not a URL is a
    /// decode error.
    async fn poster(&self, imdb_id: &str) -> Result<Option<Url>, OmdbError>;
}
