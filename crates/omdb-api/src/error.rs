//! `OmdbError` - errors returned by OMDb API operations.

use reqwest::StatusCode;

/// Error text OMDb returns for a missing or rejected API key.
pub const INVALID_API_KEY: &str = "Invalid API key!";

/// Error text OMDb returns when a title or search term has no match.
pub const MOVIE_NOT_FOUND: &str = "Movie not found!";

/// Error text OMDb returns when an IMDb ID fails its format check.
pub const INCORRECT_IMDB_ID: &str = "Incorrect IMDb ID.";

/// Errors returned by [`crate::OmdbClient`] operations.
///
/// The three sentinel variants (`InvalidApiKey`, `MovieNotFound`,
/// `IncorrectImdbId`) display exactly as the remote API words them.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum OmdbError {
    /// The request could not be sent or its body could not be read.
    #[error("OMDb request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("failed to decode OMDb response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API key is missing or was rejected.
    #[error("{}", INVALID_API_KEY)]
    InvalidApiKey,

    /// No title matched the request.
    #[error("{}", MOVIE_NOT_FOUND)]
    MovieNotFound,

    /// The IMDb ID is malformed.
    #[error("{}", INCORRECT_IMDB_ID)]
    IncorrectImdbId,

    /// Any other error reported in the `Error` field.
    #[error("{0}")]
    Api(String),

    /// Non-success HTTP status without an `Error` field in the body.
    #[error("OMDb API error (HTTP {status}): {body}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },
}

/// Comparable category of an [`OmdbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorKind {
    /// See [`OmdbError::Transport`].
    Transport,
    /// See [`OmdbError::Decode`].
    Decode,
    /// See [`OmdbError::InvalidApiKey`].
    InvalidApiKey,
    /// See [`OmdbError::MovieNotFound`].
    MovieNotFound,
    /// See [`OmdbError::IncorrectImdbId`].
    IncorrectImdbId,
    /// See [`OmdbError::Api`].
    Api,
    /// See [`OmdbError::Status`].
    Status,
}

impl OmdbError {
    /// Maps the text of the API's `Error` field to an error value.
    ///
    /// This is the only place that knows the remote wording.
    #[must_use]
    pub fn from_api_message(message: &str) -> Self {
        match message {
            INVALID_API_KEY => Self::InvalidApiKey,
            MOVIE_NOT_FOUND => Self::MovieNotFound,
            INCORRECT_IMDB_ID => Self::IncorrectImdbId,
            other => Self::Api(String::from(other)),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::InvalidApiKey => ErrorKind::InvalidApiKey,
            Self::MovieNotFound => ErrorKind::MovieNotFound,
            Self::IncorrectImdbId => ErrorKind::IncorrectImdbId,
            Self::Api(_) => ErrorKind::Api,
            Self::Status { .. } => ErrorKind::Status,
        }
    }

    /// Returns `true` for the three recognized remote failures.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey | Self::MovieNotFound | Self::IncorrectImdbId
        )
    }
}
