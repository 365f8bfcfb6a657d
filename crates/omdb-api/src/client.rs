//! `OmdbClient` - OMDb API client implementation.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::OmdbApi;
use super::error::OmdbError;
use super::params::ApiParam;
use super::types::{Movie, ResponseStatus, SearchResult};

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "apikey";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// OMDb API client.
///
/// Holds no mutable state; one client can serve concurrent callers.
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: String,
    /// API key sent as `apikey` on every request.
    api_key: String,
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builder for `OmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (default: `omdb-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a per-request timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let base_url = self
            .base_url
            .map_or_else(|| String::from(DEFAULT_BASE_URL), String::from);

        let mut http_client = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }
        let http_client = http_client
            .build()
            .context("failed to build HTTP client")?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a client for the public OMDb endpoint.
    ///
    /// The key is not checked here; a bad key surfaces as
    /// [`OmdbError::InvalidApiKey`] on the first request. Uses the same
    /// defaults as [`OmdbClient::builder`].
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be initialised (TLS backend or
    /// system resolver failure). Use [`OmdbClient::builder`] to get that
    /// failure as an error instead.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("failed to build HTTP client")
    }

    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Sends one GET request with the API key, the primary parameter and
    /// `params` in that order, then decodes the response.
    #[instrument(skip_all)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        primary: (&str, &str),
        params: &[ApiParam],
    ) -> Result<T, OmdbError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len().saturating_add(2));
        query.push((API_KEY_PARAM, self.api_key.as_str()));
        query.push(primary);
        query.extend(params.iter().map(ApiParam::as_pair));

        let request = self
            .http_client
            .get(self.base_url.as_str())
            .query(&query)
            .build()?;

        tracing::debug!(url = %redact_api_key(request.url()), "OMDb API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, body_len = body.len(), "OMDb API response");

        decode_response(status, &body)
    }

    /// Downloads the image behind a poster URL.
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::Transport`] if the request fails and
    /// [`OmdbError::Status`] on a non-success HTTP status.
    #[instrument(skip_all)]
    pub async fn poster_image(&self, url: &Url) -> Result<Vec<u8>, OmdbError> {
        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            return Err(OmdbError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(%url, len = bytes.len(), "Poster image downloaded");
        Ok(bytes.to_vec())
    }
}

impl OmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn title(&self, name: &str, params: &[ApiParam]) -> Result<Movie, OmdbError> {
        self.get_json(("t", name), params).await
    }

    #[instrument(skip_all)]
    async fn id(&self, imdb_id: &str, params: &[ApiParam]) -> Result<Movie, OmdbError> {
        self.get_json(("i", imdb_id), params).await
    }

    #[instrument(skip_all)]
    async fn search(&self, term: &str, params: &[ApiParam]) -> Result<SearchResult, OmdbError> {
        self.get_json(("s", term), params).await
    }

    #[instrument(skip_all)]
    async fn poster(&self, imdb_id: &str) -> Result<Option<Url>, OmdbError> {
        let movie: Movie = self.get_json(("i", imdb_id), &[]).await?;
        movie
            .poster_url()
            .map(Url::parse)
            .transpose()
            .map_err(|e| {
                OmdbError::Decode(serde::de::Error::custom(format!(
                    "invalid Poster URL: {e}"
                )))
            })
    }
}

/// Decodes a response body.
///
/// A populated `Error` field wins over the HTTP status, since OMDb answers
/// a rejected key with HTTP 401 and a JSON error body.
///
/// Records are only read from JSON objects; serde would otherwise accept an
/// array and fill the defaulted fields positionally.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, OmdbError> {
    let value = serde_json::from_str::<Value>(body);

    if let Ok(value) = &value
        && let Ok(envelope) = ResponseStatus::deserialize(value)
        && let Some(message) = envelope.error_message()
    {
        return Err(OmdbError::from_api_message(message));
    }

    if !status.is_success() {
        return Err(OmdbError::Status {
            status,
            body: String::from(body),
        });
    }

    let value = value?;
    if !value.is_object() {
        return Err(OmdbError::Decode(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }

    Ok(T::deserialize(value)?)
}

/// Returns the URL with the API key value masked, for logging.
fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == API_KEY_PARAM {
                String::from("***")
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
