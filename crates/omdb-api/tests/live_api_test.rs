//! Tests against the real OMDb endpoint.
//!
//! Ignored by default. Run with `OMDBAPI_KEY` set:
//! `cargo test -p omdb-api -- --ignored`
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use omdb_api::{ApiParam, ErrorKind, MediaType, OmdbApi, OmdbClient};

const TITLES: [&str; 4] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "The Good, the Bad and the Ugly",
];

const IDS: [&str; 4] = ["tt0111161", "tt0068646", "tt0468569", "tt0060196"];

fn api_key() -> String {
    std::env::var("OMDBAPI_KEY").unwrap_or_default()
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_invalid_api_key() {
    // Arrange
    let client = OmdbClient::new("INVALID_API_KEY");

    // Act
    let title = client.title("MOVIE_TITLE", &[]).await;
    let id = client.id("tt0111161", &[]).await;
    let search = client.search("Godfather", &[]).await;
    let poster = client.poster("tt0111161").await;

    // Assert
    assert_eq!(title.unwrap_err().kind(), ErrorKind::InvalidApiKey);
    assert_eq!(id.unwrap_err().kind(), ErrorKind::InvalidApiKey);
    assert_eq!(search.unwrap_err().kind(), ErrorKind::InvalidApiKey);
    assert_eq!(poster.unwrap_err().kind(), ErrorKind::InvalidApiKey);
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_valid_movie_title() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act & Assert
    for title in TITLES {
        let result = client.title(title, &[]).await;
        assert!(result.is_ok(), "title '{title}': {result:?}");
    }
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_invalid_movie_title() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client.title("INVALID_MOVIE_TITLE", &[]).await;

    // Assert
    assert_eq!(result.unwrap_err().kind(), ErrorKind::MovieNotFound);
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_valid_movie_id() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act & Assert
    for id in IDS {
        let result = client.id(id, &[]).await;
        assert!(result.is_ok(), "id '{id}': {result:?}");
    }
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_invalid_movie_id() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client.id("INVALID_MOVIE_ID", &[]).await;

    // Assert
    assert_eq!(result.unwrap_err().kind(), ErrorKind::IncorrectImdbId);
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_search_valid_movie() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client.search("Shawshank", &[]).await.unwrap();

    // Assert
    assert!(!result.search.is_empty());
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_search_invalid_movie() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client.search("INVALID_MOVIE_TITLE", &[]).await;

    // Assert
    assert_eq!(result.unwrap_err().kind(), ErrorKind::MovieNotFound);
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_search_with_param() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client
        .search("Godfather", &[ApiParam::new("type", "movie")])
        .await
        .unwrap();

    // Assert
    for movie in &result.search {
        assert_eq!(movie.media_type, "movie");
    }
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_search_with_multi_param() {
    // Arrange
    let client = OmdbClient::new(api_key());
    let params = [
        ApiParam::year(1972),
        ApiParam::media_type(MediaType::Movie),
    ];

    // Act
    let result = client.search("Godfather", &params).await.unwrap();

    // Assert
    for movie in &result.search {
        assert_eq!(movie.year, "1972");
        assert_eq!(movie.media_type, "movie");
    }
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_poster_valid_movie_id() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act & Assert
    for id in IDS {
        let result = client.poster(id).await;
        assert!(result.is_ok(), "poster '{id}': {result:?}");
    }
}

#[tokio::test]
#[ignore = "requires network access and OMDBAPI_KEY"]
async fn test_poster_invalid_movie_id() {
    // Arrange
    let client = OmdbClient::new(api_key());

    // Act
    let result = client.poster("INVALID_MOVIE_ID").await;

    // Assert
    assert_eq!(result.unwrap_err().kind(), ErrorKind::IncorrectImdbId);
}
