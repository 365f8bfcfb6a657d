//! OMDb API response types.

use serde::Deserialize;

/// Poster value OMDb uses when no image is available.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

// --- Title / ID lookup ---

/// A catalog entry returned by `t=` and `i=` lookups.
///
/// Search entries decode into the same type with only `title`, `year`,
/// `imdb_id`, `media_type` and `poster` populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// Title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year, or a range such as `2008–2013` for series.
    #[serde(rename = "Year")]
    pub year: String,
    /// IMDb identifier (`tt` + digits).
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// `movie`, `series`, `episode` or `game`.
    #[serde(rename = "Type")]
    pub media_type: String,
    /// Poster image URL or `N/A`.
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Content rating (e.g. `R`).
    #[serde(rename = "Rated")]
    pub rated: String,
    /// Release date (e.g. `24 Mar 1972`).
    #[serde(rename = "Released")]
    pub released: String,
    /// Runtime (e.g. `175 min`).
    #[serde(rename = "Runtime")]
    pub runtime: String,
    /// Comma-separated genres.
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Director(s).
    #[serde(rename = "Director")]
    pub director: String,
    /// Writer(s).
    #[serde(rename = "Writer")]
    pub writer: String,
    /// Main cast.
    #[serde(rename = "Actors")]
    pub actors: String,
    /// Plot text.
    #[serde(rename = "Plot")]
    pub plot: String,
    /// Languages.
    #[serde(rename = "Language")]
    pub language: String,
    /// Countries.
    #[serde(rename = "Country")]
    pub country: String,
    /// Awards summary.
    #[serde(rename = "Awards")]
    pub awards: String,
    /// Ratings from individual sources.
    #[serde(rename = "Ratings")]
    pub ratings: Vec<Rating>,
    /// Metacritic score.
    #[serde(rename = "Metascore")]
    pub metascore: String,
    /// IMDb rating (e.g. `9.2`).
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// IMDb vote count (e.g. `2,100,000`).
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    /// DVD release date.
    #[serde(rename = "DVD")]
    pub dvd: String,
    /// Box office gross.
    #[serde(rename = "BoxOffice")]
    pub box_office: String,
    /// Production company.
    #[serde(rename = "Production")]
    pub production: String,
    /// Official website.
    #[serde(rename = "Website")]
    pub website: String,
}

impl Movie {
    /// Returns the poster URL, or `None` when the API reports `N/A`.
    #[must_use]
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NOT_AVAILABLE {
            None
        } else {
            Some(poster)
        }
    }
}

/// A single rating entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// Rating source (e.g. `Rotten Tomatoes`).
    #[serde(rename = "Source")]
    pub source: String,
    /// Rating value (e.g. `97%`).
    #[serde(rename = "Value")]
    pub value: String,
}

// --- Search ---

/// Response from an `s=` search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Matching entries in API order.
    #[serde(rename = "Search")]
    pub search: Vec<Movie>,
    /// Total number of matches across all pages (numeric string).
    #[serde(rename = "totalResults")]
    pub total_results: String,
}

impl SearchResult {
    /// Parses `total_results`, returning `None` if it is not a number.
    #[must_use]
    pub fn total(&self) -> Option<u32> {
        self.total_results.trim().parse().ok()
    }
}

// --- Status envelope ---

/// Failure envelope. Only `Error` is read; `Response` is `"False"` whenever
/// it is set.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseStatus {
    /// Error text.
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl ResponseStatus {
    /// Returns the error text if the API signalled a failure.
    pub(crate) fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
