//! OMDb request parameter types.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// One extra query-string parameter appended to a request.
///
/// Names are sent as-is; a name that repeats the operation's primary
/// parameter (e.g. `t` for a title lookup) is sent as a second pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiParam {
    /// Query parameter name.
    pub name: String,
    /// Query parameter value.
    pub value: String,
}

impl ApiParam {
    /// Creates a parameter from a raw name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Year of release (`y`).
    #[must_use]
    pub fn year(year: u16) -> Self {
        Self::new("y", year.to_string())
    }

    /// Result type filter (`type`).
    #[must_use]
    pub fn media_type(media_type: MediaType) -> Self {
        Self::new("type", media_type.as_str())
    }

    /// Plot length (`plot`).
    #[must_use]
    pub fn plot(plot: Plot) -> Self {
        Self::new("plot", plot.as_str())
    }

    /// Search result page, 1-based (`page`).
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self::new("page", page.to_string())
    }

    /// Returns the parameter as a query pair.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (self.name.as_str(), self.value.as_str())
    }
}

impl FromStr for ApiParam {
    type Err = anyhow::Error;

    /// Parses `name=value`. The value may itself contain `=`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = s
            .split_once('=')
            .with_context(|| format!("expected name=value, got: {s}"))?;
        if name.is_empty() {
            bail!("parameter name is empty: {s}");
        }
        Ok(Self::new(name, value))
    }
}

/// Kind of catalog entry accepted by the `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Feature film.
    Movie,
    /// TV series.
    Series,
    /// Single episode of a series.
    Episode,
    /// Video game.
    Game,
}

impl MediaType {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
            Self::Game => "game",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            "episode" => Ok(Self::Episode),
            "game" => Ok(Self::Game),
            other => bail!("unknown media type: {other} (expected movie, series, episode, game)"),
        }
    }
}

/// Plot length accepted by the `plot` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plot {
    /// One-paragraph summary (API default).
    #[default]
    Short,
    /// Full plot.
    Full,
}

impl Plot {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            other => bail!("unknown plot length: {other} (expected short, full)"),
        }
    }
}
