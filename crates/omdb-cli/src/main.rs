//! omdb - OMDb movie metadata CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use omdb_api::{ApiParam, MediaType, Movie, OmdbApi, OmdbClient, Plot};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{API_KEY_ENV, AppConfig, resolve_config_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// OMDb API key (overrides OMDBAPI_KEY and config.toml).
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Look up an entry by title.
    Title(TitleArgs),
    /// Look up an entry by IMDb ID.
    Id(IdArgs),
    /// Search entries by title fragment.
    Search(SearchArgs),
    /// Resolve (and optionally download) the poster of an entry.
    Poster(PosterArgs),
}

/// Arguments for the `title` subcommand.
#[derive(clap::Args)]
struct TitleArgs {
    /// Title to look up (e.g. "The Godfather").
    #[arg(long, required = true)]
    name: String,
    /// Year of release.
    #[arg(long)]
    year: Option<u16>,
    /// Entry type: movie, series, episode, game.
    #[arg(long = "type")]
    media_type: Option<MediaType>,
    /// Plot length: short, full.
    #[arg(long)]
    plot: Option<Plot>,
    /// Extra query parameter as name=value (repeatable).
    #[arg(long = "param")]
    params: Vec<ApiParam>,
}

/// Arguments for the `id` subcommand.
#[derive(clap::Args)]
struct IdArgs {
    /// IMDb ID (e.g. "tt0068646").
    #[arg(long, required = true)]
    imdb_id: String,
    /// Plot length: short, full.
    #[arg(long)]
    plot: Option<Plot>,
    /// Extra query parameter as name=value (repeatable).
    #[arg(long = "param")]
    params: Vec<ApiParam>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search term (e.g. "Godfather").
    #[arg(long, required = true)]
    query: String,
    /// Year of release.
    #[arg(long)]
    year: Option<u16>,
    /// Entry type: movie, series, episode, game.
    #[arg(long = "type")]
    media_type: Option<MediaType>,
    /// Result page (1-based).
    #[arg(long)]
    page: Option<u32>,
    /// Extra query parameter as name=value (repeatable).
    #[arg(long = "param")]
    params: Vec<ApiParam>,
}

/// Arguments for the `poster` subcommand.
#[derive(clap::Args)]
struct PosterArgs {
    /// IMDb ID (e.g. "tt0068646").
    #[arg(long, required = true)]
    imdb_id: String,
    /// Write the poster image to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Builds the request parameter list: typed options first, then `--param` values.
fn collect_params(
    year: Option<u16>,
    media_type: Option<MediaType>,
    plot: Option<Plot>,
    page: Option<u32>,
    extra: &[ApiParam],
) -> Vec<ApiParam> {
    year.map(ApiParam::year)
        .into_iter()
        .chain(media_type.map(ApiParam::media_type))
        .chain(plot.map(ApiParam::plot))
        .chain(page.map(ApiParam::page))
        .chain(extra.iter().cloned())
        .collect()
}

/// Builds an `OmdbClient` from CLI args, the environment and `config.toml`.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, no API key is
/// available, or the HTTP client fails to build.
fn build_client(cli: &Cli) -> Result<OmdbClient> {
    let config_path =
        resolve_config_path(cli.dir.as_deref()).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let env_key = std::env::var(API_KEY_ENV).ok();
    let api_key = config.resolve_api_key(cli.api_key.as_deref(), env_key.as_deref())?;

    let mut builder = OmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("failed to build API client")
}

/// Logs the fields of a single entry.
fn log_movie(movie: &Movie) {
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Year: {}", movie.year);
    tracing::info!("IMDb ID: {}", movie.imdb_id);
    tracing::info!("Type: {}", movie.media_type);
    if !movie.rated.is_empty() {
        tracing::info!("Rated: {}", movie.rated);
        tracing::info!("Released: {}", movie.released);
        tracing::info!("Runtime: {}", movie.runtime);
        tracing::info!("Genre: {}", movie.genre);
        tracing::info!("Director: {}", movie.director);
        tracing::info!("Actors: {}", movie.actors);
        tracing::info!("IMDb Rating: {} ({} votes)", movie.imdb_rating, movie.imdb_votes);
        for rating in &movie.ratings {
            tracing::info!("  {}: {}", rating.source, rating.value);
        }
        tracing::info!("Plot: {}", movie.plot);
    }
    tracing::info!("Poster: {}", movie.poster_url().unwrap_or("-"));
}

/// Runs the `title` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_title(client: &OmdbClient, args: &TitleArgs) -> Result<()> {
    let params = collect_params(args.year, args.media_type, args.plot, None, &args.params);
    let movie = client
        .title(&args.name, &params)
        .await
        .with_context(|| format!("failed to look up title: {}", args.name))?;
    log_movie(&movie);
    Ok(())
}

/// Runs the `id` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_id(client: &OmdbClient, args: &IdArgs) -> Result<()> {
    let params = collect_params(None, None, args.plot, None, &args.params);
    let movie = client
        .id(&args.imdb_id, &params)
        .await
        .with_context(|| format!("failed to look up IMDb ID: {}", args.imdb_id))?;
    log_movie(&movie);
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_search(client: &OmdbClient, args: &SearchArgs) -> Result<()> {
    let params = collect_params(args.year, args.media_type, None, args.page, &args.params);
    let result = client
        .search(&args.query, &params)
        .await
        .with_context(|| format!("failed to search: {}", args.query))?;

    tracing::info!("Total results: {}", result.total_results);
    tracing::info!("IMDb ID\t\tYear\tType\tTitle");
    for movie in &result.search {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            movie.imdb_id,
            movie.year,
            movie.media_type,
            movie.title,
        );
    }
    tracing::info!("Shown: {} results", result.search.len());

    Ok(())
}

/// Runs the `poster` subcommand.
///
/// # Errors
///
/// Returns an error if the API request, the image download, or the file
/// write fails.
#[instrument(skip_all)]
async fn run_poster(client: &OmdbClient, args: &PosterArgs) -> Result<()> {
    let poster = client
        .poster(&args.imdb_id)
        .await
        .with_context(|| format!("failed to resolve poster: {}", args.imdb_id))?;

    let Some(url) = poster else {
        tracing::info!("No poster available for {}", args.imdb_id);
        return Ok(());
    };
    tracing::info!("Poster: {url}");

    if let Some(ref output) = args.output {
        let bytes = client
            .poster_image(&url)
            .await
            .context("failed to download poster image")?;
        std::fs::write(output, &bytes)
            .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), output.display());
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    match cli.command {
        Commands::Title(ref args) => run_title(&client, args).await,
        Commands::Id(ref args) => run_id(&client, args).await,
        Commands::Search(ref args) => run_search(&client, args).await,
        Commands::Poster(ref args) => run_poster(&client, args).await,
    }
}
