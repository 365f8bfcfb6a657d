#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_title_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["title", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--param"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_poster_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["poster", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_title_missing_name() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_id_missing_imdb_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--imdb-id"));
}

#[test]
fn test_search_invalid_type() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.args(["search", "--query", "Godfather", "--type", "film"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown media type"));
}

#[test]
fn test_missing_api_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.env_remove("OMDBAPI_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["title", "--name", "The Godfather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OMDb API key is not set"));
}

#[test]
fn test_invalid_config_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[omdb\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("omdb");
    cmd.env_remove("OMDBAPI_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["id", "--imdb-id", "tt0068646"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
