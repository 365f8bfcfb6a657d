//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the XDG config home.
const APP_DIR: &str = "omdb";

/// Resolves the config file path.
///
/// - If `dir` is `Some`, returns `{dir}/config.toml`.
/// - Otherwise `$XDG_CONFIG_HOME/omdb/config.toml`, falling back to
///   `$HOME/.config/omdb/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let config_home = config_home(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )?;
    Ok(config_home.join(APP_DIR).join(CONFIG_FILE))
}

/// Picks the base config directory.
///
/// A relative or empty `XDG_CONFIG_HOME` is ignored, as the XDG base
/// directory rules require.
fn config_home(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|p| p.is_absolute()) {
        return Ok(xdg);
    }
    match home.filter(|p| !p.as_os_str().is_empty()) {
        Some(home) => Ok(home.join(".config")),
        None => bail!("cannot locate config directory: HOME and XDG_CONFIG_HOME are not set"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/omdb-config");

        // Act
        let path = resolve_config_path(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/omdb-config/config.toml"));
    }

    #[test]
    fn test_resolve_default_ends_with_app_file() {
        // Arrange & Act
        let path = resolve_config_path(None).unwrap();

        // Assert
        assert!(path.ends_with("omdb/config.toml"));
    }

    #[test]
    fn test_config_home_prefers_xdg() {
        // Arrange & Act
        let base = config_home(
            Some(PathBuf::from("/xdg/config")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();

        // Assert
        assert_eq!(base, PathBuf::from("/xdg/config"));
    }

    #[test]
    fn test_config_home_ignores_relative_xdg() {
        // Arrange & Act
        let relative = config_home(
            Some(PathBuf::from("relative/config")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        let empty = config_home(Some(PathBuf::new()), Some(PathBuf::from("/home/user"))).unwrap();

        // Assert
        assert_eq!(relative, PathBuf::from("/home/user/.config"));
        assert_eq!(empty, PathBuf::from("/home/user/.config"));
    }

    #[test]
    fn test_config_home_falls_back_to_home() {
        // Arrange & Act
        let base = config_home(None, Some(PathBuf::from("/home/user"))).unwrap();

        // Assert
        assert_eq!(base, PathBuf::from("/home/user/.config"));
    }

    #[test]
    fn test_config_home_missing() {
        // Arrange & Act
        let result = config_home(None, None);

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("cannot locate config directory")
        );
    }
}
