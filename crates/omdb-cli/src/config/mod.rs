//! Application configuration module.
//!
//! Reads the TOML config file holding the OMDb API key and request
//! settings, and resolves which API key a command should use.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{API_KEY_ENV, AppConfig};
pub use paths::resolve_config_path;
