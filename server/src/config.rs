//! Server configuration loaded from environment variables.
//!
//! `.env` is read by `main` before this runs, so values there behave like
//! real environment variables. Leptos build settings (`LEPTOS_*`) are read
//! separately by `leptos::get_configuration`.

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Static media (images, GeoJSON) served as the router fallback.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Read `PORT` and `SITE_ASSETS_DIR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let assets_dir = lookup("SITE_ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);
        Ok(Self { port, assets_dir })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}
