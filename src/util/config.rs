//! Startup configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;

pub const CATALOGUE_ENV: &str = "DESTINATIONS_CATALOGUE";
pub const LOG_LEVEL_ENV: &str = "DESTINATIONS_LOG";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has unknown log level {value:?} (expected error, warn, info, debug or trace)")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Replaces the bundled catalogue when set.
    pub catalogue_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalogue_path = lookup(CATALOGUE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(value) if !value.trim().is_empty() => parse_level(&value)?,
            _ => Level::INFO,
        };

        Ok(Self {
            catalogue_path,
            log_level,
        })
    }
}

fn parse_level(value: &str) -> Result<Level, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::InvalidLogLevel {
            var: LOG_LEVEL_ENV,
            value: value.to_string(),
        }),
    }
}
