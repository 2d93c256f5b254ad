//! Session configuration.
//!
//! # Responsibility
//! - Resolve feed endpoint, page size and logging options.
//! - Layer environment overrides over built-in defaults.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - `page_size` is never zero.

use crate::feed::http::DEFAULT_FEED_URL;
use crate::feed::import::ImportDefaults;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_FEED_URL: &str = "BOOKSHELF_FEED_URL";
pub const ENV_PAGE_SIZE: &str = "BOOKSHELF_PAGE_SIZE";
pub const ENV_LOG_LEVEL: &str = "BOOKSHELF_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BOOKSHELF_LOG_DIR";

const DEFAULT_PAGE_SIZE: usize = 3;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPageSize(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize(value) => {
                write!(f, "page size must be a positive integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Effective configuration for one catalog session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub feed_url: String,
    pub page_size: usize,
    pub log_level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Loads defaults overridden by `BOOKSHELF_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = non_blank(ENV_FEED_URL) {
            config.feed_url = url;
        }
        if let Some(raw) = non_blank(ENV_PAGE_SIZE) {
            config.page_size = match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidPageSize(raw)),
            };
        }
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = non_blank(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Returns import defaults using this config's page size.
    pub fn import_defaults(&self) -> ImportDefaults {
        ImportDefaults {
            page_size: self.page_size,
            ..ImportDefaults::default()
        }
    }
}
