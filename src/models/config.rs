//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Upper bound accepted by the image search endpoint for `count`.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Crawl pacing and search shaping
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Export file settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        for (name, value) in &self.api.headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::validation(format!("api.headers: bad name '{name}'")))?;
            HeaderValue::from_str(value)
                .map_err(|_| AppError::validation(format!("api.headers: bad value for '{name}'")))?;
        }
        if self.crawler.page_size == 0 || self.crawler.page_size > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "crawler.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if self.export.file_prefix.contains(['/', '\\']) {
            return Err(AppError::validation(
                "export.file_prefix must not contain path separators",
            ));
        }
        Ok(())
    }
}

/// Remote API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Sent as `Authorization: Bearer <key>` when set
    #[serde(default)]
    pub api_key: Option<String>,

    /// Extra headers added to every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            api_key: None,
            headers: BTreeMap::new(),
        }
    }
}

/// Crawl pacing and search shaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Delay after each user in seconds; doubled after each probe character
    #[serde(default = "defaults::delay")]
    pub delay_secs: u64,

    /// `count` sent with image/video searches (one page only)
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_secs: defaults::delay(),
            page_size: defaults::page_size(),
        }
    }
}

/// Export file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the CSV is written to
    #[serde(default = "defaults::output_dir")]
    pub output_dir: PathBuf,

    /// Prepended to `<type>_<keyword>.csv`
    #[serde(default = "defaults::file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            file_prefix: defaults::file_prefix(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Api defaults
    pub fn base_url() -> String {
        "https://api.smugmug.com".into()
    }
    pub fn user_agent() -> String {
        concat!("smugscout/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Crawler defaults
    pub fn delay() -> u64 {
        2
    }
    pub fn page_size() -> usize {
        100
    }

    // Export defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from(".")
    }
    pub fn file_prefix() -> String {
        "smugmug_".into()
    }
}
