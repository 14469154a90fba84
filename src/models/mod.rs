// src/models/mod.rs

//! Domain models for the scout application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod api;
mod config;
mod content;
mod record;

// Re-export all public types
pub use api::{ContentSearchResponse, NodeResponse, SearchItem, User, UserSearchResponse};
pub use config::{ApiConfig, Config, CrawlerConfig, ExportConfig, MAX_PAGE_SIZE};
pub use content::ContentType;
pub use record::{ResultRecord, resolve_item_url};

use chrono::{DateTime, Utc};

/// Summary of a crawl run.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Records in discovery order
    pub records: Vec<ResultRecord>,
    pub probes_attempted: usize,
    pub probe_failures: usize,
    pub users_processed: usize,
    pub user_failures: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlOutcome {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            records: Vec::new(),
            probes_attempted: 0,
            probe_failures: 0,
            users_processed: 0,
            user_failures: 0,
            started_at: now,
            finished_at: now,
        }
    }

    /// Wall-clock duration of the run in seconds.
    pub fn elapsed_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

impl Default for CrawlOutcome {
    fn default() -> Self {
        Self::new()
    }
}
