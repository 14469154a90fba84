// src/services/profiles.rs

//! Profile crawler service.
//!
//! Enumerates users by single-character profile searches and searches each
//! user's content for a keyword. Requests are issued one at a time; every
//! failure is logged and skipped at the probe or user level.

use std::time::Duration;

use chrono::Utc;

use crate::error::Result;
use crate::models::{ContentType, CrawlOutcome, ResultRecord, SearchItem};
use crate::services::SearchApi;

/// Probe characters, in crawl order.
pub const PROBE_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Parameters for a single crawl.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    pub keyword: String,
    pub content_type: ContentType,
    /// Pause after each user; twice this after each probe character
    pub delay: Duration,
}

/// Service for crawling profiles and their content.
pub struct ProfileCrawler<'a> {
    api: &'a dyn SearchApi,
    request: CrawlRequest,
}

impl<'a> ProfileCrawler<'a> {
    pub fn new(api: &'a dyn SearchApi, request: CrawlRequest) -> Self {
        Self { api, request }
    }

    /// Run every probe character and collect matches.
    pub async fn crawl(&self) -> CrawlOutcome {
        let mut outcome = CrawlOutcome::new();

        for probe in PROBE_CHARACTERS.chars() {
            // A failed profile search skips the doubled delay.
            if self.crawl_probe(probe, &mut outcome).await {
                pause(self.request.delay.saturating_mul(2)).await;
            }
        }

        outcome.finished_at = Utc::now();
        outcome
    }

    /// Returns `false` when the profile search itself failed.
    async fn crawl_probe(&self, probe: char, outcome: &mut CrawlOutcome) -> bool {
        log::info!("Searching users with '{}'...", probe);
        outcome.probes_attempted += 1;

        let users = match self.api.search_profiles(probe).await {
            Ok(users) => users,
            Err(error) => {
                outcome.probe_failures += 1;
                log::warn!("Error searching profiles for '{}': {}", probe, error);
                return false;
            }
        };
        log::debug!("Probe '{}' returned {} users", probe, users.len());

        for username in users.iter().filter(|u| !u.trim().is_empty()) {
            log::info!("Processing user: {}", username);
            outcome.users_processed += 1;

            match self.search_user(username).await {
                Ok(items) => {
                    for item in &items {
                        let record = ResultRecord::from_item(username, item);
                        log::info!("Found: {} - {}", record.title, record.url);
                        outcome.records.push(record);
                    }
                    pause(self.request.delay).await;
                }
                Err(error) => {
                    outcome.user_failures += 1;
                    log::warn!("Error with user {}: {}", username, error);
                }
            }
        }

        true
    }

    /// Search one user's content. Folders skip node resolution.
    async fn search_user(&self, username: &str) -> Result<Vec<SearchItem>> {
        let keyword = &self.request.keyword;
        let content_type = self.request.content_type;

        if !content_type.requires_node() {
            return self.api.search_folders(username, keyword).await;
        }

        let node_uri = self.api.get_user_node(username).await?;
        self.api
            .search_content(&node_uri, keyword, content_type)
            .await
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
