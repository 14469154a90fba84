// src/pipeline/crawl.rs

//! Profile crawl pipeline: crawl every probe, then optionally export.

use std::time::Duration;

use crate::error::Result;
use crate::models::{ContentType, CrawlOutcome};
use crate::services::{CrawlRequest, ProfileCrawler, SearchApi};
use crate::storage::{ExportSummary, ResultExporter};

/// Options for one invocation of [`run_crawler`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub keyword: String,
    pub content_type: ContentType,
    pub delay: Duration,
    pub export: bool,
}

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: CrawlOutcome,
    /// Set only when export was requested and there was something to write
    pub export: Option<ExportSummary>,
}

/// Run the profile crawler.
///
/// Crawl failures are absorbed per probe and per user; only an export
/// failure makes this return an error.
pub async fn run_crawler(
    api: &dyn SearchApi,
    exporter: &dyn ResultExporter,
    options: &RunOptions,
) -> Result<RunReport> {
    log::info!(
        "Searching {} for '{}' (delay {}s)",
        options.content_type,
        options.keyword,
        options.delay.as_secs()
    );

    let crawler = ProfileCrawler::new(
        api,
        CrawlRequest {
            keyword: options.keyword.clone(),
            content_type: options.content_type,
            delay: options.delay,
        },
    );
    let outcome = crawler.crawl().await;

    log::info!(
        "Crawl finished in {}s: {} probes ({} failed), {} users ({} failed), {} results",
        outcome.elapsed_secs(),
        outcome.probes_attempted,
        outcome.probe_failures,
        outcome.users_processed,
        outcome.user_failures,
        outcome.records.len()
    );

    let export = if !options.export {
        None
    } else if outcome.records.is_empty() {
        log::info!("No results found, nothing exported");
        None
    } else {
        let summary = exporter
            .export(&outcome.records, options.content_type, &options.keyword)
            .await?;
        log::info!("Results exported to: {}", summary.path.display());
        Some(summary)
    };

    Ok(RunReport { outcome, export })
}
