//! Storage abstractions for exporting crawl results.
//!
//! Results are written once, at the end of a run, as a single CSV file:
//!
//! ```text
//! {output_dir}/
//! └── {prefix}{content_type}_{keyword}.csv   # Username,Title,URL
//! ```

pub mod csv;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContentType, ResultRecord};

// Re-export for convenience
pub use self::csv::CsvExporter;

/// Metadata about a completed export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Where the file ended up
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub row_count: usize,
}

/// Trait for result export backends.
#[async_trait]
pub trait ResultExporter: Send + Sync {
    /// Persist all records of one run.
    async fn export(
        &self,
        records: &[ResultRecord],
        content_type: ContentType,
        keyword: &str,
    ) -> Result<ExportSummary>;
}
