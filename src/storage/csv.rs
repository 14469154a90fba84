//! CSV export to the local filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{ContentType, ExportConfig, ResultRecord};
use crate::storage::{ExportSummary, ResultExporter};
use crate::utils::sanitize_file_component;

/// Writes records as `Username,Title,URL` rows.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
    file_prefix: String,
}

impl CsvExporter {
    /// Create an exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.output_dir, &config.file_prefix)
    }

    /// `{prefix}{content_type}_{keyword}.csv`
    pub fn file_name(&self, content_type: ContentType, keyword: &str) -> String {
        format!(
            "{}{}_{}.csv",
            self.file_prefix,
            content_type,
            sanitize_file_component(keyword)
        )
    }

    pub fn output_path(&self, content_type: ContentType, keyword: &str) -> PathBuf {
        self.output_dir.join(self.file_name(content_type, keyword))
    }

    /// Render records to CSV bytes, header first.
    pub fn render(records: &[ResultRecord]) -> Result<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(record)?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultExporter for CsvExporter {
    async fn export(
        &self,
        records: &[ResultRecord],
        content_type: ContentType,
        keyword: &str,
    ) -> Result<ExportSummary> {
        let path = self.output_path(content_type, keyword);
        let bytes = Self::render(records)?;
        Self::write_bytes(&path, &bytes).await?;

        let path = tokio::fs::canonicalize(&path).await.unwrap_or(path);
        log::debug!("Wrote {} rows to {}", records.len(), path.display());

        Ok(ExportSummary {
            path,
            row_count: records.len(),
        })
    }
}
