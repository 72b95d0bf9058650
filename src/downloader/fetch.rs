//! Per-filing download with skip-if-exists

use std::path::Path;

use tracing::{debug, error, info};

use crate::downloader::config::DownloaderConfig;
use crate::downloader::rate_limit::RateLimiter;
use crate::downloader::{DownloadError, DownloadOutcome};
use crate::fetcher::FilingSource;
use crate::output::filing_filename;
use crate::FilingRecord;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Stores filing attachments in a target directory
pub struct FilingDownloader<'a> {
    source: &'a dyn FilingSource,
    limiter: RateLimiter,
    max_title_chars: usize,
}

impl<'a> FilingDownloader<'a> {
    /// Create a downloader with its own download rate limiter
    pub fn new(source: &'a dyn FilingSource, config: &DownloaderConfig) -> Self {
        Self {
            source,
            limiter: RateLimiter::min_interval(config.download_delay),
            max_title_chars: config.max_title_chars,
        }
    }

    /// Share an existing download rate limiter
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Download one filing into `target_dir`
    ///
    /// The file name is derived from the title. An existing file with that
    /// name is treated as already downloaded and no request is made. Errors
    /// are logged and returned as [`DownloadOutcome::Failed`].
    pub async fn fetch(&self, record: &FilingRecord, target_dir: &Path) -> DownloadOutcome {
        let file_name = filing_filename(&record.title, self.max_title_chars);
        let path = target_dir.join(&file_name);

        if path.exists() {
            info!("    [skip] {} (already exists)", file_name);
            return DownloadOutcome::Skipped { path };
        }

        info!("    [download] {}", file_name);
        if let Some(published) = record.published_at() {
            debug!(
                "    announcement {} published {}",
                record.id,
                published.format("%Y-%m-%d")
            );
        }

        match self.fetch_and_write(record, &path).await {
            Ok(bytes) => {
                info!(
                    "    [done] {} ({:.2} MB)",
                    file_name,
                    bytes as f64 / BYTES_PER_MB
                );
                DownloadOutcome::Downloaded { path, bytes }
            }
            Err(e) => {
                error!("    [failed] {}: {}", record.title, e);
                DownloadOutcome::Failed {
                    title: record.title.clone(),
                    error: e,
                }
            }
        }
    }

    async fn fetch_and_write(&self, record: &FilingRecord, path: &Path) -> Result<u64, DownloadError> {
        self.limiter.acquire().await;

        let payload = self.source.fetch_attachment(&record.attachment_path).await?;
        self.limiter.complete().await;

        tokio::fs::write(path, &payload).await.map_err(|e| {
            DownloadError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(payload.len() as u64)
    }
}
