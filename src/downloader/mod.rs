//! Download orchestration and rate limiting
//!
//! # Overview
//!
//! 1. **Listing**: [`crate::fetcher::AnnouncementLister`] collects the valid
//!    filings of one category
//! 2. **Fetching**: [`fetch::FilingDownloader`] stores each filing, skipping
//!    files already on disk
//! 3. **Orchestration**: [`executor::DownloadExecutor`] runs list-then-download
//!    for every selected category and returns a [`job::RunSummary`]
//! 4. **Rate Limiting**: [`rate_limit::RateLimiter`] spaces page requests and
//!    downloads
//!
//! # Error Handling
//!
//! Failures never unwind out of the per-file or per-category loops. A failed
//! download becomes [`DownloadOutcome::Failed`]; a failed listing becomes
//! [`job::CategoryStatus::ListingFailed`]. Both are logged and the run moves on.

pub mod config;
pub mod executor;
pub mod fetch;
pub mod job;
pub mod rate_limit;

pub use config::DownloaderConfig;
pub use executor::DownloadExecutor;
pub use fetch::FilingDownloader;
pub use job::{CategoryReport, CategoryStatus, RunSummary};
pub use rate_limit::RateLimiter;

use std::path::PathBuf;

use crate::fetcher::FetcherError;

/// Download errors
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Fetcher error (network or HTTP status)
    #[error("fetcher error: {0}")]
    FetcherError(#[from] FetcherError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result of attempting to store one filing
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Payload fetched and written
    Downloaded {
        /// Written file
        path: PathBuf,
        /// Payload size in bytes
        bytes: u64,
    },
    /// File already present; no request was made
    Skipped {
        /// Existing file
        path: PathBuf,
    },
    /// Fetch or write failed
    Failed {
        /// Title of the filing
        title: String,
        /// Failure cause
        error: DownloadError,
    },
}

impl DownloadOutcome {
    /// Whether the payload was written
    pub fn is_downloaded(&self) -> bool {
        matches!(self, DownloadOutcome::Downloaded { .. })
    }

    /// Whether the filing was skipped as already present
    pub fn is_skipped(&self) -> bool {
        matches!(self, DownloadOutcome::Skipped { .. })
    }

    /// Whether the attempt failed
    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed { .. })
    }
}
