//! Per-category and per-run result tracking

use crate::downloader::DownloadOutcome;
use crate::fetcher::FetcherError;
use crate::output::OutputError;

/// How a category's processing ended
#[derive(Debug)]
pub enum CategoryStatus {
    /// Listing succeeded; every filing was attempted
    Completed {
        /// Filings fetched and written
        downloaded: usize,
        /// Filings already present
        skipped: usize,
        /// Filings that failed
        failed: usize,
    },
    /// Listing failed; no downloads were attempted
    ListingFailed(FetcherError),
    /// Category directory could not be created; no downloads were attempted
    DirectoryFailed(OutputError),
}

/// Report for one category of a run
#[derive(Debug)]
pub struct CategoryReport {
    /// Category name
    pub category: String,
    /// Valid filings returned by the listing
    pub listed: usize,
    /// Outcome
    pub status: CategoryStatus,
}

impl CategoryReport {
    /// Build a completed report by tallying download outcomes
    pub fn completed(category: &str, outcomes: &[DownloadOutcome]) -> Self {
        let downloaded = outcomes.iter().filter(|o| o.is_downloaded()).count();
        let skipped = outcomes.iter().filter(|o| o.is_skipped()).count();
        let failed = outcomes.iter().filter(|o| o.is_failed()).count();

        Self {
            category: category.to_string(),
            listed: outcomes.len(),
            status: CategoryStatus::Completed {
                downloaded,
                skipped,
                failed,
            },
        }
    }

    /// Build a report for a failed listing
    pub fn listing_failed(category: &str, error: FetcherError) -> Self {
        Self {
            category: category.to_string(),
            listed: 0,
            status: CategoryStatus::ListingFailed(error),
        }
    }

    /// Build a report for a category whose directory could not be created
    pub fn directory_failed(category: &str, listed: usize, error: OutputError) -> Self {
        Self {
            category: category.to_string(),
            listed,
            status: CategoryStatus::DirectoryFailed(error),
        }
    }
}

/// Aggregated result of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Reports in processing order
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    fn sum(&self, pick: impl Fn(&CategoryStatus) -> usize) -> usize {
        self.categories.iter().map(|c| pick(&c.status)).sum()
    }

    /// Total filings downloaded
    pub fn downloaded(&self) -> usize {
        self.sum(|s| match s {
            CategoryStatus::Completed { downloaded, .. } => *downloaded,
            _ => 0,
        })
    }

    /// Total filings skipped as already present
    pub fn skipped(&self) -> usize {
        self.sum(|s| match s {
            CategoryStatus::Completed { skipped, .. } => *skipped,
            _ => 0,
        })
    }

    /// Total filings that failed to download
    pub fn failed(&self) -> usize {
        self.sum(|s| match s {
            CategoryStatus::Completed { failed, .. } => *failed,
            _ => 0,
        })
    }

    /// Categories whose processing stopped before downloads
    pub fn failed_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| !matches!(c.status, CategoryStatus::Completed { .. }))
            .map(|c| c.category.as_str())
            .collect()
    }
}
