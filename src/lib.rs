//! # cninfo Filing Downloader Library
//!
//! Retrieves regulatory filings (annual reports, semi-annual reports, IPO
//! documents, ...) for a listed company from the cninfo disclosure portal and
//! stores the PDF attachments locally.
//!
//! ## Features
//!
//! - **Exchange Routing**: Shanghai, Shenzhen and Beijing codes are routed to the
//!   right organization id and query parameters
//! - **Category Catalog**: 9 built-in filing categories selectable by their
//!   Chinese names
//! - **Paginated Listing**: page-count driven retrieval with a title-based
//!   validity filter
//! - **Idempotent Downloads**: files already on disk are skipped without a
//!   network call
//! - **Rate Limiting**: minimum spacing between consecutive requests
//!
//! ## Quick Start
//!
//! ```no_run
//! use cninfo_filing_downloader::downloader::{DownloadExecutor, DownloaderConfig};
//! use cninfo_filing_downloader::fetcher::cninfo_http::CninfoHttpClient;
//! use cninfo_filing_downloader::registry::CategoryCatalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DownloaderConfig::default();
//! let catalog = CategoryCatalog::load_embedded()?;
//! let selection = catalog.select(Some("年度报告")).selection;
//!
//! let client = CninfoHttpClient::new(&config)?;
//! let executor = DownloadExecutor::new(&client, config);
//! let summary = executor.run("600887", &selection).await;
//! println!("downloaded {} files", summary.downloaded());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`identifier`] - Company code to exchange routing
//! - [`registry`] - Filing category catalog and user selection
//! - [`fetcher`] - Remote query endpoint access, parsing and pagination
//! - [`output`] - Local filename derivation and directory layout
//! - [`downloader`] - Per-file download and per-category orchestration
//! - [`cli`] - Command line entry point

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{DateTime, Utc};

/// CLI command implementation
pub mod cli;

/// Download orchestration
pub mod downloader;

/// Remote query endpoint access
pub mod fetcher;

/// Company code routing
pub mod identifier;

/// Output path derivation
pub mod output;

/// Filing category catalog
pub mod registry;

// Re-export commonly used types
pub use identifier::{Exchange, MarketRouting};
pub use registry::{CategoryCatalog, CategorySelection};

/// Metadata for a single filing returned by the query endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRecord {
    /// Announcement title (may contain highlight markup from the portal)
    pub title: String,
    /// Portal announcement id
    pub id: String,
    /// Publication time (Unix timestamp in milliseconds)
    pub timestamp: i64,
    /// Server-relative path of the attachment (e.g. "finalpage/2024-04-30/1219.PDF")
    pub attachment_path: String,
}

impl FilingRecord {
    /// Publication time as a UTC datetime, if the timestamp is representable
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}
