//! Download configuration constants and the run configuration object

use std::path::PathBuf;
use std::time::Duration;

use crate::fetcher::cninfo_config::{QUERY_URL, STATIC_BASE_URL};
use crate::output::sanitize_component;

/// Number of announcements requested per query page.
/// The portal serves at most 30 rows per page for the full-text tab.
pub const PAGE_SIZE: u32 = 30;

/// Minimum spacing between consecutive query page requests
pub const PAGE_DELAY_MS: u64 = 500;

/// Minimum spacing between consecutive attachment downloads
pub const DOWNLOAD_DELAY_MS: u64 = 1000;

/// Maximum number of characters kept from a sanitized title
pub const MAX_TITLE_CHARS: usize = 100;

/// HTTP connect timeout (seconds) - time to establish TCP connection
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout (seconds). Annual reports can run to tens of megabytes.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Default root directory for downloaded filings
pub const DEFAULT_DATA_DIR: &str = "Downloads";

/// Configuration shared by the lister, the downloader and the executor
///
/// Constructed once per run and passed to the components that need it.
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Query endpoint URL
    pub query_url: String,
    /// Static host that serves attachments; joined with the attachment path
    pub static_base_url: String,
    /// Root directory; filings land in `{data_dir}/{company}/{category}/`
    pub data_dir: PathBuf,
    /// Rows per query page
    pub page_size: u32,
    /// Spacing between query page requests
    pub page_delay: Duration,
    /// Spacing between attachment downloads
    pub download_delay: Duration,
    /// Maximum characters kept from a sanitized title
    pub max_title_chars: usize,
    /// HTTP connect timeout
    pub connect_timeout: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl DownloaderConfig {
    /// Set the root output directory
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set both request spacing delays
    pub fn with_delays(mut self, page_delay: Duration, download_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self.download_delay = download_delay;
        self
    }

    /// Point the client at different endpoints
    pub fn with_endpoints(
        mut self,
        query_url: impl Into<String>,
        static_base_url: impl Into<String>,
    ) -> Self {
        self.query_url = query_url.into();
        self.static_base_url = static_base_url.into();
        self
    }

    /// Directory for one company's filings
    ///
    /// The code is sanitized the same way as the per-category directories,
    /// so the result always stays inside `data_dir`.
    pub fn company_dir(&self, company_code: &str) -> PathBuf {
        self.data_dir.join(sanitize_component(company_code))
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            query_url: QUERY_URL.to_string(),
            static_base_url: STATIC_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: PAGE_SIZE,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            download_delay: Duration::from_millis(DOWNLOAD_DELAY_MS),
            max_title_chars: MAX_TITLE_CHARS,
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS),
        }
    }
}
