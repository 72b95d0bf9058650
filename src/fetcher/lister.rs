//! Announcement listing for one (company, category) pair

use crate::downloader::config::DownloaderConfig;
use crate::downloader::rate_limit::RateLimiter;
use crate::fetcher::pagination::PaginationHelper;
use crate::fetcher::{FetcherResult, FilingSource, QueryForm};
use crate::identifier::MarketRouting;
use crate::FilingRecord;
use tracing::debug;

/// Title fragments marking a filing as a derivative document: summaries,
/// English versions, revisions, corrections, supplements and cancellations.
pub const EXCLUDED_TITLE_FRAGMENTS: [&str; 6] = ["摘要", "英文", "修订", "更正", "补充", "取消"];

/// Whether a title denotes a primary report
///
/// Plain substring match, so a title that contains one of the fragments in an
/// unrelated sense is excluded as well.
pub fn is_valid_report(title: &str) -> bool {
    !EXCLUDED_TITLE_FRAGMENTS
        .iter()
        .any(|fragment| title.contains(fragment))
}

/// Lists filings for a company and category across all query pages
pub struct AnnouncementLister<'a> {
    source: &'a dyn FilingSource,
    page_size: u32,
    limiter: RateLimiter,
}

impl<'a> AnnouncementLister<'a> {
    /// Create a lister with its own page rate limiter
    pub fn new(source: &'a dyn FilingSource, config: &DownloaderConfig) -> Self {
        Self {
            source,
            page_size: config.page_size,
            limiter: RateLimiter::min_interval(config.page_delay),
        }
    }

    /// Share an existing page rate limiter, so spacing holds across categories
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Fetch all valid filings for one category
    ///
    /// # Errors
    /// Any failed page aborts the listing; nothing collected so far is returned.
    pub async fn list(
        &self,
        routing: &MarketRouting,
        category_code: &str,
    ) -> FetcherResult<Vec<FilingRecord>> {
        debug!(
            "Listing {} ({}) category {}",
            routing.company_code(),
            routing.organization_id(),
            category_code
        );

        PaginationHelper::paginate(
            self.page_size,
            &self.limiter,
            |page_num| {
                let form = QueryForm::new(routing, category_code, self.page_size, page_num);
                async move { self.source.query_page(&form).await }
            },
            |record| {
                let valid = is_valid_report(&record.title);
                if !valid {
                    debug!("Filtered out '{}'", record.title);
                }
                valid
            },
        )
        .await
    }
}
