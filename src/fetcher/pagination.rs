//! Page-count driven pagination for the query endpoint
//!
//! The first page reports the total number of announcements; the page count
//! is `ceil(total / page_size)`. Page 1 is always requested, and requesting
//! continues while the next page number does not exceed that count. Every
//! page request first takes a permit from the page rate limiter and reports
//! back to it once the response is in.

use crate::downloader::rate_limit::RateLimiter;
use crate::fetcher::{FetcherError, FetcherResult, QueryPage};
use crate::FilingRecord;
use std::future::Future;
use tracing::debug;

/// Number of pages needed for `total` rows at `page_size` rows per page
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// Pagination helper for query endpoint requests
pub struct PaginationHelper;

impl PaginationHelper {
    /// Fetch every page and collect the records `keep` accepts
    ///
    /// # Arguments
    /// * `page_size` - Rows per page, used for the page count
    /// * `limiter` - Pause enforced between one page's response and the next request
    /// * `fetch_page` - Fetches one page given its 1-based number
    /// * `keep` - Record filter applied before aggregation
    ///
    /// # Errors
    /// The first failing page aborts the whole pagination; records from
    /// earlier pages are dropped with it.
    pub async fn paginate<F, Fut, P>(
        page_size: u32,
        limiter: &RateLimiter,
        mut fetch_page: F,
        keep: P,
    ) -> FetcherResult<Vec<FilingRecord>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = FetcherResult<QueryPage>>,
        P: Fn(&FilingRecord) -> bool,
    {
        if page_size == 0 {
            return Err(FetcherError::ParseError(
                "page size must be at least 1".to_string(),
            ));
        }

        let mut all_records = Vec::new();
        let mut page_num: u32 = 1;
        let mut page_count: u64 = 0;

        loop {
            limiter.acquire().await;

            debug!("Fetching query page {}", page_num);
            let result = fetch_page(page_num).await;
            limiter.complete().await;
            let page = result?;

            if page_num == 1 {
                page_count = total_pages(page.total_announcements, page_size);
                debug!(
                    "Query reports {} announcements over {} pages",
                    page.total_announcements, page_count
                );
            }

            let received = page.records.len();
            all_records.extend(page.records.into_iter().filter(|r| keep(r)));
            debug!(
                "Page {} returned {} records ({} kept so far)",
                page_num,
                received,
                all_records.len()
            );

            page_num += 1;
            if u64::from(page_num) > page_count {
                break;
            }
        }

        Ok(all_records)
    }
}
