//! Run orchestration: list then download, one category at a time

use tracing::{error, info, warn};

use crate::downloader::config::DownloaderConfig;
use crate::downloader::fetch::FilingDownloader;
use crate::downloader::job::{CategoryReport, RunSummary};
use crate::downloader::rate_limit::RateLimiter;
use crate::fetcher::{AnnouncementLister, FilingSource};
use crate::identifier::MarketRouting;
use crate::output::FilingPathBuilder;
use crate::registry::CategorySelection;

/// Download executor orchestrates the complete run
///
/// Categories are processed strictly in sequence. A category is fully listed
/// and downloaded before the next one starts, and a failure in one category
/// never stops the others.
pub struct DownloadExecutor<'a> {
    source: &'a dyn FilingSource,
    config: DownloaderConfig,
    page_limiter: RateLimiter,
    download_limiter: RateLimiter,
}

impl<'a> DownloadExecutor<'a> {
    /// Create an executor over a filing source
    pub fn new(source: &'a dyn FilingSource, config: DownloaderConfig) -> Self {
        Self {
            source,
            page_limiter: RateLimiter::min_interval(config.page_delay),
            download_limiter: RateLimiter::min_interval(config.download_delay),
            config,
        }
    }

    /// Process every selected category for a company
    pub async fn run(&self, company_code: &str, selection: &CategorySelection) -> RunSummary {
        let routing = MarketRouting::resolve(company_code);
        let company_dir = self.config.company_dir(company_code);

        info!("=== cninfo filing downloader ===");
        info!("Company code: {}", company_code);
        info!("Organization id: {}", routing.organization_id());
        info!("Categories: {}", selection.names().join(", "));
        info!("Save directory: {}", company_dir.display());

        if let Err(e) = std::fs::create_dir_all(&company_dir) {
            warn!(
                "Could not create save directory {}: {}",
                company_dir.display(),
                e
            );
        }

        let mut summary = RunSummary::default();
        for (name, code) in selection.iter() {
            let report = self.run_category(&routing, name, code).await;
            summary.categories.push(report);
        }

        info!(
            "=== Download complete: {} downloaded, {} skipped, {} failed ===",
            summary.downloaded(),
            summary.skipped(),
            summary.failed()
        );
        let failed_categories = summary.failed_categories();
        if !failed_categories.is_empty() {
            warn!("Categories not processed: {}", failed_categories.join(", "));
        }

        summary
    }

    async fn run_category(
        &self,
        routing: &MarketRouting,
        category_name: &str,
        category_code: &str,
    ) -> CategoryReport {
        info!(">>> Fetching [{}] list...", category_name);

        let lister = AnnouncementLister::new(self.source, &self.config)
            .with_limiter(self.page_limiter.clone());

        let records = match lister.list(routing, category_code).await {
            Ok(records) => records,
            Err(e) => {
                error!("    Listing failed: {}", e);
                return CategoryReport::listing_failed(category_name, e);
            }
        };
        info!("    Found {} announcements", records.len());

        let paths = FilingPathBuilder::new(
            self.config.data_dir.clone(),
            routing.company_code(),
            category_name,
        )
        .with_max_title_chars(self.config.max_title_chars);

        if let Err(e) = paths.ensure_directories() {
            error!("    {}", e);
            return CategoryReport::directory_failed(category_name, records.len(), e);
        }

        let downloader = FilingDownloader::new(self.source, &self.config)
            .with_limiter(self.download_limiter.clone());

        let mut outcomes = Vec::with_capacity(records.len());
        for record in &records {
            outcomes.push(downloader.fetch(record, paths.category_dir()).await);
        }

        CategoryReport::completed(category_name, &outcomes)
    }
}
