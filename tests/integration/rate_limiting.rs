//! Integration tests for request spacing

use crate::support::mock_source::{annual_reports, gaps, MockSource};
use cninfo_filing_downloader::downloader::{DownloadExecutor, DownloaderConfig, RateLimiter};
use cninfo_filing_downloader::fetcher::AnnouncementLister;
use cninfo_filing_downloader::MarketRouting;
use cninfo_filing_downloader::registry::CategoryCatalog;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_limiter_spacing_holds_across_clones() {
    let limiter = RateLimiter::min_interval(Duration::from_millis(500));
    let shared = limiter.clone();
    let start = Instant::now();

    limiter.acquire().await;
    limiter.complete().await;
    shared.acquire().await;
    shared.complete().await;
    limiter.acquire().await;

    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_never_waits() {
    let limiter = RateLimiter::min_interval(Duration::ZERO);
    for _ in 0..5 {
        assert_eq!(limiter.acquire().await, Duration::ZERO);
        limiter.complete().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_limiter_does_not_wait_after_idle_gap() {
    let limiter = RateLimiter::min_interval(Duration::from_millis(500));
    limiter.acquire().await;
    limiter.complete().await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(limiter.acquire().await, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_executor_spaces_downloads() {
    let temp = TempDir::new().unwrap();
    let source = MockSource::new().with_listing("category_ndbg_szsh", annual_reports(3));
    let selection = CategoryCatalog::load_embedded()
        .unwrap()
        .select(Some("年度报告"))
        .selection;
    let config = DownloaderConfig::default()
        .with_data_dir(temp.path())
        .with_delays(Duration::ZERO, Duration::from_secs(1));

    let start = Instant::now();
    let summary = DownloadExecutor::new(&source, config)
        .run("600887", &selection)
        .await;

    assert_eq!(summary.downloaded(), 3);
    assert!(start.elapsed() >= Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_executor_spaces_pages_across_categories() {
    let temp = TempDir::new().unwrap();
    // one page per category, two categories
    let source = MockSource::new();
    let selection = CategoryCatalog::load_embedded().unwrap().default_selection();
    let config = DownloaderConfig::default()
        .with_data_dir(temp.path())
        .with_delays(Duration::from_millis(500), Duration::ZERO);

    let start = Instant::now();
    DownloadExecutor::new(&source, config)
        .run("600887", &selection)
        .await;

    assert_eq!(source.query_count(), 2);
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_slow_pages_still_get_full_pause() {
    let source = MockSource::new()
        .with_total("category_ndbg_szsh", 90)
        .with_latency(Duration::from_secs(2));
    let config = DownloaderConfig::default();
    let routing = MarketRouting::resolve("600887");

    AnnouncementLister::new(&source, &config)
        .list(&routing, "category_ndbg_szsh")
        .await
        .unwrap();

    let spans = source.query_spans.lock().unwrap().clone();
    assert_eq!(spans.len(), 3);
    for gap in gaps(&spans) {
        assert!(gap >= Duration::from_millis(500), "gap {gap:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_downloads_still_get_full_pause() {
    let temp = TempDir::new().unwrap();
    let source = MockSource::new()
        .with_listing("category_ndbg_szsh", annual_reports(3))
        .with_latency(Duration::from_secs(3));
    let selection = CategoryCatalog::load_embedded()
        .unwrap()
        .select(Some("年度报告"))
        .selection;
    let config = DownloaderConfig::default().with_data_dir(temp.path());

    let summary = DownloadExecutor::new(&source, config)
        .run("600887", &selection)
        .await;

    assert_eq!(summary.downloaded(), 3);
    let spans = source.attachment_spans.lock().unwrap().clone();
    assert_eq!(spans.len(), 3);
    for gap in gaps(&spans) {
        assert!(gap >= Duration::from_secs(1), "gap {gap:?}");
    }
}
