//! Unit tests for CLI parsing and early exits

use crate::support::mock_source::MockSource;
use clap::Parser;
use cninfo_filing_downloader::cli::{Cli, RunStatus};
use cninfo_filing_downloader::downloader::DownloaderConfig;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_cli_positional_arguments() {
    let cli = Cli::parse_from(["cninfo-filing-downloader", "600887", "年度报告,首发"]);

    assert_eq!(cli.company_code.as_deref(), Some("600887"));
    assert_eq!(cli.categories.as_deref(), Some("年度报告,首发"));
}

#[test]
fn test_cli_custom_data_dir() {
    let cli = Cli::parse_from(["cninfo-filing-downloader", "--data-dir", "/tmp/x", "600887"]);

    assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
    assert_eq!(cli.config().company_dir("600887"), PathBuf::from("/tmp/x/600887"));
}

#[tokio::test]
async fn test_no_company_code_prints_usage_without_requests() {
    let source = MockSource::new();
    let cli = Cli::parse_from(["cninfo-filing-downloader"]);

    let status = cli
        .execute_with(&source, DownloaderConfig::default())
        .await
        .unwrap();

    assert!(matches!(status, RunStatus::UsagePrinted));
    assert_eq!(source.query_count(), 0);
}

#[tokio::test]
async fn test_only_unknown_categories_abort_before_network() {
    let temp = tempfile::tempdir().unwrap();
    let source = MockSource::new();
    let cli = Cli::parse_from(["cninfo-filing-downloader", "600887", "foo,bar"]);
    let config = DownloaderConfig::default()
        .with_data_dir(temp.path())
        .with_delays(Duration::ZERO, Duration::ZERO);

    let status = cli.execute_with(&source, config).await.unwrap();

    assert!(matches!(status, RunStatus::NoValidCategories));
    assert_eq!(source.query_count(), 0);
    assert_eq!(source.attachment_count(), 0);
    assert!(!temp.path().join("600887").exists());
}

#[tokio::test]
async fn test_default_categories_are_queried_in_order() {
    let temp = tempfile::tempdir().unwrap();
    let source = MockSource::new();
    let cli = Cli::parse_from(["cninfo-filing-downloader", "600887"]);
    let config = DownloaderConfig::default()
        .with_data_dir(temp.path())
        .with_delays(Duration::ZERO, Duration::ZERO);

    let status = cli.execute_with(&source, config).await.unwrap();

    assert!(matches!(status, RunStatus::Completed(_)));
    assert_eq!(
        source.queried_categories(),
        vec!["category_ndbg_szsh", "category_bndbg_szsh"]
    );
}
