//! Integration tests for tracing output of a run

use crate::support::mock_source::{filing, MockSource};
use cninfo_filing_downloader::downloader::{DownloaderConfig, FilingDownloader};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Writer collecting formatted log lines in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn test_download_and_skip_lines() {
    let (logs, _guard) = capture("cninfo_filing_downloader=info");
    let temp = TempDir::new().unwrap();
    let source = MockSource::new();
    let config = DownloaderConfig::default().with_delays(Duration::ZERO, Duration::ZERO);
    let downloader = FilingDownloader::new(&source, &config);
    let record = filing("2023年年度报告", 1);

    downloader.fetch(&record, temp.path()).await;
    downloader.fetch(&record, temp.path()).await;

    let output = logs.contents();
    assert!(output.contains("[download] 2023_2023年年度报告.PDF"));
    assert!(output.contains("[done] 2023_2023年年度报告.PDF"));
    assert!(output.contains(" MB)"));
    assert!(output.contains("[skip] 2023_2023年年度报告.PDF (already exists)"));
}

#[tokio::test]
async fn test_failure_line_names_title() {
    let (logs, _guard) = capture("cninfo_filing_downloader=info");
    let temp = TempDir::new().unwrap();
    let record = filing("2023年年度报告", 5);
    let source = MockSource::new().with_failing_attachment(&record.attachment_path);
    let config = DownloaderConfig::default().with_delays(Duration::ZERO, Duration::ZERO);

    FilingDownloader::new(&source, &config)
        .fetch(&record, temp.path())
        .await;

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("[failed] 2023年年度报告"));
}

#[tokio::test]
async fn test_filter_suppresses_info() {
    let (logs, _guard) = capture("cninfo_filing_downloader=warn");
    let temp = TempDir::new().unwrap();
    let source = MockSource::new();
    let config = DownloaderConfig::default().with_delays(Duration::ZERO, Duration::ZERO);

    FilingDownloader::new(&source, &config)
        .fetch(&filing("2023年年度报告", 1), temp.path())
        .await;

    assert!(!logs.contents().contains("[download]"));
}

#[tokio::test]
async fn test_debug_level_shows_publication_date() {
    let (logs, _guard) = capture("cninfo_filing_downloader=debug");
    let temp = TempDir::new().unwrap();
    let source = MockSource::new();
    let config = DownloaderConfig::default().with_delays(Duration::ZERO, Duration::ZERO);

    FilingDownloader::new(&source, &config)
        .fetch(&filing("2023年年度报告", 1219720498), temp.path())
        .await;

    assert!(logs
        .contents()
        .contains("announcement 1219720498 published 2024-04-29"));
}

#[tokio::test]
async fn test_publication_date_hidden_at_info() {
    let (logs, _guard) = capture("cninfo_filing_downloader=info");
    let temp = TempDir::new().unwrap();
    let source = MockSource::new();
    let config = DownloaderConfig::default().with_delays(Duration::ZERO, Duration::ZERO);

    FilingDownloader::new(&source, &config)
        .fetch(&filing("2023年年度报告", 1), temp.path())
        .await;

    let output = logs.contents();
    assert!(output.contains("[download]"));
    assert!(!output.contains("published"));
}
