//! In-memory FilingSource that records every request

use async_trait::async_trait;
use bytes::Bytes;
use cninfo_filing_downloader::fetcher::{
    FetcherError, FetcherResult, FilingSource, QueryForm, QueryPage,
};
use cninfo_filing_downloader::FilingRecord;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Mock source serving a fixed set of records per category code
#[derive(Default)]
pub struct MockSource {
    /// Records per category code, paged by the requested page size
    listings: HashMap<String, Vec<FilingRecord>>,
    /// Reported total per category code (defaults to the record count)
    totals: HashMap<String, u64>,
    /// Category codes whose query fails with an HTTP error
    failing_categories: HashSet<String>,
    /// Attachment paths whose download fails with an HTTP error
    failing_attachments: HashSet<String>,
    /// Every query form received
    pub queries: Mutex<Vec<QueryForm>>,
    /// Every attachment path requested
    pub attachments: Mutex<Vec<String>>,
    /// Time each request takes before answering
    latency: Duration,
    /// (start, end) of every query page request
    pub query_spans: Mutex<Vec<(Instant, Instant)>>,
    /// (start, end) of every attachment request
    pub attachment_spans: Mutex<Vec<(Instant, Instant)>>,
}

#[allow(dead_code)]
impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, category_code: &str, records: Vec<FilingRecord>) -> Self {
        self.listings.insert(category_code.to_string(), records);
        self
    }

    pub fn with_total(mut self, category_code: &str, total: u64) -> Self {
        self.totals.insert(category_code.to_string(), total);
        self
    }

    pub fn with_failing_category(mut self, category_code: &str) -> Self {
        self.failing_categories.insert(category_code.to_string());
        self
    }

    pub fn with_failing_attachment(mut self, path: &str) -> Self {
        self.failing_attachments.insert(path.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        self.queries.lock().unwrap().iter().map(|q| q.page_num).collect()
    }

    pub fn queried_categories(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.category_code.clone())
            .collect()
    }

    pub fn attachment_count(&self) -> usize {
        self.attachments.lock().unwrap().len()
    }
}

#[async_trait]
impl FilingSource for MockSource {
    async fn query_page(&self, form: &QueryForm) -> FetcherResult<QueryPage> {
        self.queries.lock().unwrap().push(form.clone());
        let started = Instant::now();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.query_spans
            .lock()
            .unwrap()
            .push((started, Instant::now()));

        if self.failing_categories.contains(&form.category_code) {
            return Err(FetcherError::HttpError("403 Forbidden".to_string()));
        }

        let records = self
            .listings
            .get(&form.category_code)
            .cloned()
            .unwrap_or_default();
        let total = self
            .totals
            .get(&form.category_code)
            .copied()
            .unwrap_or(records.len() as u64);

        let size = form.page_size as usize;
        let start = (form.page_num as usize - 1) * size;
        let page = records.into_iter().skip(start).take(size).collect();

        Ok(QueryPage {
            total_announcements: total,
            records: page,
        })
    }

    async fn fetch_attachment(&self, attachment_path: &str) -> FetcherResult<Bytes> {
        self.attachments
            .lock()
            .unwrap()
            .push(attachment_path.to_string());
        let started = Instant::now();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.attachment_spans
            .lock()
            .unwrap()
            .push((started, Instant::now()));

        if self.failing_attachments.contains(attachment_path) {
            return Err(FetcherError::HttpError("404 Not Found".to_string()));
        }

        Ok(Bytes::from(format!("%PDF-1.4 {attachment_path}")))
    }
}

/// A filing with a derived attachment path
#[allow(dead_code)]
pub fn filing(title: &str, id: u32) -> FilingRecord {
    FilingRecord {
        title: title.to_string(),
        id: id.to_string(),
        timestamp: 1_714_406_400_000,
        attachment_path: format!("finalpage/2024-04-30/{id}.PDF"),
    }
}

/// `count` distinct annual reports
#[allow(dead_code)]
pub fn annual_reports(count: u32) -> Vec<FilingRecord> {
    (0..count)
        .map(|i| filing(&format!("{}年年度报告", 1900 + i), 1000 + i))
        .collect()
}

/// Pause between the end of each request and the start of the next
#[allow(dead_code)]
pub fn gaps(spans: &[(Instant, Instant)]) -> Vec<Duration> {
    spans
        .windows(2)
        .map(|pair| pair[1].0.duration_since(pair[0].1))
        .collect()
}
