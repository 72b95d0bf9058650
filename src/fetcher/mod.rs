//! Remote query endpoint access
//!
//! The network is reached through the [`FilingSource`] trait: one call per
//! query page and one per attachment. [`cninfo_http::CninfoHttpClient`] is the
//! production implementation; tests substitute in-memory sources.

use crate::identifier::MarketRouting;
use crate::FilingRecord;
use async_trait::async_trait;
use bytes::Bytes;

pub mod cninfo_config;
pub mod cninfo_http;
pub mod cninfo_parser;
pub mod lister;
pub mod pagination;

pub use lister::{is_valid_report, AnnouncementLister};

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Response parse error
    #[error("parse error: {0}")]
    ParseError(String),

    /// Network error
    #[error("network error: {0}")]
    NetworkError(String),

    /// HTTP client could not be built
    #[error("client configuration error: {0}")]
    ClientError(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Form fields for one query page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryForm {
    /// "{companyCode},{organizationId}"
    pub stock: String,
    /// Exchange column token
    pub column: String,
    /// Exchange plate token
    pub plate: String,
    /// Category code without the trailing semicolon
    pub category_code: String,
    /// Rows per page
    pub page_size: u32,
    /// 1-based page number
    pub page_num: u32,
}

impl QueryForm {
    /// Build the form for one page of a (company, category) listing
    pub fn new(routing: &MarketRouting, category_code: &str, page_size: u32, page_num: u32) -> Self {
        Self {
            stock: routing.stock_field(),
            column: routing.column().to_string(),
            plate: routing.plate().to_string(),
            category_code: category_code.to_string(),
            page_size,
            page_num,
        }
    }

    /// Form-encoded field list in the order the portal's own page sends them
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("stock", self.stock.clone()),
            ("tabName", cninfo_config::TAB_NAME.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("pageNum", self.page_num.to_string()),
            ("column", self.column.clone()),
            // trailing semicolon is required by the endpoint
            ("category", format!("{};", self.category_code)),
            ("plate", self.plate.clone()),
            ("seDate", String::new()),
            ("searchkey", String::new()),
            ("secid", String::new()),
            ("sortName", String::new()),
            ("sortType", String::new()),
            ("isHLtitle", "true".to_string()),
        ]
    }
}

/// One parsed page of query results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPage {
    /// Total number of announcements across all pages
    pub total_announcements: u64,
    /// Announcements on this page, unfiltered
    pub records: Vec<FilingRecord>,
}

/// Source of filing metadata and attachments
#[async_trait]
pub trait FilingSource: Send + Sync {
    /// Fetch and parse one page of query results
    async fn query_page(&self, form: &QueryForm) -> FetcherResult<QueryPage>;

    /// Fetch the raw bytes of an attachment by its server-relative path
    async fn fetch_attachment(&self, attachment_path: &str) -> FetcherResult<Bytes>;
}
