//! cninfo HTTP client
//!
//! A single reusable [`reqwest::Client`] carrying the browser-like default
//! headers the portal expects. Used for the form-encoded query POST and for
//! attachment GETs against the static host. Failures are not retried: a
//! non-success status is returned to the caller as an error.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::downloader::config::DownloaderConfig;
use crate::fetcher::cninfo_config::{self, attachment_url};
use crate::fetcher::cninfo_parser::CninfoParser;
use crate::fetcher::{FetcherError, FetcherResult, FilingSource, QueryForm, QueryPage};

/// HTTP client for the cninfo query endpoint and static host
#[derive(Debug, Clone)]
pub struct CninfoHttpClient {
    client: Client,
    query_url: String,
    static_base_url: String,
}

impl CninfoHttpClient {
    /// Build a client from the run configuration
    ///
    /// # Errors
    /// Returns FetcherError::ClientError if the TLS backend cannot be initialised
    pub fn new(config: &DownloaderConfig) -> FetcherResult<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| FetcherError::ClientError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            query_url: config.query_url.clone(),
            static_base_url: config.static_base_url.clone(),
        })
    }

    /// Query endpoint URL
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Static host URL
    pub fn static_base_url(&self) -> &str {
        &self.static_base_url
    }

    async fn check_status(response: reqwest::Response, url: &str) -> FetcherResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(200).collect();
        Err(FetcherError::HttpError(format!(
            "{status} from {url}: {snippet}"
        )))
    }
}

#[async_trait]
impl FilingSource for CninfoHttpClient {
    async fn query_page(&self, form: &QueryForm) -> FetcherResult<QueryPage> {
        debug!(
            "POST {} stock={} page={}",
            self.query_url, form.stock, form.page_num
        );

        let response = self
            .client
            .post(&self.query_url)
            .form(&form.to_fields())
            .send()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        let response = Self::check_status(response, &self.query_url).await?;

        let body = response
            .text()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        CninfoParser::parse_query_body(&body)
    }

    async fn fetch_attachment(&self, attachment_path: &str) -> FetcherResult<Bytes> {
        let url = attachment_url(&self.static_base_url, attachment_path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        let response = Self::check_status(response, &url).await?;

        response
            .bytes()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))
    }
}

/// Headers the portal's anti-bot checks look for
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(cninfo_config::USER_AGENT),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(cninfo_config::ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(cninfo_config::ACCEPT_LANGUAGE),
    );
    headers.insert(header::ORIGIN, HeaderValue::from_static(cninfo_config::ORIGIN));
    headers.insert(header::REFERER, HeaderValue::from_static(cninfo_config::REFERER));
    headers
}
