//! cninfo response parser
//!
//! Stateless conversion of query endpoint JSON into [`QueryPage`] values.
//! The endpoint is lenient about its own schema: `announcements` is `null`
//! past the last page and ids are sometimes numbers, so missing or oddly
//! typed fields fall back to empty values instead of failing the page.

use crate::fetcher::{FetcherError, FetcherResult, QueryPage};
use crate::FilingRecord;
use serde::Deserialize;
use serde_json::Value;

/// Stateless parser for query endpoint responses
pub struct CninfoParser;

impl CninfoParser {
    /// Parse a raw response body
    ///
    /// # Errors
    /// Returns FetcherError::ParseError if the body is not a JSON object
    pub fn parse_query_body(body: &str) -> FetcherResult<QueryPage> {
        let raw: RawQueryResponse = serde_json::from_str(body).map_err(|e| {
            FetcherError::ParseError(format!("Failed to deserialize query response: {e}"))
        })?;
        Ok(Self::into_page(raw))
    }

    /// Parse an already decoded JSON value
    pub fn parse_query_value(value: Value) -> FetcherResult<QueryPage> {
        let raw: RawQueryResponse = serde_json::from_value(value).map_err(|e| {
            FetcherError::ParseError(format!("Failed to deserialize query response: {e}"))
        })?;
        Ok(Self::into_page(raw))
    }

    fn into_page(raw: RawQueryResponse) -> QueryPage {
        let records = raw
            .announcements
            .unwrap_or_default()
            .into_iter()
            .map(|a| FilingRecord {
                title: a.announcement_title.unwrap_or_default(),
                id: a.announcement_id.map(value_to_string).unwrap_or_default(),
                timestamp: a.announcement_time.unwrap_or(0),
                attachment_path: a.adjunct_url.unwrap_or_default(),
            })
            .collect();

        QueryPage {
            total_announcements: raw.total_announcement.unwrap_or(0),
            records,
        }
    }
}

/// Render a JSON scalar as text; ids come back as strings or numbers
fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQueryResponse {
    #[serde(default)]
    total_announcement: Option<u64>,
    #[serde(default)]
    announcements: Option<Vec<RawAnnouncement>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnnouncement {
    #[serde(default)]
    announcement_title: Option<String>,
    #[serde(default)]
    announcement_id: Option<Value>,
    #[serde(default)]
    announcement_time: Option<i64>,
    #[serde(default)]
    adjunct_url: Option<String>,
}
