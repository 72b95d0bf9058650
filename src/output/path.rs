//! Hierarchical path generation for downloaded filings
//!
//! Filings are stored as `{root}/{company}/{category}/{year}_{title}.PDF`.
//!
//! # Usage Example
//!
//! ```rust
//! use cninfo_filing_downloader::output::FilingPathBuilder;
//! use std::path::PathBuf;
//!
//! let builder = FilingPathBuilder::new(PathBuf::from("Downloads"), "600887", "年度报告");
//! let path = builder.file_path("2023年年度报告");
//! assert_eq!(path, PathBuf::from("Downloads/600887/年度报告/2023_2023年年度报告.PDF"));
//! ```

use super::{OutputError, OutputResult};
use crate::downloader::config::MAX_TITLE_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Placeholder used when a title carries no four-digit year
pub const UNKNOWN_YEAR: &str = "未知年份";

/// Fixed extension for stored filings, whatever the payload type
pub const FILE_EXTENSION: &str = "PDF";

/// Four digits (any script) immediately followed by 年 ("year")
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})年").unwrap_or_else(|e| panic!("invalid year pattern: {e}"))
});

/// Characters that are not allowed in a file name on common filesystems
const ILLEGAL_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Extract the first year written as "NNNN年" from a title
///
/// Returns [`UNKNOWN_YEAR`] when there is none.
pub fn extract_year(title: &str) -> String {
    YEAR_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Replace path-illegal characters with `_` and keep at most `max_chars` characters
pub fn sanitize_title(title: &str, max_chars: usize) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_control() || ILLEGAL_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .take(max_chars)
        .collect()
}

/// File name for a filing: `{year}_{sanitizedTitle}.PDF`
pub fn filing_filename(title: &str, max_title_chars: usize) -> String {
    format!(
        "{}_{}.{}",
        extract_year(title),
        sanitize_title(title, max_title_chars),
        FILE_EXTENSION
    )
}

/// Path builder for one company/category directory
#[derive(Debug, Clone)]
pub struct FilingPathBuilder {
    category_dir: PathBuf,
    max_title_chars: usize,
}

impl FilingPathBuilder {
    /// Create a builder for `{root_dir}/{company_code}/{category_name}`
    ///
    /// Company code and category name are sanitized so neither can escape the
    /// root directory.
    pub fn new(root_dir: PathBuf, company_code: &str, category_name: &str) -> Self {
        let category_dir = root_dir
            .join(sanitize_component(company_code))
            .join(sanitize_component(category_name));

        Self {
            category_dir,
            max_title_chars: MAX_TITLE_CHARS,
        }
    }

    /// Override the title length limit
    pub fn with_max_title_chars(mut self, max_title_chars: usize) -> Self {
        self.max_title_chars = max_title_chars;
        self
    }

    /// Directory holding this category's filings
    pub fn category_dir(&self) -> &Path {
        &self.category_dir
    }

    /// Full path of the file a filing with `title` is stored at
    pub fn file_path(&self, title: &str) -> PathBuf {
        self.category_dir
            .join(filing_filename(title, self.max_title_chars))
    }

    /// Ensure the category directory exists
    pub fn ensure_directories(&self) -> OutputResult<()> {
        std::fs::create_dir_all(&self.category_dir).map_err(|e| {
            OutputError::IoError(format!(
                "Failed to create directory {}: {}",
                self.category_dir.display(),
                e
            ))
        })
    }
}

/// Sanitize a single directory component
///
/// Prevents path traversal: separators become `_` and `..` becomes `__`.
pub fn sanitize_component(name: &str) -> String {
    sanitize_title(&name.replace("..", "__"), usize::MAX)
}
