//! Local storage layout for downloaded filings

pub mod path;

pub use path::{
    extract_year, filing_filename, sanitize_component, sanitize_title, FilingPathBuilder,
    UNKNOWN_YEAR,
};

/// Output errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
