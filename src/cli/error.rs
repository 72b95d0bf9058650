//! CLI error types and conversions

use crate::fetcher::FetcherError;
use crate::registry::RegistryError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Catalog error
    #[error("registry error: {0}")]
    RegistryError(#[from] RegistryError),

    /// Fetcher error
    #[error("fetcher error: {0}")]
    FetcherError(#[from] FetcherError),
}
