//! CLI command implementation

pub mod download;
pub mod error;

pub use download::{usage_text, Cli, RunStatus};
pub use error::CliError;
