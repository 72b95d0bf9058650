//! Download command implementation

use crate::downloader::config::DEFAULT_DATA_DIR;
use crate::downloader::{DownloadExecutor, DownloaderConfig, RunSummary};
use crate::fetcher::cninfo_http::CninfoHttpClient;
use crate::fetcher::FilingSource;
use crate::registry::CategoryCatalog;
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::error;

use super::CliError;

const BINARY_NAME: &str = "cninfo-filing-downloader";

/// cninfo filing downloader CLI
#[derive(Parser, Debug)]
#[command(name = "cninfo-filing-downloader")]
#[command(about = "Download annual reports and other filings from cninfo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Stock code, e.g. 600887, 000858, 300750 (omit to print usage)
    pub company_code: Option<String>,

    /// Comma-separated category names (default: 年度报告,半年度报告)
    pub categories: Option<String>,

    /// Root directory for downloaded filings
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,
}

/// What a CLI invocation ended with
#[derive(Debug)]
pub enum RunStatus {
    /// No company code given; usage was printed
    UsagePrinted,
    /// No requested category matched the catalog; usage was printed
    NoValidCategories,
    /// The run went through every selected category
    Completed(RunSummary),
}

impl Cli {
    /// Build the run configuration from the arguments
    pub fn config(&self) -> DownloaderConfig {
        DownloaderConfig::default().with_data_dir(self.data_dir.clone())
    }

    /// Execute against the live portal
    pub async fn execute(&self) -> Result<RunStatus, CliError> {
        let config = self.config();
        let client = CninfoHttpClient::new(&config)?;
        self.execute_with(&client, config).await
    }

    /// Execute against any filing source
    pub async fn execute_with(
        &self,
        source: &dyn FilingSource,
        config: DownloaderConfig,
    ) -> Result<RunStatus, CliError> {
        let catalog = CategoryCatalog::load_embedded()?;

        let Some(company_code) = self.company_code.as_deref() else {
            println!("{}", usage_text(&catalog));
            return Ok(RunStatus::UsagePrinted);
        };

        let outcome = catalog.select(self.categories.as_deref());
        if outcome.selection.is_empty() {
            error!("No valid categories");
            println!("{}", usage_text(&catalog));
            return Ok(RunStatus::NoValidCategories);
        }

        let executor = DownloadExecutor::new(source, config);
        let summary = executor.run(company_code, &outcome.selection).await;
        Ok(RunStatus::Completed(summary))
    }
}

/// Usage text listing the catalog and examples
pub fn usage_text(catalog: &CategoryCatalog) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Usage: {BINARY_NAME} <COMPANY_CODE> [CATEGORY1,CATEGORY2,...]");
    let _ = writeln!(text);
    let _ = writeln!(text, "Arguments:");
    let _ = writeln!(text, "  COMPANY_CODE   required, e.g. 600887, 000858, 300750");
    let _ = writeln!(
        text,
        "  CATEGORIES     optional, comma-separated, default 年度报告,半年度报告"
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Supported categories (支持的分类):");
    for entry in catalog.entries() {
        let _ = writeln!(text, "  - {} ({})", entry.name(), entry.description());
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "Examples:");
    let _ = writeln!(text, "  {BINARY_NAME} 600887");
    let _ = writeln!(text, "  {BINARY_NAME} 600887 年度报告");
    let _ = writeln!(text, "  {BINARY_NAME} 600887 年度报告,半年度报告,首发");
    let _ = write!(text, "  {BINARY_NAME} 000858 年度报告,一季度报告,三季度报告");
    text
}
