//! Loading paper tables from local spreadsheets and online Google Sheets.
//!
//! Every source is first decoded into a [`RawTable`] of header and string
//! cells, then normalized into a [`Table`] with the canonical Title, Author
//! and Year columns. Column names may use any of the known aliases (see
//! [`canonical_column`]), and unreadable years become `0`.
//!
//! Supported local formats:
//!
//! - `.csv`
//! - `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods` (first worksheet only)
//!
//! Online sources are Google Sheets sharing links, converted with
//! [`csv_export_url`] and downloaded as CSV.

mod delimited;
mod raw;
mod sheets;
mod workbook;

pub use raw::{canonical_column, parse_year, RawTable};
pub use sheets::csv_export_url;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::Table;
use crate::utils::{with_retry, HttpClient, RetryConfig};

/// Where a table is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Spreadsheet or CSV file on disk
    Local(PathBuf),
    /// Google Sheets sharing URL
    Online(String),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Local(path) => write!(f, "local file {}", path.display()),
            DataSource::Online(url) => write!(f, "Google Sheets {}", url),
        }
    }
}

/// Errors that can occur while loading a table
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not a known spreadsheet format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Sharing URL has no document id or no gid
    #[error("Invalid Google Sheets URL: {0}")]
    InvalidSheetUrl(String),

    /// Network or HTTP client error
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    Http { status: u16, url: String },

    /// CSV decoding error
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// Workbook decoding error
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Workbook has no worksheet to read
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    /// A canonical column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => LoadError::Network(err.to_string()),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err.to_string())
    }
}

/// Loads tables from any [`DataSource`]
#[derive(Debug, Clone)]
pub struct TableLoader {
    client: Arc<HttpClient>,
    retry: RetryConfig,
}

impl TableLoader {
    /// Create a loader using `client` for online sheets
    pub fn new(client: HttpClient) -> Self {
        Self {
            client: Arc::new(client),
            retry: RetryConfig::default(),
        }
    }

    /// Set the retry policy for online downloads
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Load and normalize a table from `source`
    pub async fn load(&self, source: &DataSource) -> Result<Table, LoadError> {
        let table = match source {
            DataSource::Local(path) => load_file(path)?,
            DataSource::Online(url) => {
                let export_url = csv_export_url(url)?;
                self.load_csv_url(&export_url).await?
            }
        };

        tracing::info!("Loaded {} records from {}", table.len(), source);
        Ok(table)
    }

    /// Download a CSV document and normalize it into a table
    pub async fn load_csv_url(&self, url: &str) -> Result<Table, LoadError> {
        tracing::debug!("Fetching CSV export from {}", url);

        let body = with_retry(self.retry, || {
            let client = Arc::clone(&self.client);
            let url = url.to_string();
            async move { client.get_text(&url).await }
        })
        .await?;

        delimited::read_csv(body.as_bytes())?.into_table()
    }
}

/// Load a local spreadsheet or CSV file, choosing the decoder by extension
pub fn load_file(path: &Path) -> Result<Table, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "csv" => delimited::read_csv(std::fs::File::open(path)?)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => workbook::read_first_sheet(path)?,
        _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
    };

    raw.into_table()
}
