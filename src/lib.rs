//! # Paper Finder
//!
//! Load a spreadsheet of academic paper metadata (title, author, year) from
//! a local file or a Google Sheets link and search it by keyword.
//!
//! ## Architecture
//!
//! - [`models`]: Record, Table, search field/strategy and result types
//! - [`loader`]: CSV/workbook decoding, column normalization, Google Sheets export
//! - [`search`]: linear and binary substring search
//! - [`present`]: plain, table and JSON rendering of results
//! - [`shell`]: menu-driven interactive session
//! - [`config`]: configuration management
//! - [`ui`]: status lines and spinners for the CLI
//! - [`utils`]: HTTP client, retry and terminal helpers

pub mod config;
pub mod loader;
pub mod models;
pub mod present;
pub mod search;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use loader::{DataSource, LoadError, TableLoader};
pub use models::{Record, SearchField, SearchResult, SearchStrategy, Table};
pub use search::{binary_search, linear_search};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
