//! Utility modules supporting table loading and output.
//!
//! - [`HttpClient`]: HTTP client used to download online sheets
//! - [`RetryConfig`] / [`with_retry`]: exponential backoff for transient download errors
//! - [`truncate_with_ellipsis`] / [`terminal_width`]: terminal-aware text formatting
//!
//! # Retry with Backoff
//!
//! ```rust,no_run
//! use paper_finder::utils::{with_retry, HttpClient, RetryConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let config = RetryConfig::default().max_attempts(3);
//! let body = with_retry(config, || client.get_text("https://example.com/data.csv")).await?;
//! # Ok(())
//! # }
//! ```

mod display;
mod http;
mod retry;

pub use display::{terminal_width, truncate_with_ellipsis, DEFAULT_WIDTH};
pub use http::{HttpClient, DEFAULT_TIMEOUT};
pub use retry::{with_retry, RetryConfig, TransientError};
