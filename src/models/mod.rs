//! Core data models for paper records and search operations.

mod record;
mod search;

pub use record::{ParseFieldError, Record, RecordBuilder, SearchField, Table};
pub use search::{ParseStrategyError, SearchQuery, SearchResult, SearchStrategy};
