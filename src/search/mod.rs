//! Substring search over a loaded [`Table`].
//!
//! Two interchangeable strategies are provided:
//!
//! - [`linear_search`]: scans every record and keeps table order. Finds every match.
//! - [`binary_search`]: sorts a copy of the table by the chosen field, binary
//!   searches for any record containing the keyword, then collects the run of
//!   matching neighbours around it.
//!
//! Both compare the lower-cased field value against the lower-cased keyword.
//!
//! # Example
//!
//! ```rust
//! use paper_finder::models::{Record, SearchField, SearchQuery, SearchStrategy, Table};
//! use paper_finder::search;
//!
//! let table = Table::new(vec![
//!     Record::new("Deep Learning Survey", "Smith", 2020),
//!     Record::new("Shallow Methods", "Lee", 2019),
//! ]);
//!
//! let query = SearchQuery::new("DEEP").field(SearchField::Title);
//! let result = search::execute(&table, &query);
//! assert_eq!(result.len(), 1);
//!
//! let by_year = SearchQuery::new("2019")
//!     .field(SearchField::Year)
//!     .strategy(SearchStrategy::Binary);
//! assert_eq!(search::execute(&table, &by_year).records()[0].author, "Lee");
//! ```

mod binary;
mod linear;

pub use binary::binary_search;
pub use linear::linear_search;

use crate::models::{Record, SearchField, SearchQuery, SearchResult, SearchStrategy, Table};

/// Lower-cased string form of a record's field, used for every comparison.
pub fn normalize(record: &Record, field: SearchField) -> String {
    record.field_value(field).to_lowercase()
}

/// Lower-cased keyword
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.to_lowercase()
}

impl SearchStrategy {
    /// Run this strategy over `table`
    pub fn run(&self, table: &Table, keyword: &str, field: SearchField) -> SearchResult {
        match self {
            SearchStrategy::Linear => linear_search(table, keyword, field),
            SearchStrategy::Binary => binary_search(table, keyword, field),
        }
    }
}

/// Run a [`SearchQuery`] against `table`
pub fn execute(table: &Table, query: &SearchQuery) -> SearchResult {
    let result = query.strategy.run(table, &query.keyword, query.field);

    tracing::debug!(
        strategy = %query.strategy,
        field = %query.field,
        keyword = %query.keyword,
        matches = result.len(),
        records = table.len(),
        "search complete"
    );

    result
}
