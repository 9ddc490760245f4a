//! Linear substring scan.

use super::{normalize, normalize_keyword};
use crate::models::{SearchField, SearchResult, Table};

/// Return every record whose `field` contains `keyword`, ignoring case.
///
/// Records keep their table order. An empty keyword matches every record.
pub fn linear_search(table: &Table, keyword: &str, field: SearchField) -> SearchResult {
    let keyword = normalize_keyword(keyword);

    table
        .iter()
        .filter(|record| normalize(record, field).contains(&keyword))
        .cloned()
        .collect()
}
