//! Search request and result models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Record, SearchField};

/// Strategy used to find matching records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Scan every record in table order
    #[default]
    Linear,
    /// Sort by the field, probe for one match, then collect its neighbours
    Binary,
}

impl SearchStrategy {
    /// Returns the display name of the strategy
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Linear => "Linear Search",
            SearchStrategy::Binary => "Binary Search",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a strategy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown search strategy: {0} (expected linear or binary)")]
pub struct ParseStrategyError(pub String);

impl FromStr for SearchStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(SearchStrategy::Linear),
            "binary" => Ok(SearchStrategy::Binary),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Keyword matched as a case-insensitive substring
    pub keyword: String,

    /// Field the keyword is matched against
    pub field: SearchField,

    /// Strategy used to run the query
    pub strategy: SearchStrategy,
}

impl SearchQuery {
    /// Create a new linear query on the title field
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            field: SearchField::Title,
            strategy: SearchStrategy::Linear,
        }
    }

    /// Set the field
    pub fn field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    /// Set the strategy
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Records matching a query, in the order the strategy produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult {
    records: Vec<Record>,
}

impl SearchResult {
    /// Create a result from matched records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Matched records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over matched records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the result, returning the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl FromIterator<Record> for SearchResult {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
