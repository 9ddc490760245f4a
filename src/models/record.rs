//! Paper record and table models.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// A single row of paper metadata.
///
/// Every loaded record carries all three canonical fields. A `year` of `0`
/// means the source cell was empty or could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Paper title
    #[serde(rename = "Title")]
    pub title: String,

    /// Author name(s) as written in the source sheet
    #[serde(rename = "Author")]
    pub author: String,

    /// Publication year (0 = unknown)
    #[serde(rename = "Year")]
    pub year: u32,
}

impl Record {
    /// Create a new record
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Returns the raw string form of the given field.
    ///
    /// Year is rendered in decimal, matching how the loader canonicalizes it.
    pub fn field_value(&self, field: SearchField) -> Cow<'_, str> {
        match field {
            SearchField::Title => Cow::Borrowed(&self.title),
            SearchField::Author => Cow::Borrowed(&self.author),
            SearchField::Year => Cow::Owned(self.year.to_string()),
        }
    }
}

/// Builder for constructing Record objects
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl Default for Record {
    fn default() -> Self {
        Self::new(String::new(), String::new(), 0)
    }
}

impl RecordBuilder {
    /// Create a new builder with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            record: Record {
                title: title.into(),
                ..Default::default()
            },
        }
    }

    /// Set author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.record.author = author.into();
        self
    }

    /// Set year
    pub fn year(mut self, year: u32) -> Self {
        self.record.year = year;
        self
    }

    /// Build the Record
    pub fn build(self) -> Record {
        self.record
    }
}

/// Which field of a [`Record`] takes part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Year,
}

impl SearchField {
    /// All fields in menu order
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Year];

    /// Returns the canonical column name
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Year => "Year",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a field name is not one of Title, Author or Year
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown search field: {0} (expected title, author or year)")]
pub struct ParseFieldError(pub String);

impl FromStr for SearchField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "judul" => Ok(SearchField::Title),
            "author" | "penulis" => Ok(SearchField::Author),
            "year" | "tahun" => Ok(SearchField::Year),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// An ordered, read-only collection of records in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Create a table from records, keeping their order
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
