//! Header-and-cells intermediate table and its normalization.

use super::LoadError;
use crate::models::{Record, SearchField, Table};

/// Column name aliases accepted for each canonical field (compared lower-cased)
const TITLE_ALIASES: &[&str] = &["judul paper", "judul", "title", "paper title"];
const AUTHOR_ALIASES: &[&str] = &["nama penulis", "penulis", "author", "authors"];
const YEAR_ALIASES: &[&str] = &["tahun terbit", "tahun", "year", "publication year"];

/// Decoded sheet before column normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names as written in the source
    pub headers: Vec<String>,
    /// Data rows; may be shorter or longer than `headers`
    pub rows: Vec<Vec<String>>,
}

/// Map a source column name onto a canonical field, if it is a known alias.
pub fn canonical_column(header: &str) -> Option<SearchField> {
    let name = header.trim_start_matches('\u{feff}').trim().to_lowercase();

    if TITLE_ALIASES.contains(&name.as_str()) {
        Some(SearchField::Title)
    } else if AUTHOR_ALIASES.contains(&name.as_str()) {
        Some(SearchField::Author)
    } else if YEAR_ALIASES.contains(&name.as_str()) {
        Some(SearchField::Year)
    } else {
        None
    }
}

/// Coerce a year cell to a non-negative integer.
///
/// Integers and finite decimals (truncated) are accepted. Anything else,
/// including negative numbers, yields `0`.
pub fn parse_year(cell: &str) -> u32 {
    let cell = cell.trim();

    if let Ok(year) = cell.parse::<u32>() {
        return year;
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => {
            value.trunc() as u32
        }
        _ => 0,
    }
}

impl RawTable {
    /// Create a raw table
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first column mapping to `field`
    fn column(&self, field: SearchField) -> Result<usize, LoadError> {
        self.headers
            .iter()
            .position(|h| canonical_column(h) == Some(field))
            .ok_or(LoadError::MissingColumn(field.name()))
    }

    /// Normalize into a [`Table`], skipping rows with no content
    pub fn into_table(self) -> Result<Table, LoadError> {
        let title = self.column(SearchField::Title)?;
        let author = self.column(SearchField::Author)?;
        let year = self.column(SearchField::Year)?;

        let cell = |row: &[String], idx: usize| -> String {
            row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
        };

        let mut records = Vec::with_capacity(self.rows.len());
        for (line, row) in self.rows.iter().enumerate() {
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }

            let year_cell = cell(row, year);
            let parsed = parse_year(&year_cell);
            if parsed == 0 && !year_cell.is_empty() {
                tracing::debug!("Row {}: unreadable year {:?}, using 0", line + 1, year_cell);
            }

            records.push(Record::new(cell(row, title), cell(row, author), parsed));
        }

        Ok(Table::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_canonical_column() {
        assert_eq!(canonical_column("Judul Paper"), Some(SearchField::Title));
        assert_eq!(canonical_column("  title "), Some(SearchField::Title));
        assert_eq!(canonical_column("Nama Penulis"), Some(SearchField::Author));
        assert_eq!(canonical_column("Authors"), Some(SearchField::Author));
        assert_eq!(canonical_column("Tahun Terbit"), Some(SearchField::Year));
        assert_eq!(canonical_column("\u{feff}Year"), Some(SearchField::Year));
        assert_eq!(canonical_column("Abstract"), None);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2020"), 2020);
        assert_eq!(parse_year(" 2019 "), 2019);
        assert_eq!(parse_year("2020.0"), 2020);
        assert_eq!(parse_year("2020.7"), 2020);
        assert_eq!(parse_year(""), 0);
        assert_eq!(parse_year("n/a"), 0);
        assert_eq!(parse_year("-5"), 0);
        assert_eq!(parse_year("NaN"), 0);
        assert_eq!(parse_year("inf"), 0);
    }

    #[test]
    fn test_into_table_reorders_columns() {
        let raw = RawTable::new(
            strings(&["Tahun", "Notes", "Penulis", "Judul"]),
            vec![
                strings(&["2021", "x", "Jones", "Deep Networks"]),
                strings(&["", "", "", ""]),
                strings(&["bad", "", "Lee"]),
            ],
        );

        let table = raw.into_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], Record::new("Deep Networks", "Jones", 2021));
        // short row: missing title cell becomes empty
        assert_eq!(table.records()[1], Record::new("", "Lee", 0));
    }

    #[test]
    fn test_missing_column() {
        let raw = RawTable::new(strings(&["Title", "Author"]), vec![]);
        assert!(matches!(raw.into_table(), Err(LoadError::MissingColumn("Year"))));
    }
}
