//! CSV decoding.

use std::io::Read;

use super::{LoadError, RawTable};

/// Read a CSV document whose first row is the header.
///
/// Rows may have fewer or more cells than the header.
pub(crate) fn read_csv<R: Read>(reader: R) -> Result<RawTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_quoted_and_ragged() {
        let data = "Title,Author,Year\n\"A, B\",\"Said \"\"hi\"\"\",2001\nShort,Only\n";
        let raw = read_csv(data.as_bytes()).unwrap();

        assert_eq!(raw.headers, vec!["Title", "Author", "Year"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0], vec!["A, B", "Said \"hi\"", "2001"]);
        assert_eq!(raw.rows[1], vec!["Short", "Only"]);
    }

    #[test]
    fn test_read_csv_header_only() {
        let raw = read_csv("Judul,Penulis,Tahun\n".as_bytes()).unwrap();
        assert!(raw.rows.is_empty());
        assert_eq!(raw.into_table().unwrap().len(), 0);
    }

    #[test]
    fn test_read_csv_crlf() {
        let raw = read_csv("Title,Author,Year\r\nX,Y,1999\r\n".as_bytes()).unwrap();
        assert_eq!(raw.rows, vec![vec!["X", "Y", "1999"]]);
    }
}
