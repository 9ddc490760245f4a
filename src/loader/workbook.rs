//! Excel / OpenDocument workbook decoding.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use super::{LoadError, RawTable};

/// Read the first worksheet of a workbook; its first row is the header.
pub(crate) fn read_first_sheet(path: &Path) -> Result<RawTable, LoadError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LoadError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyWorkbook)?
        .map_err(|e| LoadError::Workbook(e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    let headers = rows.next().unwrap_or_default();
    Ok(RawTable::new(headers, rows.collect()))
}

/// String form of a cell. Whole-number floats drop their fraction.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    #[test]
    fn test_read_first_sheet_xlsx() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Judul Paper").unwrap();
        sheet.write_string(0, 1, "Nama Penulis").unwrap();
        sheet.write_string(0, 2, "Tahun Terbit").unwrap();
        sheet.write_string(1, 0, "Deep Learning").unwrap();
        sheet.write_string(1, 1, "Smith").unwrap();
        sheet.write_number(1, 2, 2020).unwrap();
        sheet.write_string(2, 0, "Nets").unwrap();
        sheet.write_string(2, 1, "Jones").unwrap();
        sheet.write_string(2, 2, "unknown").unwrap();
        workbook.save(&path).unwrap();

        let raw = read_first_sheet(&path).unwrap();
        assert_eq!(raw.headers, vec!["Judul Paper", "Nama Penulis", "Tahun Terbit"]);
        assert_eq!(raw.rows[0], vec!["Deep Learning", "Smith", "2020"]);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Deep".to_string())), "Deep");
        assert_eq!(cell_text(&Data::Float(2020.0)), "2020");
        assert_eq!(cell_text(&Data::Float(2020.5)), "2020.5");
        assert_eq!(cell_text(&Data::Int(1999)), "1999");
    }

    #[test]
    fn test_missing_workbook() {
        let result = read_first_sheet(Path::new("/nonexistent/papers.xlsx"));
        assert!(matches!(result, Err(LoadError::Workbook(_))));
    }
}
