use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::KatalogError;
use crate::extraction::SheetGrid;

/// Calamine-backed grid over one worksheet.
#[derive(Debug)]
pub struct XlsxGrid {
    range: Range<Data>,
}

/// Open a workbook from bytes and select a worksheet.
///
/// With `sheet = None` the first sheet of the workbook is used, mirroring
/// "active sheet" semantics. Empty input and unknown sheet names surface
/// before any block parsing begins.
pub fn open_xlsx(bytes: &[u8], sheet: Option<&str>) -> Result<XlsxGrid, KatalogError> {
    if bytes.is_empty() {
        return Err(KatalogError::Input("empty workbook".into()));
    }

    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| KatalogError::Input(format!("failed to open xlsx: {e}")))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|_| KatalogError::SheetNotFound { name: name.into() })?,
        None => {
            let first = workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| KatalogError::Input("workbook has no sheets".into()))?;
            workbook
                .worksheet_range(&first)
                .map_err(|e| KatalogError::Input(format!("failed to read sheet '{first}': {e}")))?
        }
    };

    Ok(XlsxGrid { range })
}

impl SheetGrid for XlsxGrid {
    fn cell(&self, row: u32, col: u32) -> String {
        if row == 0 || col == 0 {
            return String::new();
        }
        self.range
            .get_value((row - 1, col - 1))
            .map(cell_as_string)
            .unwrap_or_default()
    }

    fn max_row(&self) -> u32 {
        // Range end is absolute and 0-based; the grid is 1-based.
        self.range.end().map(|(r, _)| r + 1).unwrap_or(0)
    }
}

/// Normalize a cell value to trimmed text, the way the datasheets are read:
/// anything non-empty becomes a string, blanks become "".
fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Empty => String::new(),
        other => format!("{other}").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-sheet workbook ("Лист1") with "TE-01" in A1 and a description
    /// in A2.
    const MINIMAL_XLSX: &[u8] = include_bytes!("../../tests/fixtures/minimal.xlsx");

    #[test]
    fn empty_input_is_rejected() {
        let err = open_xlsx(&[], None).unwrap_err();
        assert!(matches!(err, KatalogError::Input(_)));
    }

    #[test]
    fn garbage_input_is_rejected() {
        let err = open_xlsx(b"not a zip archive", None).unwrap_err();
        assert!(matches!(err, KatalogError::Input(_)));
    }

    #[test]
    fn missing_named_sheet_is_rejected() {
        let err = open_xlsx(MINIMAL_XLSX, Some("Сводная")).unwrap_err();
        match err {
            KatalogError::SheetNotFound { name } => assert_eq!(name, "Сводная"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn named_sheet_is_selected() {
        let grid = open_xlsx(MINIMAL_XLSX, Some("Лист1")).unwrap();
        assert_eq!(grid.cell(1, 1), "TE-01");
    }

    #[test]
    fn first_sheet_is_the_default() {
        let grid = open_xlsx(MINIMAL_XLSX, None).unwrap();
        assert_eq!(grid.cell(1, 1), "TE-01");
        assert_eq!(grid.cell(2, 1), "Temperature sensor");
        assert_eq!(grid.max_row(), 2);
    }

    #[test]
    fn cell_as_string_trims_and_blanks() {
        assert_eq!(cell_as_string(&Data::String("  TE-01  ".into())), "TE-01");
        assert_eq!(cell_as_string(&Data::Float(63.0)), "63");
        assert_eq!(cell_as_string(&Data::Empty), "");
    }
}
