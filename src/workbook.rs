//! Cell-level access to the input workbook.
//!
//! Transforms never talk to the spreadsheet library directly. They see a
//! [`Sheet`]: a 2-D grid addressed by (column letter, 1-based row number) whose
//! accessor returns `None` for blank cells. This keeps the per-sheet transforms
//! pure and testable against an in-memory grid.

use std::collections::HashMap;

/// Read-only view of one worksheet.
///
/// A cell is blank (`None`) when it is absent from the grid or holds an empty
/// string; every non-blank scalar comes back stringified. Columns are single
/// letters `A`..=`Z`, rows are 1-based, matching spreadsheet addressing.
pub trait Sheet {
    fn cell(&self, col: char, row: u32) -> Option<String>;

    /// Cell value, or `""` when blank.
    fn text(&self, col: char, row: u32) -> String {
        self.cell(col, row).unwrap_or_default()
    }

    /// Cell value, or `fallback` when blank.
    fn text_or(&self, col: char, row: u32, fallback: &str) -> String {
        self.cell(col, row)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// In-memory grid stub for unit tests and library callers without a workbook.
#[derive(Debug, Default)]
pub struct MemorySheet {
    cells: HashMap<(char, u32), String>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, col: char, row: u32, value: impl Into<String>) -> &mut Self {
        self.cells.insert((col, row), value.into());
        self
    }
}

impl Sheet for MemorySheet {
    fn cell(&self, col: char, row: u32) -> Option<String> {
        self.cells
            .get(&(col, row))
            .filter(|s| !s.is_empty())
            .cloned()
    }
}

#[cfg(feature = "xlsx")]
pub use self::xlsx::{WorksheetGrid, XlsxWorkbook};

#[cfg(feature = "xlsx")]
mod xlsx {
    use super::Sheet;
    use crate::error::{SitedataError, SitedataResult};
    use calamine::{open_workbook, Data, Range, Reader, Xlsx};
    use std::path::Path;

    /// Calamine-backed workbook handle, opened once per run.
    pub struct XlsxWorkbook {
        inner: Xlsx<std::io::BufReader<std::fs::File>>,
    }

    impl XlsxWorkbook {
        pub fn open(path: &Path) -> SitedataResult<Self> {
            let inner: Xlsx<_> = open_workbook(path).map_err(|e| {
                SitedataError::Workbook(format!("failed to open {}: {}", path.display(), e))
            })?;
            Ok(Self { inner })
        }

        pub fn has_sheet(&self, name: &str) -> bool {
            self.inner.sheet_names().iter().any(|s| s == name)
        }

        /// Load one worksheet by name. `Ok(None)` when the sheet does not
        /// exist; a read failure on a sheet that does exist is an error.
        pub fn sheet(&mut self, name: &str) -> SitedataResult<Option<WorksheetGrid>> {
            if !self.has_sheet(name) {
                return Ok(None);
            }
            let range = self.inner.worksheet_range(name).map_err(|e| {
                SitedataError::Workbook(format!("failed to read sheet {name}: {e}"))
            })?;
            Ok(Some(WorksheetGrid { range }))
        }
    }

    /// One loaded worksheet's cell range.
    pub struct WorksheetGrid {
        range: Range<Data>,
    }

    impl Sheet for WorksheetGrid {
        fn cell(&self, col: char, row: u32) -> Option<String> {
            let col_idx = column_index(col)?;
            let row_idx = row.checked_sub(1)?;
            stringify(self.range.get_value((row_idx, col_idx))?)
        }
    }

    /// Column letter to 0-based index (A→0 .. Z→25).
    fn column_index(col: char) -> Option<u32> {
        col.is_ascii_uppercase().then(|| col as u32 - 'A' as u32)
    }

    /// Render a cell scalar as the string the JSON output carries.
    /// Blank cells (empty or error) become `None`.
    fn stringify(data: &Data) -> Option<String> {
        match data {
            Data::Empty | Data::Error(_) => None,
            Data::String(s) if s.is_empty() => None,
            Data::String(s) => Some(s.clone()),
            Data::Int(i) => Some(i.to_string()),
            Data::Float(f) => Some(format_float(*f)),
            Data::Bool(b) => Some(b.to_string()),
            // "YYYY-MM-DD HH:MM:SS", same as the sheet shows it
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(|d| d.to_string())
                .or_else(|| Some(dt.as_f64().to_string())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        }
    }

    /// Integral floats print without a trailing `.0`, so numeric ids like
    /// `2025` survive the cell round-trip intact.
    fn format_float(f: f64) -> String {
        if f.fract() == 0.0 && f.abs() < 1e15 {
            (f as i64).to_string()
        } else {
            f.to_string()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_column_index() {
            assert_eq!(column_index('A'), Some(0));
            assert_eq!(column_index('N'), Some(13));
            assert_eq!(column_index('Z'), Some(25));
            assert_eq!(column_index('a'), None);
            assert_eq!(column_index('1'), None);
        }

        #[test]
        fn test_stringify_blank_variants() {
            assert_eq!(stringify(&Data::Empty), None);
            assert_eq!(stringify(&Data::String(String::new())), None);
        }

        #[test]
        fn test_stringify_numbers() {
            assert_eq!(stringify(&Data::Int(42)), Some("42".to_string()));
            assert_eq!(stringify(&Data::Float(2025.0)), Some("2025".to_string()));
            assert_eq!(stringify(&Data::Float(1.5)), Some("1.5".to_string()));
        }

        #[test]
        fn test_stringify_keeps_whitespace() {
            // Only the empty string counts as blank
            assert_eq!(
                stringify(&Data::String(" ".to_string())),
                Some(" ".to_string())
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sheet_blank_cells() {
        let mut sheet = MemorySheet::new();
        sheet.set('A', 3, "x").set('B', 3, "");

        assert_eq!(sheet.cell('A', 3), Some("x".to_string()));
        assert_eq!(sheet.cell('B', 3), None); // empty string is blank
        assert_eq!(sheet.cell('C', 3), None); // absent is blank
    }

    #[test]
    fn test_text_helpers() {
        let mut sheet = MemorySheet::new();
        sheet.set('A', 1, "value");

        assert_eq!(sheet.text('A', 1), "value");
        assert_eq!(sheet.text('B', 1), "");
        assert_eq!(sheet.text_or('B', 1, "fallback"), "fallback");
        assert_eq!(sheet.text_or('A', 1, "fallback"), "value");
    }
}
