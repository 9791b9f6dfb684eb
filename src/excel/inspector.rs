//! Workbook inspector implementation - .xlsx → cell-by-cell report model
//!
//! A single calamine handle provides both read views of the document:
//! `worksheet_range` (cached results) and `worksheet_formula` (formula text).
//! Cells are keyed by absolute (row, column) so lookups between the two
//! views always line up, even when the views start at different offsets.

use crate::error::{PeekError, PeekResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// What one populated cell holds, decided at parse time from the file's
/// own type information: present in the formula view means formula cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Literal value as stored in the sheet
    Plain(Data),
    /// Formula text plus the result cached by the producing application.
    /// `cached` is `None` when the value view has nothing at this coordinate
    /// (e.g. the file was never saved by an application that calculates).
    Formula { text: String, cached: Option<Data> },
}

/// One populated cell at an absolute (row, column) position, both 0-based
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    pub row: u32,
    pub col: u32,
    pub content: CellContent,
}

impl CellReport {
    /// Human-readable coordinate, e.g. "B7"
    pub fn reference(&self) -> String {
        cell_reference(self.row, self.col)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self.content, CellContent::Formula { .. })
    }
}

/// One sheet's declared extent and its populated cells in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    pub name: String,
    /// Declared extent, 1-based counts. This is the file's own hint and may
    /// overstate the truly populated area.
    pub rows: u32,
    pub cols: u32,
    pub cells: Vec<CellReport>,
}

impl SheetReport {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Full inspection result for one workbook
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookReport {
    pub sheet_names: Vec<String>,
    pub sheets: Vec<SheetReport>,
}

/// Workbook inspector over an open read-only .xlsx handle
pub struct WorkbookInspector {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl std::fmt::Debug for WorkbookInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbookInspector")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl WorkbookInspector {
    /// Open a workbook for inspection
    pub fn open<P: AsRef<Path>>(path: P) -> PeekResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(PeekError::FileNotFound(path));
        }

        let workbook: Xlsx<_> = open_workbook(&path).map_err(PeekError::from_open)?;

        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in file order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Inspect every sheet in file order
    pub fn inspect(&mut self) -> PeekResult<WorkbookReport> {
        let sheet_names = self.sheet_names();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in &sheet_names {
            sheets.push(self.inspect_sheet(name)?);
        }

        Ok(WorkbookReport {
            sheet_names,
            sheets,
        })
    }

    /// Inspect a single sheet: extent plus all populated cells.
    ///
    /// A cell counts as populated if its value is non-empty or it holds a
    /// formula. Formula cells are kept even when their cached result is
    /// empty, so a never-calculated formula still shows up in the report.
    pub fn inspect_sheet(&mut self, name: &str) -> PeekResult<SheetReport> {
        let values = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| PeekError::Corruption(format!("sheet '{}': {}", name, e)))?;

        // Formula view is best-effort: a sheet with no formula part must not
        // sink the rest of the report.
        let formulas = self.workbook.worksheet_formula(name).ok();

        let (rows, cols) = declared_extent(&values, formulas.as_ref());
        let cells = populated_cells(name, &values, formulas.as_ref());

        Ok(SheetReport {
            name: name.to_string(),
            rows,
            cols,
            cells,
        })
    }
}

/// Collect the populated cells of both views, keyed by absolute coordinates.
///
/// `used_cells` yields positions relative to each range's start, and the two
/// views generally start at different offsets, so every position is shifted
/// by the owning range's `start()` before it is used as a key or fed to the
/// value-view lookup.
fn populated_cells(
    name: &str,
    values: &Range<Data>,
    formulas: Option<&Range<String>>,
) -> Vec<CellReport> {
    // BTreeMap keyed by (row, col) gives row-major order for free and
    // rules out duplicate coordinates.
    let mut contents: BTreeMap<(u32, u32), CellContent> = BTreeMap::new();

    if let Some(formulas) = formulas {
        let (start_row, start_col) = formulas.start().unwrap_or((0, 0));
        for (row, col, text) in formulas.used_cells() {
            if text.is_empty() {
                continue;
            }
            let position = (start_row + row as u32, start_col + col as u32);

            // calamine strips the leading '=' from formulas; put it back
            let text = if text.starts_with('=') {
                text.clone()
            } else {
                format!("={}", text)
            };

            // A failed value-view lookup degrades to no cached result
            // rather than aborting the sheet.
            let cached = lookup_cached(values, name, position).ok();
            contents.insert(position, CellContent::Formula { text, cached });
        }
    }

    let (start_row, start_col) = values.start().unwrap_or((0, 0));
    for (row, col, value) in values.used_cells() {
        let position = (start_row + row as u32, start_col + col as u32);
        if matches!(value, Data::Empty) || contents.contains_key(&position) {
            continue;
        }
        contents.insert(position, CellContent::Plain(value.clone()));
    }

    contents
        .into_iter()
        .map(|((row, col), content)| CellReport { row, col, content })
        .collect()
}

/// Fetch a formula cell's cached result from the value view
fn lookup_cached(values: &Range<Data>, sheet: &str, position: (u32, u32)) -> PeekResult<Data> {
    values
        .get_value(position)
        .cloned()
        .ok_or_else(|| PeekError::Lookup {
            sheet: sheet.to_string(),
            reference: cell_reference(position.0, position.1),
        })
}

/// Declared extent as 1-based (rows, columns), covering both views.
/// An empty sheet still reports a 1 x 1 extent.
fn declared_extent(values: &Range<Data>, formulas: Option<&Range<String>>) -> (u32, u32) {
    let mut end = values.end();

    if let Some((frow, fcol)) = formulas.and_then(|f| f.end()) {
        end = match end {
            Some((row, col)) => Some((row.max(frow), col.max(fcol))),
            None => Some((frow, fcol)),
        };
    }

    match end {
        Some((row, col)) => (row + 1, col + 1),
        None => (1, 1),
    }
}

/// Convert an absolute 0-based position to an A1-style reference (0,1 → "B1")
pub fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Convert column index to Excel column letters (0→A, 1→B, 25→Z, 26→AA, etc.)
fn column_letter(col: u32) -> String {
    let mut result = String::new();
    let mut num = col as usize;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        // Single letters
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(1), "B");
        assert_eq!(column_letter(25), "Z");

        // Double letters
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");

        // Triple letters
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_cell_reference() {
        assert_eq!(cell_reference(0, 0), "A1");
        assert_eq!(cell_reference(6, 1), "B7");
        assert_eq!(cell_reference(9, 26), "AA10");
    }

    #[test]
    fn test_declared_extent_empty_sheet() {
        let values: Range<Data> = Range::empty();
        assert_eq!(declared_extent(&values, None), (1, 1));
    }

    #[test]
    fn test_declared_extent_values_only() {
        let mut values: Range<Data> = Range::new((0, 0), (4, 2));
        values.set_value((4, 2), Data::Float(1.0));
        assert_eq!(declared_extent(&values, None), (5, 3));
    }

    #[test]
    fn test_declared_extent_formulas_extend_values() {
        let mut values: Range<Data> = Range::new((0, 0), (1, 1));
        values.set_value((1, 1), Data::Float(1.0));

        let mut formulas: Range<String> = Range::new((0, 0), (7, 3));
        formulas.set_value((7, 3), "A1*2".to_string());

        assert_eq!(declared_extent(&values, Some(&formulas)), (8, 4));
    }

    #[test]
    fn test_populated_cells_keep_absolute_positions_off_a1() {
        // Data anchored at B2, nothing in row 1 or column A
        let mut values: Range<Data> = Range::new((1, 1), (2, 2));
        values.set_value((1, 1), Data::String("hello".to_string()));
        values.set_value((2, 2), Data::Float(7.0));

        let cells = populated_cells("Sheet1", &values, None);

        let references: Vec<String> = cells.iter().map(|c| c.reference()).collect();
        assert_eq!(references, vec!["B2", "C3"]);
    }

    #[test]
    fn test_populated_cells_align_views_with_different_starts() {
        // Plain 21 at D5, formula at D6: the formula view starts a row
        // below the value view, so the offsets differ between views.
        let mut values: Range<Data> = Range::new((4, 3), (5, 3));
        values.set_value((4, 3), Data::Float(21.0));
        values.set_value((5, 3), Data::Float(42.0));

        let mut formulas: Range<String> = Range::new((5, 3), (5, 3));
        formulas.set_value((5, 3), "D5*2".to_string());

        let cells = populated_cells("Sheet1", &values, Some(&formulas));

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].reference(), "D5");
        assert_eq!(
            cells[0].content,
            CellContent::Plain(Data::Float(21.0))
        );
        assert_eq!(cells[1].reference(), "D6");
        assert_eq!(
            cells[1].content,
            CellContent::Formula {
                text: "=D5*2".to_string(),
                cached: Some(Data::Float(42.0)),
            }
        );
    }

    #[test]
    fn test_lookup_cached_missing_is_lookup_error() {
        let values: Range<Data> = Range::empty();
        let err = lookup_cached(&values, "Sheet1", (1, 0)).unwrap_err();
        assert!(matches!(err, PeekError::Lookup { .. }));
        assert!(err.to_string().contains("A2"));
    }

    #[test]
    fn test_cell_report_is_formula() {
        let plain = CellReport {
            row: 0,
            col: 0,
            content: CellContent::Plain(Data::Float(5.0)),
        };
        let formula = CellReport {
            row: 1,
            col: 0,
            content: CellContent::Formula {
                text: "=A1*2".to_string(),
                cached: Some(Data::Float(10.0)),
            },
        };

        assert!(!plain.is_formula());
        assert!(formula.is_formula());
        assert_eq!(formula.reference(), "A2");
    }
}
