//! Plain-text rendering of inspection results.
//!
//! Renderers are pure String builders so the CLI can stream sheet-by-sheet:
//! whatever was already printed stays valid if a later sheet fails.

use crate::excel::{CellContent, CellReport, SheetReport};
use calamine::Data;

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Render the workbook header: sheet count, names, separator
pub fn render_header(sheet_names: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Excel file has {} sheet(s):\n", sheet_names.len()));
    for name in sheet_names {
        out.push_str(&format!("  - {}\n", name));
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push_str("\n\n");
    out
}

/// Render one sheet section: name, extent, cell listing, separator
pub fn render_sheet(sheet: &SheetReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Sheet: {}\n", sheet.name));
    out.push_str(&format!(
        "Dimensions: {} rows x {} columns\n",
        sheet.rows, sheet.cols
    ));
    out.push_str("\n\n");

    if sheet.is_empty() {
        out.push_str("No data found in this sheet.\n");
    } else {
        out.push_str("Cell Values and Formulas:\n");
        out.push_str(LIGHT_RULE);
        out.push('\n');

        // Blank line between groups of cells that share a row
        let mut current_row = None;
        for cell in &sheet.cells {
            if current_row.is_some_and(|row| row != cell.row) {
                out.push('\n');
            }
            current_row = Some(cell.row);

            out.push_str(&render_cell(cell));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push_str("\n\n");
    out
}

/// Render a single cell line in one of the two forms
pub fn render_cell(cell: &CellReport) -> String {
    let reference = cell.reference();

    match &cell.content {
        CellContent::Plain(value) => {
            format!("{}: Value = {}", reference, format_data(value))
        }
        CellContent::Formula {
            text,
            cached: Some(value),
        } => {
            format!(
                "{}: Formula = {} | Calculated Value = {}",
                reference,
                text,
                format_data(value)
            )
        }
        // No cached result: the formula view's stored value is the formula
        // text itself, so show that rather than dropping the cell.
        CellContent::Formula { text, cached: None } => {
            format!("{}: Formula = {} | Value = {}", reference, text, text)
        }
    }
}

/// Format a cell value for display
pub fn format_data(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => e.to_string(),
        other => other.to_string(),
    }
}

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    // Round to 6 decimal places for display (sufficient for diagnostics,
    // also hides float precision artifacts from the cached results)
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
