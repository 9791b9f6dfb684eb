//! Excel inspection module - reads .xlsx files through two views:
//! the value view (cached results) and the formula view (formula text).

pub mod inspector;

pub use inspector::{
    cell_reference, CellContent, CellReport, SheetReport, WorkbookInspector, WorkbookReport,
};
