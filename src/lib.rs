//! xlpeek - Workbook inspector for debugging spreadsheets
//!
//! This library opens an .xlsx workbook read-only and reports every sheet
//! and every populated cell: address, literal value, and for formula cells
//! the formula text alongside the last-cached calculated value.
//!
//! # Features
//!
//! - Two read views of one document: cached values and formula text
//! - Row-major cell listing with A1-style coordinates
//! - Formula cells reported even when their cached result is empty
//! - Degrades per cell instead of aborting when a cached value is missing
//!
//! # Example
//!
//! ```no_run
//! use xlpeek::excel::WorkbookInspector;
//! use xlpeek::report;
//!
//! let mut inspector = WorkbookInspector::open("model.xlsx")?;
//! let workbook = inspector.inspect()?;
//!
//! print!("{}", report::render_header(&workbook.sheet_names));
//! for sheet in &workbook.sheets {
//!     print!("{}", report::render_sheet(sheet));
//! }
//! # Ok::<(), xlpeek::error::PeekError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod report;

// Re-export commonly used types
pub use error::{PeekError, PeekResult};
pub use excel::{CellContent, CellReport, SheetReport, WorkbookInspector, WorkbookReport};
