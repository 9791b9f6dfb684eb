use crate::error::PeekResult;
use crate::excel::WorkbookInspector;
use crate::report;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the inspect command: print the full workbook report to stdout
pub fn inspect(file: PathBuf, verbose: bool) -> PeekResult<()> {
    if verbose {
        println!("{}", "🔍 xlpeek - Inspecting workbook".bold().green());
        println!("   File: {}", file.display());
        println!();
    }

    let mut inspector = WorkbookInspector::open(&file)?;
    let sheet_names = inspector.sheet_names();

    if verbose {
        println!(
            "{}",
            format!("📖 Workbook opened, {} sheet(s) found", sheet_names.len()).cyan()
        );
        println!();
    }

    print!("{}", report::render_header(&sheet_names));

    // Stream one sheet at a time so output printed for earlier sheets
    // survives a failure later in the run.
    for name in &sheet_names {
        let sheet = inspector.inspect_sheet(name)?;
        print!("{}", report::render_sheet(&sheet));
    }

    Ok(())
}
