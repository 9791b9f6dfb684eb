use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use xlpeek::cli;

#[derive(Parser)]
#[command(name = "xlpeek")]
#[command(about = "Dump every cell value and formula in an .xlsx workbook")]
#[command(long_about = "xlpeek - Workbook inspector for debugging spreadsheets

Opens an .xlsx file read-only and prints, for every sheet, every populated
cell's address, literal value, and (for formula cells) the formula text plus
the value last calculated by the application that saved the file.

OUTPUT:
  A1: Value = 5
  A2: Formula = =A1*2 | Calculated Value = 10

xlpeek never evaluates formulas itself - it only reports what the file
already contains. The workbook is never modified.

EXAMPLES:
  xlpeek model.xlsx              # Inspect a workbook
  xlpeek model.xlsx --verbose    # Show processing steps as well
  xlpeek                         # Inspect the default workbook")]
#[command(version)]
struct Cli {
    /// Path to the workbook (.xlsx)
    #[arg(default_value = "Equated Lease cal.xlsx")]
    file: PathBuf,

    /// Show verbose processing steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::inspect(cli.file, cli.verbose) {
        // Best-effort diagnostic tool: the failure goes to stdout next to
        // whatever partial report was already printed, with the full chain.
        let err = anyhow::Error::new(e);
        println!(
            "{}",
            format!("Error reading Excel file: {}", err).red().bold()
        );
        for cause in err.chain().skip(1) {
            println!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
