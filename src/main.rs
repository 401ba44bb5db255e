use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::PathBuf;

use upgrade_report::convert::convert_file;
use upgrade_report::export::{export_csv, export_json};
use upgrade_report::ui::{pick_report, PickerOutcome};

#[derive(Parser, Debug)]
#[command(name = "upgrade-report")]
#[command(about = "Upgrade Report - turn a Revit upgrade log into a per-model Excel workbook")]
#[command(version)]
struct Args {
    /// Path to the HTML upgrade log (opens a file picker when omitted)
    file: Option<PathBuf>,

    /// Write the workbook here instead of next to the input
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also export one CSV per sheet into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Also export the grouped rows to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Directory the file picker starts in
    #[arg(long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let input = match args.file {
        Some(path) => path,
        None => match pick_report(&args.dir)? {
            PickerOutcome::Selected(path) => path,
            PickerOutcome::Cancelled => {
                println!("No file selected. Operation cancelled.");
                return Ok(());
            }
        },
    };

    let done = convert_file(&input, args.output.as_deref())?;
    println!(
        "Workbook created: {} ({} sheets, {} rows)",
        done.output.display(),
        done.table.sheet_count(),
        done.table.total_rows()
    );

    if let Some(csv_dir) = &args.csv {
        let files = export_csv(&done.table, csv_dir)?;
        println!("Exported {} CSV files to: {}", files.len(), csv_dir.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&done.table, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("UPGRADE_REPORT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| eyre!("failed to initialize tracing subscriber: {error}"))
}
