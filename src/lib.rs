//! # Upgrade Report
//!
//! Converts a Revit model-upgrade log (an HTML page embedding its results as JSON)
//! into an Excel workbook with one sheet per upgraded model.
//!
//! ## Pipeline
//!
//! - Extract the `reportsData` script from the HTML
//! - Decode the embedded JSON report
//! - Flatten warnings, errors and document-corruption issues into rows per model
//! - Write one worksheet per model (optionally CSV and JSON too)
//!
//! ## Example
//!
//! ```no_run
//! use upgrade_report::convert::convert_file;
//!
//! let done = convert_file("UpgradeLog.html", None).expect("Failed to convert");
//! println!("Project: {}", done.table.project_name);
//! println!("Rows: {}", done.table.total_rows());
//! ```

pub mod convert;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod ui;
